use kopilka::analysis::{filter_by_category, known_categories, spent_total};
use kopilka::ui::{UI_TEXT, chart_table, comparison_table, statistics_block, transactions_table};
use kopilka::{demo_snapshot, load_snapshot, merge_series, save_snapshot};

#[test]
fn demo_snapshot_round_trips_through_disk() {
    let path = std::env::temp_dir().join("kopilka_dashboard_flow.json");
    let snapshot = demo_snapshot();

    save_snapshot(&path, &snapshot).unwrap();
    let restored = load_snapshot(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(restored, snapshot);
}

#[test]
fn merged_demo_series_is_gap_free_and_bridged() {
    let snapshot = demo_snapshot();
    let rows = merge_series(&snapshot.history, &snapshot.forecast);

    assert_eq!(rows.len(), snapshot.history.len() + snapshot.forecast.len());

    let boundary = &rows[snapshot.history.len() - 1];
    assert_eq!(boundary.forecast, boundary.actual);
    assert!(boundary.confidence_min.is_none());

    // Every row lands on exactly one of the two lines (plus the bridge).
    assert!(rows.iter().all(|r| r.actual.is_some() || r.forecast.is_some()));
}

#[test]
fn every_view_renders_from_the_demo_snapshot() {
    let snapshot = demo_snapshot();

    let chart = chart_table(&merge_series(&snapshot.history, &snapshot.forecast));
    assert!(chart.contains(UI_TEXT.col_month));
    assert!(chart.contains("Июл 2026"));

    let stats = statistics_block(&snapshot.statistics);
    assert!(stats.contains(UI_TEXT.stat_average));

    let comparison = comparison_table(&snapshot.comparison);
    assert!(comparison.contains(UI_TEXT.col_category));
    // The demo carries a code the label table does not know; it must render raw.
    assert!(comparison.contains("Subscriptions"));

    let picked = filter_by_category(&snapshot.transactions, Some("Food"));
    assert!(!picked.is_empty());
    assert!(spent_total(&picked).value() > 0.0);

    let table = transactions_table(&picked);
    assert!(table.contains(UI_TEXT.col_date));
    assert!(table.contains("Еда"));

    assert!(known_categories(&snapshot.transactions).contains(&"Food"));
}
