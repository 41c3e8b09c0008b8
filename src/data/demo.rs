//! Fixed sample data so the dashboard can be driven without the backend.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::config::{ChangePct, Money};
use crate::data::DashboardSnapshot;
use crate::models::{
    CategoryDelta, ConfidenceInterval, ForecastStatistics, MonthComparison, PeriodTotals,
    SeriesPoint, Transaction,
};

/// Deterministic ids so repeated generator runs produce identical files.
fn demo_id(seed: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes())
}

fn tx(seed: &str, month: u32, day: u32, amount: f64, category: &str, note: Option<&str>) -> Transaction {
    Transaction {
        id: demo_id(seed),
        date: NaiveDate::from_ymd_opt(2026, month, day).expect("valid demo date"),
        amount: Money::new(amount),
        category: category.to_string(),
        note: note.map(str::to_string),
    }
}

fn delta(category: &str, previous: f64, current: f64, change_percent: f64) -> CategoryDelta {
    CategoryDelta {
        category: category.to_string(),
        previous: Money::new(previous),
        current: Money::new(current),
        change_percent: ChangePct::new(change_percent),
    }
}

/// Half a year of history, a quarter of forecast, one month comparison and a
/// page of operations. Amounts are rubles; percentages mirror what the
/// backend aggregation would have produced for these numbers.
pub fn demo_snapshot() -> DashboardSnapshot {
    let history = vec![
        SeriesPoint::actual(1, 2026, 84_310.45),
        SeriesPoint::actual(2, 2026, 78_920.10),
        SeriesPoint::actual(3, 2026, 91_450.00),
        SeriesPoint::actual(4, 2026, 86_780.35),
        SeriesPoint::actual(5, 2026, 82_115.20),
        SeriesPoint::actual(6, 2026, 88_530.75),
    ];

    let forecast = vec![
        SeriesPoint::forecast(7, 2026, 87_200.00, Some((79_400.00, 95_000.00))),
        SeriesPoint::forecast(8, 2026, 88_950.00, Some((78_100.00, 99_800.00))),
        // The model declined a band for the far month.
        SeriesPoint::forecast(9, 2026, 90_310.00, None),
    ];

    let statistics = ForecastStatistics {
        average: Money::new(85_351.14),
        std_deviation: Money::new(4_287.62),
        confidence_interval: ConfidenceInterval {
            min: Money::new(76_775.90),
            max: Money::new(93_926.38),
        },
    };

    let comparison = MonthComparison {
        current: PeriodTotals {
            total: Money::new(88_530.75),
            count: 47,
        },
        previous: PeriodTotals {
            total: Money::new(82_115.20),
            count: 51,
        },
        total_change_percent: ChangePct::new(7.8),
        by_category: vec![
            delta("Food", 24_340.00, 26_180.50, 7.6),
            delta("Cafe", 9_870.00, 8_120.00, -17.7),
            delta("Transport", 6_450.00, 6_640.00, 2.9),
            delta("Entertainment", 4_200.00, 7_310.25, 74.1),
            delta("Utilities", 8_930.20, 8_930.20, 0.0),
            delta("Health", 5_125.00, 4_870.00, -5.0),
            // A code the display table does not know yet.
            delta("Subscriptions", 1_890.00, 2_480.00, 31.2),
        ],
    };

    let transactions = vec![
        tx("demo-tx-001", 6, 1, 2_145.30, "Food", Some("Перекрёсток")),
        tx("demo-tx-002", 6, 2, 380.00, "Transport", None),
        tx("demo-tx-003", 6, 3, 1_250.00, "Cafe", Some("обед с коллегами")),
        tx("demo-tx-004", 6, 5, 3_490.99, "Shopping", Some("кроссовки")),
        tx("demo-tx-005", 6, 7, 8_930.20, "Utilities", Some("ЖКХ за май")),
        tx("demo-tx-006", 6, 8, 1_780.45, "Food", None),
        tx("demo-tx-007", 6, 10, 2_400.00, "Entertainment", Some("концерт")),
        tx("demo-tx-008", 6, 12, 4_870.00, "Health", Some("стоматолог")),
        tx("demo-tx-009", 6, 14, 620.00, "Transport", Some("такси")),
        tx("demo-tx-010", 6, 15, 2_480.00, "Subscriptions", Some("годовая подписка")),
        tx("demo-tx-011", 6, 18, 3_120.75, "Food", None),
        tx("demo-tx-012", 6, 21, 990.00, "Cafe", None),
        tx("demo-tx-013", 6, 25, 4_910.25, "Entertainment", Some("парк развлечений")),
        tx("demo-tx-014", 5, 28, 1_560.00, "Food", None),
        tx("demo-tx-015", 5, 30, 430.00, "Transport", None),
    ];

    DashboardSnapshot {
        transactions,
        history,
        forecast,
        statistics,
        comparison,
    }
}
