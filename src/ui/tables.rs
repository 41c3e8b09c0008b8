use tabled::builder::Builder;
use tabled::settings::Style;

use crate::analysis::{ChangeDirection, Tone, category_label, classify_change, tone_for};
use crate::config::{MAX_TRANSACTION_ROWS, Money};
use crate::models::{CategoryDelta, ChartRow, ForecastStatistics, MonthComparison, Transaction};
use crate::ui::text::UI_TEXT;
use crate::ui::theme::THEME;

/// Display-ready verdict for one category movement: label, trend, tone and
/// the formatted percent, everything a renderer needs for the indicator.
pub struct DeltaIndicator {
    pub label: String,
    pub direction: ChangeDirection,
    pub tone: Tone,
    pub formatted_percent: String,
}

pub fn delta_indicator(delta: &CategoryDelta) -> DeltaIndicator {
    DeltaIndicator {
        label: category_label(&delta.category).to_string(),
        direction: classify_change(delta.change_percent),
        tone: tone_for(delta.change_percent),
        formatted_percent: delta.change_percent.to_string(),
    }
}

fn cell(value: Option<Money>) -> String {
    match value {
        Some(amount) => amount.to_string(),
        None => UI_TEXT.placeholder_missing.to_string(),
    }
}

/// The merged chart rows as a text table, the terminal stand-in for the
/// dual-line chart with its confidence band columns.
pub fn chart_table(rows: &[ChartRow]) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        UI_TEXT.col_month,
        UI_TEXT.col_actual,
        UI_TEXT.col_forecast,
        UI_TEXT.col_band_low,
        UI_TEXT.col_band_high,
    ]);

    for row in rows {
        builder.push_record([
            row.label.clone(),
            cell(row.actual),
            cell(row.forecast),
            cell(row.confidence_min),
            cell(row.confidence_max),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

/// One line of forecast model context under the chart.
pub fn statistics_block(stats: &ForecastStatistics) -> String {
    format!(
        "{}: {} · {}: {} · {}: {} – {}",
        UI_TEXT.stat_average,
        stats.average,
        UI_TEXT.stat_std_deviation,
        stats.std_deviation,
        UI_TEXT.stat_confidence,
        stats.confidence_interval.min,
        stats.confidence_interval.max,
    )
}

const ARROW_TO: &str = "→";

/// Category comparison table plus the painted total line. Categories come
/// out in snapshot order.
pub fn comparison_table(comparison: &MonthComparison) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        UI_TEXT.col_category,
        UI_TEXT.col_previous,
        UI_TEXT.col_current,
        UI_TEXT.col_change,
    ]);

    for delta in &comparison.by_category {
        let indicator = delta_indicator(delta);
        builder.push_record([
            indicator.label,
            delta.previous.to_string(),
            delta.current.to_string(),
            format!(
                "{} {}",
                indicator.direction.icon(),
                THEME.paint(indicator.tone, &indicator.formatted_percent)
            ),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());

    let total_percent = comparison.total_change_percent;
    let total_line = format!(
        "{}: {} {} {} ({}) · {} {}",
        UI_TEXT.label_total,
        comparison.previous.total,
        ARROW_TO,
        comparison.current.total,
        THEME.paint(tone_for(total_percent), &total_percent.to_string()),
        comparison.current.count,
        UI_TEXT.label_operations,
    );

    format!("{table}\n{total_line}")
}

/// Recent operations, newest page first is the backend's concern; rows keep
/// snapshot order and cap at `MAX_TRANSACTION_ROWS`.
pub fn transactions_table(transactions: &[&Transaction]) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        UI_TEXT.col_date,
        UI_TEXT.col_category,
        UI_TEXT.col_amount,
        UI_TEXT.col_note,
    ]);

    for tx in transactions.iter().take(MAX_TRANSACTION_ROWS) {
        builder.push_record([
            tx.date.format("%d.%m.%Y").to_string(),
            category_label(&tx.category).to_string(),
            tx.amount.to_string(),
            tx.note
                .clone()
                .unwrap_or_else(|| UI_TEXT.placeholder_missing.to_string()),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}
