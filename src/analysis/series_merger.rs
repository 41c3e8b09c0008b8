use crate::models::{ChartRow, SeriesPoint};

/// Abbreviated month names, calendar order.
const SHORT_MONTHS: [&str; 12] = [
    "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
];

/// Abbreviated name for a calendar month.
///
/// A month outside 1..=12 is a caller bug. Clamping would silently mislabel
/// the chart axis, so we refuse instead.
pub fn short_month_name(month: u32) -> &'static str {
    assert!(
        (1..=12).contains(&month),
        "calendar month must be within 1..=12, got {month}"
    );
    SHORT_MONTHS[(month - 1) as usize]
}

/// Axis label for one month, e.g. "Янв 2026".
pub fn month_label(month: u32, year: i32) -> String {
    format!("{} {}", short_month_name(month), year)
}

/// Merge the historical and forecast series into one gap-free row sequence
/// for the dual-line chart.
///
/// Rows keep the order of the two inputs (historical first; both arrive
/// chronological from the backend, nothing is sorted here). When both sides
/// are non-empty, the last historical row also receives its own amount in
/// the `forecast` column, so the two line segments share a coordinate and
/// render as one continuous line across the boundary. That bridge carries no
/// confidence bounds; the band starts with the first real forecast month.
pub fn merge_series(historical: &[SeriesPoint], forecast: &[SeriesPoint]) -> Vec<ChartRow> {
    let mut rows: Vec<ChartRow> = historical.iter().map(actual_row).collect();

    if !forecast.is_empty() {
        if let Some(boundary) = rows.last_mut() {
            boundary.forecast = boundary.actual;
        }
    }

    rows.extend(forecast.iter().map(forecast_row));
    rows
}

fn actual_row(point: &SeriesPoint) -> ChartRow {
    ChartRow {
        label: month_label(point.month, point.year),
        actual: Some(point.amount),
        forecast: None,
        confidence_min: None,
        confidence_max: None,
    }
}

fn forecast_row(point: &SeriesPoint) -> ChartRow {
    ChartRow {
        label: month_label(point.month, point.year),
        actual: None,
        forecast: Some(point.amount),
        confidence_min: point.confidence_min,
        confidence_max: point.confidence_max,
    }
}
