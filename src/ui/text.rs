// Trend icons
pub const ICON_TREND_UP: &str = "↑";
pub const ICON_TREND_DOWN: &str = "↓";
pub const ICON_TREND_FLAT: &str = "→";

/// Every user-facing string in one place. Rendering code takes its labels
/// from here, never from inline literals.
pub struct UiText {
    pub icon_trend_up: &'static str,
    pub icon_trend_down: &'static str,
    pub icon_trend_flat: &'static str,

    /// Shown for any value the snapshot does not carry.
    pub placeholder_missing: &'static str,

    // --- Chart view ---
    pub chart_heading: &'static str,
    pub col_month: &'static str,
    pub col_actual: &'static str,
    pub col_forecast: &'static str,
    pub col_band_low: &'static str,
    pub col_band_high: &'static str,
    pub stat_average: &'static str,
    pub stat_std_deviation: &'static str,
    pub stat_confidence: &'static str,

    // --- Comparison view ---
    pub compare_heading: &'static str,
    pub col_category: &'static str,
    pub col_previous: &'static str,
    pub col_current: &'static str,
    pub col_change: &'static str,
    pub label_total: &'static str,
    pub label_operations: &'static str,

    // --- Transactions view ---
    pub transactions_heading: &'static str,
    pub col_date: &'static str,
    pub col_amount: &'static str,
    pub col_note: &'static str,
    pub label_categories: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    icon_trend_up: ICON_TREND_UP,
    icon_trend_down: ICON_TREND_DOWN,
    icon_trend_flat: ICON_TREND_FLAT,

    placeholder_missing: "—",

    chart_heading: "Расходы: история и прогноз",
    col_month: "Месяц",
    col_actual: "Факт",
    col_forecast: "Прогноз",
    col_band_low: "Мин",
    col_band_high: "Макс",
    stat_average: "Средний расход",
    stat_std_deviation: "Отклонение",
    stat_confidence: "Доверительный интервал",

    compare_heading: "Сравнение с прошлым месяцем",
    col_category: "Категория",
    col_previous: "Прошлый месяц",
    col_current: "Текущий месяц",
    col_change: "Изменение",
    label_total: "Итого",
    label_operations: "операций",

    transactions_heading: "Операции",
    col_date: "Дата",
    col_amount: "Сумма",
    col_note: "Комментарий",
    label_categories: "Категории",
};
