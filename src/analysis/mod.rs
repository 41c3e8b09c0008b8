// Series shaping and change classification
pub mod category_filter;
pub mod change_classifier;
pub mod series_merger;

// Re-export commonly used items
pub use {
    category_filter::{filter_by_category, in_month, known_categories, spent_total},
    change_classifier::{ChangeDirection, Tone, category_label, classify_change, tone_for},
    series_merger::{merge_series, month_label, short_month_name},
};
