mod tables;
mod text;
mod theme;

pub use tables::{
    DeltaIndicator, chart_table, comparison_table, delta_indicator, statistics_block,
    transactions_table,
};
pub use text::{UI_TEXT, UiText};
pub use theme::{THEME, Theme, ToneColors};
