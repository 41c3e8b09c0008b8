use serde::{Deserialize, Serialize};

use crate::config::Money;

/// One point of the monthly expense series.
///
/// Historical actuals arrive without confidence bounds. Forecast points may
/// carry them; absent bounds just mean the band is not drawable for that
/// month, which the renderer must tolerate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    /// Calendar month, 1..=12.
    pub month: u32,
    pub year: i32,
    pub amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_min: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_max: Option<Money>,
}

impl SeriesPoint {
    /// A historical actual (no band).
    pub fn actual(month: u32, year: i32, amount: f64) -> Self {
        Self {
            month,
            year,
            amount: Money::new(amount),
            confidence_min: None,
            confidence_max: None,
        }
    }

    /// A forecast value with an optional (min, max) band.
    pub fn forecast(month: u32, year: i32, amount: f64, band: Option<(f64, f64)>) -> Self {
        Self {
            month,
            year,
            amount: Money::new(amount),
            confidence_min: band.map(|(lo, _)| Money::new(lo)),
            confidence_max: band.map(|(_, hi)| Money::new(hi)),
        }
    }
}

/// Uncertainty summary supplied whole by the forecasting backend. Displayed
/// as-is, never recomputed on this side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ForecastStatistics {
    pub average: Money,
    pub std_deviation: Money,
    pub confidence_interval: ConfidenceInterval,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConfidenceInterval {
    pub min: Money,
    pub max: Money,
}

/// The unified display record for the dual-line chart: one row per calendar
/// month, positional, never reordered after creation. Actual and forecast
/// occupy separate columns so the renderer draws two visually distinct
/// segments from one row stream.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub actual: Option<Money>,
    pub forecast: Option<Money>,
    pub confidence_min: Option<Money>,
    pub confidence_max: Option<Money>,
}
