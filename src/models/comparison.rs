use serde::{Deserialize, Serialize};

use crate::config::{ChangePct, Money};

/// Aggregate for one calendar month of spending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PeriodTotals {
    pub total: Money,
    pub count: u32,
}

/// Month-over-month movement of a single category.
///
/// The percentage arrives pre-computed from the aggregation backend (along
/// with any division-by-zero handling); it is classified and labeled here
/// but never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryDelta {
    pub category: String,
    pub previous: Money,
    pub current: Money,
    pub change_percent: ChangePct,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthComparison {
    pub current: PeriodTotals,
    pub previous: PeriodTotals,
    pub total_change_percent: ChangePct,
    /// Kept in backend order. Never re-sorted on this side.
    pub by_category: Vec<CategoryDelta>,
}
