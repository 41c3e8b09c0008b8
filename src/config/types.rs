//! Display value types (Immutable Blueprints)

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use crate::ui::UI_TEXT;

/// A ruble amount as the backend reports it. Rounding to kopeck precision
/// happens only at display time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Money {
    fn from(v: f64) -> Self {
        Money::new(v)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money::new(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} ₽", self.0)
    }
}

/// A month-over-month change in percentage points, pre-computed upstream.
/// Carried opaquely; this side only classifies and formats it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ChangePct(f64);

impl ChangePct {
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for ChangePct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // A broken upstream aggregate (NaN/inf) renders as the placeholder
        // instead of poisoning the whole table.
        if self.0.is_finite() {
            write!(f, "{:+.1}%", self.0)
        } else {
            write!(f, "{}", UI_TEXT.placeholder_missing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_displays_with_kopecks_and_currency() {
        assert_eq!(Money::new(1234.5).to_string(), "1234.50 ₽");
        assert_eq!(Money::new(0.0).to_string(), "0.00 ₽");
    }

    #[test]
    fn money_sums() {
        let mut total = Money::default();
        total += Money::new(10.5);
        assert_eq!(total + Money::new(0.5), Money::new(11.0));
    }

    #[test]
    fn change_pct_displays_signed_with_one_decimal() {
        assert_eq!(ChangePct::new(12.34).to_string(), "+12.3%");
        assert_eq!(ChangePct::new(-5.0).to_string(), "-5.0%");
        assert_eq!(ChangePct::new(0.0).to_string(), "+0.0%");
    }

    #[test]
    fn non_finite_change_displays_as_placeholder() {
        assert_eq!(ChangePct::new(f64::NAN).to_string(), "—");
        assert_eq!(ChangePct::new(f64::INFINITY).to_string(), "—");
    }
}
