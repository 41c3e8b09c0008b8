use strum_macros::{Display, EnumIter};

use crate::config::{ChangePct, NOISE_BAND_PCT};
use crate::ui::UI_TEXT;

/// Trend verdict for a month-over-month change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ChangeDirection {
    #[strum(to_string = "Рост")]
    Increase,
    #[strum(to_string = "Снижение")]
    Decrease,
    #[strum(to_string = "Без изменений")]
    Neutral,
}

impl ChangeDirection {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Increase => UI_TEXT.icon_trend_up,
            Self::Decrease => UI_TEXT.icon_trend_down,
            Self::Neutral => UI_TEXT.icon_trend_flat,
        }
    }
}

/// Sort a percentage change into a trend bucket.
///
/// Moves inside the ±`NOISE_BAND_PCT` dead-zone read as `Neutral`, the band
/// boundaries included. A non-finite percent from a broken upstream
/// aggregate also reads as `Neutral`.
pub fn classify_change(percent: ChangePct) -> ChangeDirection {
    let value = percent.value();
    if !value.is_finite() {
        return ChangeDirection::Neutral;
    }
    if value > NOISE_BAND_PCT {
        ChangeDirection::Increase
    } else if value < -NOISE_BAND_PCT {
        ChangeDirection::Decrease
    } else {
        ChangeDirection::Neutral
    }
}

/// Color semantics for a signed change. Spending more is the alert case,
/// spending less the favorable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Tone {
    Alert,
    Favorable,
    Subdued,
}

/// Tone for a percentage change: pure sign, no dead-zone. A +2% move shows
/// the flat trend icon yet still colors the number as spending growth.
pub fn tone_for(percent: ChangePct) -> Tone {
    let value = percent.value();
    if value > 0.0 {
        Tone::Alert
    } else if value < 0.0 {
        Tone::Favorable
    } else {
        Tone::Subdued
    }
}

/// Stable backend codes mapped to display labels.
const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("Food", "Еда"),
    ("Cafe", "Кафе и рестораны"),
    ("Transport", "Транспорт"),
    ("Shopping", "Покупки"),
    ("Health", "Здоровье"),
    ("Entertainment", "Развлечения"),
    ("Utilities", "Коммунальные платежи"),
    ("Education", "Образование"),
    ("Travel", "Путешествия"),
    ("Other", "Прочее"),
];

/// Display label for a category code.
///
/// Unknown codes pass through unchanged so a category the backend adds later
/// degrades to its raw code instead of breaking the view.
pub fn category_label(code: &str) -> &str {
    CATEGORY_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn moves_beyond_the_band_are_trends() {
        assert_eq!(classify_change(ChangePct::new(6.0)), ChangeDirection::Increase);
        assert_eq!(classify_change(ChangePct::new(-6.0)), ChangeDirection::Decrease);
    }

    #[test]
    fn band_boundaries_stay_neutral() {
        assert_eq!(classify_change(ChangePct::new(5.0)), ChangeDirection::Neutral);
        assert_eq!(classify_change(ChangePct::new(-5.0)), ChangeDirection::Neutral);
        assert_eq!(classify_change(ChangePct::new(0.0)), ChangeDirection::Neutral);
    }

    #[test]
    fn non_finite_percent_is_neutral_and_subdued() {
        assert_eq!(classify_change(ChangePct::new(f64::NAN)), ChangeDirection::Neutral);
        assert_eq!(classify_change(ChangePct::new(f64::INFINITY)), ChangeDirection::Neutral);
        assert_eq!(tone_for(ChangePct::new(f64::NAN)), Tone::Subdued);
    }

    #[test]
    fn tone_ignores_the_dead_zone() {
        // Inside the neutral band, the number still colors by sign.
        assert_eq!(tone_for(ChangePct::new(0.1)), Tone::Alert);
        assert_eq!(tone_for(ChangePct::new(-0.1)), Tone::Favorable);
        assert_eq!(tone_for(ChangePct::new(0.0)), Tone::Subdued);
    }

    #[test]
    fn trend_icons_are_distinct() {
        use itertools::Itertools;
        let icons: Vec<_> = ChangeDirection::iter().map(|d| d.icon()).collect();
        assert_eq!(icons.iter().unique().count(), icons.len());
    }

    #[test]
    fn known_category_codes_map_to_labels() {
        assert_eq!(category_label("Food"), "Еда");
        assert_eq!(category_label("Transport"), "Транспорт");
    }

    #[test]
    fn unknown_category_codes_pass_through() {
        assert_eq!(category_label("UnknownXyz"), "UnknownXyz");
        assert_eq!(category_label(""), "");
    }
}
