use crate::analysis::Tone;

/// Terminal colors for the three change tones.
#[derive(Clone, Copy)]
pub struct ToneColors {
    pub alert: &'static str,
    pub favorable: &'static str,
    pub subdued: &'static str,
}

/// Explicit theme object for the text renderer. Swap this instance to
/// restyle the output; none of the shaping code knows it exists.
#[derive(Clone, Copy)]
pub struct Theme {
    pub tones: ToneColors,
    pub heading: &'static str,
    pub reset: &'static str,
}

/// Global theme instance
pub static THEME: Theme = Theme {
    tones: ToneColors {
        alert: "\x1b[31m",     // spending grew
        favorable: "\x1b[32m", // spending shrank
        subdued: "\x1b[90m",   // flat
    },
    heading: "\x1b[1;33m",
    reset: "\x1b[0m",
};

impl Theme {
    pub fn tone_code(&self, tone: Tone) -> &'static str {
        match tone {
            Tone::Alert => self.tones.alert,
            Tone::Favorable => self.tones.favorable,
            Tone::Subdued => self.tones.subdued,
        }
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        format!("{}{}{}", self.tone_code(tone), text, self.reset)
    }

    pub fn paint_heading(&self, text: &str) -> String {
        format!("{}{}{}", self.heading, text, self.reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    #[test]
    fn three_tones_get_three_distinct_colors() {
        let codes: Vec<_> = Tone::iter().map(|t| THEME.tone_code(t)).collect();
        assert_eq!(codes.iter().unique().count(), 3);
    }

    #[test]
    fn painted_text_is_terminated() {
        let painted = THEME.paint(Tone::Alert, "+7.8%");
        assert!(painted.starts_with(THEME.tones.alert));
        assert!(painted.ends_with(THEME.reset));
    }
}
