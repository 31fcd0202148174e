use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Nord,
    SolarizedLight,
    SolarizedDark,
}

impl Theme {
    /// The theme after this one, wrapping around.
    pub fn next(self) -> Self {
        Theme::iter()
            .cycle()
            .skip_while(|t| *t != self)
            .nth(1)
            .unwrap_or_default()
    }
}

impl From<&Theme> for iced::Theme {
    fn from(theme: &Theme) -> Self {
        match theme {
            Theme::Light => iced::Theme::Light,
            Theme::Dark => iced::Theme::Dark,
            Theme::Nord => iced::Theme::Nord,
            Theme::SolarizedLight => iced::Theme::SolarizedLight,
            Theme::SolarizedDark => iced::Theme::SolarizedDark,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_next_wraps() {
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(Theme::SolarizedDark.next(), Theme::Light);
    }
}
