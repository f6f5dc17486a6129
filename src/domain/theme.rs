/// UI color theme. Persisted in the profile as `"dark"` / `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// The string form used by the persisted profile.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_dark_and_light() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn string_form_round_trips() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn unknown_strings_are_rejected() {
        assert_eq!(Theme::from_str("solarized"), None);
        assert_eq!(Theme::from_str(""), None);
    }
}
