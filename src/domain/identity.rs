use std::fmt;

/// Minimum display name length after trimming, in characters.
const MIN_DISPLAY_NAME_CHARS: usize = 2;

/// Maximum display name length, in characters.
const MAX_DISPLAY_NAME_CHARS: usize = 30;

/// A validated display name. Chosen once per profile and reused across
/// sessions; not unique across machines, collisions stay unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayNameError {
    TooShort { min: usize },
    TooLong { max: usize },
}

impl DisplayName {
    /// Parses user input into a display name: trims surrounding whitespace
    /// and enforces the character-count bounds.
    pub fn parse(raw: &str) -> Result<Self, DisplayNameError> {
        let trimmed = raw.trim();
        let chars = trimmed.chars().count();

        if chars < MIN_DISPLAY_NAME_CHARS {
            return Err(DisplayNameError::TooShort {
                min: MIN_DISPLAY_NAME_CHARS,
            });
        }

        if chars > MAX_DISPLAY_NAME_CHARS {
            return Err(DisplayNameError::TooLong {
                max: MAX_DISPLAY_NAME_CHARS,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_character_name() {
        let name = DisplayName::parse("An").expect("two characters must be enough");

        assert_eq!(name.as_str(), "An");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let name = DisplayName::parse("  Ann  ").expect("trimmed name must be valid");

        assert_eq!(name.as_str(), "Ann");
    }

    #[test]
    fn rejects_single_character_name() {
        let err = DisplayName::parse("A").expect_err("one character must be rejected");

        assert_eq!(err, DisplayNameError::TooShort { min: 2 });
    }

    #[test]
    fn rejects_whitespace_only_input() {
        let err = DisplayName::parse("   \t ").expect_err("whitespace must be rejected");

        assert_eq!(err, DisplayNameError::TooShort { min: 2 });
    }

    #[test]
    fn rejects_name_over_thirty_characters() {
        let raw = "a".repeat(31);

        let err = DisplayName::parse(&raw).expect_err("31 characters must be rejected");

        assert_eq!(err, DisplayNameError::TooLong { max: 30 });
    }

    #[test]
    fn counts_characters_not_bytes() {
        let raw = "é".repeat(30);

        let name = DisplayName::parse(&raw).expect("30 multibyte characters must fit");

        assert_eq!(name.as_str().chars().count(), 30);
    }
}
