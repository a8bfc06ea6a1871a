//! Wash modes.

use std::{fmt, str::FromStr};

use crate::WashError;

/// Selects which trimming or collapsing behaviour [`crate::wash`] performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WashMode {
    /// Remove the longest prefix made of set members.
    Leading,
    /// Remove the longest suffix made of set members.
    Trailing,
    /// `Leading`, then `Trailing`.
    #[default]
    LeadingAndTrailing,
    /// Remove every set member wherever it occurs.
    OccurrencesOf,
    /// Collapse all whitespace and newlines to single spaces. Ignores the character set.
    InputLine,
    /// Collapse whitespace per line and cap blank-line gaps at one. Ignores the character set.
    InputText,
}

impl WashMode {
    /// Every mode, in declaration order.
    pub const ALL: [WashMode; 6] = [
        WashMode::Leading,
        WashMode::Trailing,
        WashMode::LeadingAndTrailing,
        WashMode::OccurrencesOf,
        WashMode::InputLine,
        WashMode::InputText,
    ];

    /// The canonical camelCase name.
    pub fn name(self) -> &'static str {
        match self {
            WashMode::Leading => "leading",
            WashMode::Trailing => "trailing",
            WashMode::LeadingAndTrailing => "leadingAndTrailing",
            WashMode::OccurrencesOf => "occurrencesOf",
            WashMode::InputLine => "inputLine",
            WashMode::InputText => "inputText",
        }
    }

    /// Returns true for modes that consult the caller's character set.
    pub fn uses_character_set(self) -> bool {
        !matches!(self, WashMode::InputLine | WashMode::InputText)
    }
}

impl fmt::Display for WashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WashMode {
    type Err = WashError;

    /// Accepts the camelCase names as well as kebab-case and snake_case spellings.
    ///
    /// `occurencesOf` (single `r`) is accepted as an alias of `occurrencesOf`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match folded.as_str() {
            "leading" => Ok(WashMode::Leading),
            "trailing" => Ok(WashMode::Trailing),
            "leadingandtrailing" => Ok(WashMode::LeadingAndTrailing),
            "occurrencesof" | "occurencesof" => Ok(WashMode::OccurrencesOf),
            "inputline" => Ok(WashMode::InputLine),
            "inputtext" => Ok(WashMode::InputText),
            _ => Err(WashError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Default mode trims both ends.
    #[test]
    fn default_is_leading_and_trailing() {
        assert_eq!(WashMode::default(), WashMode::LeadingAndTrailing);
    }

    /// Every canonical name parses back to its mode.
    #[test]
    fn names_parse_back() {
        for mode in WashMode::ALL {
            assert_eq!(mode.to_string().parse::<WashMode>(), Ok(mode));
        }
    }

    /// Kebab, snake and the single-r spelling are accepted.
    #[test]
    fn parses_alternate_spellings() {
        assert_eq!(
            "leading-and-trailing".parse::<WashMode>(),
            Ok(WashMode::LeadingAndTrailing)
        );
        assert_eq!("input_text".parse::<WashMode>(), Ok(WashMode::InputText));
        assert_eq!("occurencesOf".parse::<WashMode>(), Ok(WashMode::OccurrencesOf));
        assert_eq!("INPUTLINE".parse::<WashMode>(), Ok(WashMode::InputLine));
    }

    /// Unknown names are rejected with the original input.
    #[test]
    fn rejects_unknown_names() {
        let err = "sideways".parse::<WashMode>().unwrap_err();
        assert_eq!(err, WashError::UnknownMode("sideways".to_string()));
        assert_eq!(err.to_string(), "unknown wash mode: \"sideways\"");
        assert!("".parse::<WashMode>().is_err());
    }

    /// Only the `input*` modes ignore the character set.
    #[test]
    fn character_set_usage() {
        assert!(WashMode::Leading.uses_character_set());
        assert!(WashMode::OccurrencesOf.uses_character_set());
        assert!(!WashMode::InputLine.uses_character_set());
        assert!(!WashMode::InputText.uses_character_set());
    }
}
