//! The washing entry points.
//!
//! [`wash`] dispatches on [`WashMode`]:
//!
//! - `Leading` / `Trailing` / `LeadingAndTrailing` trim maximal runs of set members from the
//!   edges ([`trim_leading`], [`trim_trailing`]).
//! - `OccurrencesOf` drops every member scalar ([`remove_occurrences`]).
//! - `InputLine` / `InputText` collapse whitespace ([`collapse_line`], [`collapse_text`]) and
//!   ignore the configured set.
//!
//! Every function here is total: any `&str` produces a result, including `""`.

use crate::{
    charset::CharSet,
    collapse::{collapse_line, collapse_text},
    mode::WashMode,
};

/// Configuration options for washing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WashConfig {
    pub mode: WashMode,
    /// Characters to trim or remove. Unused by `InputLine` and `InputText`.
    pub character_set: CharSet,
}

impl WashConfig {
    /// Default character set with the given mode.
    pub fn with_mode(mode: WashMode) -> Self {
        WashConfig {
            mode,
            ..WashConfig::default()
        }
    }
}

/// Wash `input` according to `config`.
pub fn wash(input: &str, config: &WashConfig) -> String {
    wash_parts(input, config.mode, &config.character_set)
}

fn wash_parts(input: &str, mode: WashMode, set: &CharSet) -> String {
    match mode {
        WashMode::Leading => trim_leading(input, set).to_string(),
        WashMode::Trailing => trim_trailing(input, set).to_string(),
        WashMode::LeadingAndTrailing => trim_trailing(trim_leading(input, set), set).to_string(),
        WashMode::OccurrencesOf => remove_occurrences(input, set),
        WashMode::InputLine => collapse_line(input),
        WashMode::InputText => collapse_text(input),
    }
}

/// Returns `input` without its longest prefix of members of `set`.
///
/// If every scalar is a member (including the empty string) the result is `""`.
pub fn trim_leading<'a>(input: &'a str, set: &CharSet) -> &'a str {
    match input.char_indices().find(|&(_, c)| !set.contains(c)) {
        Some((start, _)) => &input[start..],
        None => "",
    }
}

/// Returns `input` without its longest suffix of members of `set`.
pub fn trim_trailing<'a>(input: &'a str, set: &CharSet) -> &'a str {
    match input.char_indices().rfind(|&(_, c)| !set.contains(c)) {
        Some((last, c)) => &input[..last + c.len_utf8()],
        None => "",
    }
}

/// Removes every scalar of `input` that is a member of `set`, keeping the rest in order.
pub fn remove_occurrences(input: &str, set: &CharSet) -> String {
    input.chars().filter(|&c| !set.contains(c)).collect()
}

/// Washing as methods on string slices.
///
/// ```
/// use text_wash::{CharSet, Wash, WashMode};
///
/// assert_eq!("  hello world  ".wash(), "hello world");
/// assert_eq!("  a   b\tc  ".wash_mode(WashMode::InputLine), "a b c");
/// assert_eq!(
///     "xxhelloxx".wash_with(WashMode::OccurrencesOf, &CharSet::chars_in("x")),
///     "hello"
/// );
/// ```
pub trait Wash {
    /// Trim whitespace and newlines from both ends.
    fn wash(&self) -> String {
        self.wash_config(&WashConfig::default())
    }

    /// Wash with `mode` and the default whitespace-and-newlines set.
    fn wash_mode(&self, mode: WashMode) -> String {
        self.wash_config(&WashConfig::with_mode(mode))
    }

    /// Wash with an explicit mode and character set.
    fn wash_with(&self, mode: WashMode, character_set: &CharSet) -> String;

    fn wash_config(&self, config: &WashConfig) -> String {
        self.wash_with(config.mode, &config.character_set)
    }
}

impl Wash for str {
    fn wash_with(&self, mode: WashMode, character_set: &CharSet) -> String {
        wash_parts(self, mode, character_set)
    }
}
