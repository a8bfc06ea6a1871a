//! Character sets used as membership predicates.
//!
//! A [`CharSet`] answers one question: "is this Unicode scalar value a member?". Membership is
//! always tested per `char`, never per grapheme cluster, so a combining mark that is in the set
//! is matched even when it renders as part of a neighbouring base character.
//!
//! Named classes:
//!
//! - whitespace: general category `Zs` plus U+0009 (tab).
//! - newlines: U+000A..=U+000D, U+0085, U+2028 and U+2029.
//! - whitespace and newlines: the union of both, which is exactly [`char::is_whitespace`].

use std::collections::BTreeSet;

/// Returns true for horizontal whitespace (`Zs` and tab).
pub fn is_horizontal_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Returns true for line break characters.
pub fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{000B}' | '\u{000C}' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// An unordered set of Unicode scalar values.
///
/// The set is the union of up to two named classes and any number of explicit characters.
/// [`Default`] is whitespace plus newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    whitespace: bool,
    newlines: bool,
    chars: BTreeSet<char>,
}

impl CharSet {
    /// The set with no members.
    pub fn empty() -> Self {
        CharSet {
            whitespace: false,
            newlines: false,
            chars: BTreeSet::new(),
        }
    }

    /// Horizontal whitespace only.
    pub fn whitespace() -> Self {
        CharSet {
            whitespace: true,
            ..CharSet::empty()
        }
    }

    /// Line breaks only.
    pub fn newlines() -> Self {
        CharSet {
            newlines: true,
            ..CharSet::empty()
        }
    }

    /// Whitespace and line breaks; the default set.
    pub fn whitespace_and_newlines() -> Self {
        CharSet {
            whitespace: true,
            newlines: true,
            chars: BTreeSet::new(),
        }
    }

    /// Builds a set containing exactly the scalars of `chars`.
    pub fn chars_in(chars: &str) -> Self {
        chars.chars().collect()
    }

    /// Membership test.
    pub fn contains(&self, c: char) -> bool {
        (self.whitespace && is_horizontal_whitespace(c))
            || (self.newlines && is_newline(c))
            || self.chars.contains(&c)
    }

    /// Returns true if every scalar of `s` is a member. Vacuously true for `""`.
    pub fn contains_all(&self, s: &str) -> bool {
        s.chars().all(|c| self.contains(c))
    }

    /// Returns true if no scalar is a member.
    pub fn is_empty(&self) -> bool {
        !self.whitespace && !self.newlines && self.chars.is_empty()
    }

    /// Adds a single scalar. Returns false if it was already a member.
    pub fn insert(&mut self, c: char) -> bool {
        if self.contains(c) {
            return false;
        }
        self.chars.insert(c)
    }

    /// Returns the union of `self` and `other`.
    pub fn union(&self, other: &CharSet) -> CharSet {
        let mut chars = self.chars.clone();
        chars.extend(other.chars.iter().copied());
        CharSet {
            whitespace: self.whitespace || other.whitespace,
            newlines: self.newlines || other.newlines,
            chars,
        }
    }
}

impl Default for CharSet {
    fn default() -> Self {
        CharSet::whitespace_and_newlines()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        CharSet {
            chars: iter.into_iter().collect(),
            ..CharSet::empty()
        }
    }
}

impl Extend<char> for CharSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        CharSet::chars_in(chars)
    }
}

impl From<char> for CharSet {
    fn from(c: char) -> Self {
        std::iter::once(c).collect()
    }
}
