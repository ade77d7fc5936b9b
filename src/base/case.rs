//! Name comparison modes.

use std::borrow::Cow;

/// How two names are compared for equality.
///
/// Chosen once per call and applied to every equality check and
/// membership test made during that call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaseMode {
    /// Ordinal comparison: names must match byte for byte.
    #[default]
    Sensitive,
    /// Ordinal comparison after folding every character with the full Unicode
    /// lowercase mapping (`char::to_lowercase`).
    ///
    /// This is looser than a per-code-unit ignore-case compare: U+212A KELVIN
    /// SIGN equals `k`, and `İ` equals `i\u{307}`.
    Insensitive,
}

impl CaseMode {
    /// Pick a mode from a `case_sensitive` flag.
    pub fn from_sensitivity(case_sensitive: bool) -> Self {
        if case_sensitive {
            Self::Sensitive
        } else {
            Self::Insensitive
        }
    }

    pub fn is_sensitive(&self) -> bool {
        matches!(self, Self::Sensitive)
    }

    /// Compare two names under this mode.
    pub fn equals(&self, a: &str, b: &str) -> bool {
        match self {
            Self::Sensitive => a == b,
            Self::Insensitive => fold(a).eq(fold(b)),
        }
    }

    /// Key under which a name is hashed so that names equal under this mode
    /// share a key.
    pub fn key<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            Self::Sensitive => Cow::Borrowed(name),
            Self::Insensitive if fold(name).eq(name.chars()) => Cow::Borrowed(name),
            Self::Insensitive => Cow::Owned(fold(name).collect()),
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sensitive => "case-sensitive",
            Self::Insensitive => "case-insensitive",
        }
    }
}

// Per-char folding so `equals` and `key` always agree (`str::to_lowercase`
// special-cases final sigma).
fn fold(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_distinguishes_case() {
        assert!(CaseMode::Sensitive.equals("foo", "foo"));
        assert!(!CaseMode::Sensitive.equals("Foo", "foo"));
    }

    #[test]
    fn test_insensitive_ignores_case() {
        assert!(CaseMode::Insensitive.equals("Foo", "fOO"));
        assert!(CaseMode::Insensitive.equals("ÄBC", "äbc"));
        assert!(!CaseMode::Insensitive.equals("foo", "foo1"));
    }

    #[test]
    fn test_insensitive_uses_full_lowercase_mapping() {
        assert!(CaseMode::Insensitive.equals("\u{212A}elvin", "kelvin"));
        assert!(CaseMode::Insensitive.equals("\u{130}d", "i\u{307}d"));
        assert_eq!(CaseMode::Insensitive.key("\u{212A}"), CaseMode::Insensitive.key("k"));
    }

    #[test]
    fn test_key_matches_equals() {
        let mode = CaseMode::Insensitive;
        assert_eq!(mode.key("Item"), mode.key("ITEM"));
        assert!(matches!(mode.key("item"), Cow::Borrowed(_)));
        assert_eq!(CaseMode::Sensitive.key("Item"), "Item");
    }

    #[test]
    fn test_from_sensitivity() {
        assert_eq!(CaseMode::from_sensitivity(true), CaseMode::Sensitive);
        assert_eq!(CaseMode::from_sensitivity(false), CaseMode::Insensitive);
        assert_eq!(CaseMode::default(), CaseMode::Sensitive);
    }
}
