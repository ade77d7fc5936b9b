//! A data-only naming rule: which symbols it covers and how their names look.

use super::NamingRule;
use super::kinds::{Accessibility, DeclarationModifiers, SymbolKindOrTypeKind};
use crate::base::text::{lower_first, split_words, upper_first};

/// Which declarations a rule covers.
///
/// Empty `kinds` or `accessibilities` match anything. Every modifier in
/// `required_modifiers` must be present on the declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolSpecification {
    pub kinds: Vec<SymbolKindOrTypeKind>,
    pub accessibilities: Vec<Accessibility>,
    pub required_modifiers: DeclarationModifiers,
}

impl SymbolSpecification {
    /// A specification matching every declaration.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn for_kinds<I, K>(kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<SymbolKindOrTypeKind>,
    {
        Self {
            kinds: kinds.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_accessibilities(
        mut self,
        accessibilities: impl IntoIterator<Item = Accessibility>,
    ) -> Self {
        self.accessibilities = accessibilities.into_iter().collect();
        self
    }

    pub fn requiring(mut self, modifiers: DeclarationModifiers) -> Self {
        self.required_modifiers = modifiers;
        self
    }

    pub fn applies_to(
        &self,
        kind: SymbolKindOrTypeKind,
        modifiers: DeclarationModifiers,
        accessibility: Accessibility,
    ) -> bool {
        (self.kinds.is_empty() || self.kinds.contains(&kind))
            && (self.accessibilities.is_empty() || self.accessibilities.contains(&accessibility))
            && modifiers.contains(self.required_modifiers)
    }
}

/// How the words of a name are capitalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Capitalization {
    /// `ItemCount`
    #[default]
    PascalCase,
    /// `itemCount`
    CamelCase,
    /// `Itemcount`
    FirstUpper,
    /// `ITEMCOUNT`
    AllUpper,
    /// `itemcount`
    AllLower,
}

impl Capitalization {
    fn apply(&self, words: &[&str]) -> Vec<String> {
        words
            .iter()
            .enumerate()
            .map(|(i, word)| match self {
                Self::PascalCase => upper_first(word),
                Self::CamelCase if i > 0 => upper_first(word),
                Self::CamelCase if word.chars().all(|c| !c.is_lowercase()) => word.to_lowercase(),
                Self::CamelCase => lower_first(word),
                Self::FirstUpper if i == 0 => upper_first(&word.to_lowercase()),
                Self::FirstUpper | Self::AllLower => word.to_lowercase(),
                Self::AllUpper => word.to_uppercase(),
            })
            .collect()
    }
}

/// The shape names must take: prefix, word separator, capitalization, suffix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamingStyle {
    pub prefix: String,
    pub suffix: String,
    pub word_separator: String,
    pub capitalization: Capitalization,
}

impl NamingStyle {
    pub fn new(capitalization: Capitalization) -> Self {
        Self {
            capitalization,
            ..Self::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_word_separator(mut self, separator: impl Into<String>) -> Self {
        self.word_separator = separator.into();
        self
    }

    /// Rewrite `name` to follow this style.
    ///
    /// An existing prefix or suffix is not doubled. Words are found at
    /// separators and case boundaries, recapitalized, and rejoined.
    pub fn make_compliant(&self, name: &str) -> String {
        let mut core = name;
        if !self.prefix.is_empty() {
            core = core.strip_prefix(self.prefix.as_str()).unwrap_or(core);
        }
        if !self.suffix.is_empty() {
            core = core.strip_suffix(self.suffix.as_str()).unwrap_or(core);
        }

        let words = split_words(core, &self.word_separator);
        let body = if words.is_empty() {
            core.to_string()
        } else {
            self.capitalization.apply(&words).join(&self.word_separator)
        };

        format!("{}{}{}", self.prefix, body, self.suffix)
    }
}

/// A [`NamingRule`] pairing a [`SymbolSpecification`] with a [`NamingStyle`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleRule {
    pub specification: SymbolSpecification,
    pub style: NamingStyle,
}

impl StyleRule {
    pub fn new(specification: SymbolSpecification, style: NamingStyle) -> Self {
        Self {
            specification,
            style,
        }
    }
}

impl NamingRule for StyleRule {
    fn applies_to(
        &self,
        kind: SymbolKindOrTypeKind,
        modifiers: DeclarationModifiers,
        accessibility: Accessibility,
    ) -> bool {
        self.specification.applies_to(kind, modifiers, accessibility)
    }

    fn make_compliant(&self, name: &str) -> Vec<String> {
        vec![self.style.make_compliant(name)]
    }
}
