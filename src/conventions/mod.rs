//! Naming conventions applied to generated names.
//!
//! Conventions come from outside this crate as an ordered list of
//! [`NamingRule`]s. The first rule that applies to a declaration decides how
//! its name looks; if none applies the name is used as is.
//!
//! [`generate_unique_styled_name`] combines a convention with the suffix
//! search, so the result both follows the style and passes the usability check.

pub mod kinds;
pub mod style;

use tracing::debug;

pub use kinds::{Accessibility, DeclarationModifiers, SymbolKind, SymbolKindOrTypeKind, TypeKind};
pub use style::{Capitalization, NamingStyle, StyleRule, SymbolSpecification};

use crate::error::NamingResult;
use crate::names::{NameGenerator, NameOptions, Usability};

/// A naming convention: a condition on the declaration and a style transform.
pub trait NamingRule {
    /// Whether this rule covers a declaration of this shape.
    fn applies_to(
        &self,
        kind: SymbolKindOrTypeKind,
        modifiers: DeclarationModifiers,
        accessibility: Accessibility,
    ) -> bool;

    /// Compliant renderings of `name`, most preferred first.
    fn make_compliant(&self, name: &str) -> Vec<String>;
}

impl<T: NamingRule + ?Sized> NamingRule for Box<T> {
    fn applies_to(
        &self,
        kind: SymbolKindOrTypeKind,
        modifiers: DeclarationModifiers,
        accessibility: Accessibility,
    ) -> bool {
        (**self).applies_to(kind, modifiers, accessibility)
    }

    fn make_compliant(&self, name: &str) -> Vec<String> {
        (**self).make_compliant(name)
    }
}

impl<T: NamingRule + ?Sized> NamingRule for &T {
    fn applies_to(
        &self,
        kind: SymbolKindOrTypeKind,
        modifiers: DeclarationModifiers,
        accessibility: Accessibility,
    ) -> bool {
        (**self).applies_to(kind, modifiers, accessibility)
    }

    fn make_compliant(&self, name: &str) -> Vec<String> {
        (**self).make_compliant(name)
    }
}

/// Style `base` with the first rule that applies to the declaration.
///
/// Returns `base` unchanged when no rule applies, or when the applying rule
/// produces no candidate.
pub fn generate_name<R: NamingRule>(
    base: &str,
    rules: &[R],
    kind: impl Into<SymbolKindOrTypeKind>,
    modifiers: DeclarationModifiers,
    accessibility: Accessibility,
) -> String {
    let kind = kind.into();

    let Some(rule) = rules
        .iter()
        .find(|rule| rule.applies_to(kind, modifiers, accessibility))
    else {
        debug!(
            "[GENERATE_NAME] no rule for {} {} '{}'",
            accessibility.as_str(),
            kind.display(),
            base
        );
        return base.to_string();
    };

    match rule.make_compliant(base).into_iter().next() {
        Some(name) => name,
        None => {
            debug!("[GENERATE_NAME] rule produced no candidate for '{}'", base);
            base.to_string()
        }
    }
}

/// Find the first name derived from `base` that follows the applicable
/// convention and passes `usability`.
///
/// Every candidate (`base`, `base1`, ...) is styled before it is checked.
pub fn generate_unique_styled_name<R: NamingRule>(
    base: &str,
    usability: &dyn Usability,
    rules: &[R],
    kind: impl Into<SymbolKindOrTypeKind>,
    modifiers: DeclarationModifiers,
    accessibility: Accessibility,
    options: &NameOptions,
) -> NamingResult<String> {
    let kind = kind.into();
    let style = |name: &str| generate_name(name, rules, kind, modifiers, accessibility);

    NameGenerator::new(options.clone())
        .with_usability(usability)
        .generate(base, "", Some(&style))
}
