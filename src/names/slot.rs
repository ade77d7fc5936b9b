//! Name slots fed to the uniqueness resolver.

use crate::error::{NamingError, NamingResult};

/// One name in a list being made unique.
///
/// A fixed slot holds a name that must never change, e.g. one the user wrote
/// or one that is already bound elsewhere. A slot's position in the list is
/// its position in the resolver's output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameSlot {
    pub name: String,
    pub fixed: bool,
}

impl NameSlot {
    pub fn new(name: impl Into<String>, fixed: bool) -> Self {
        Self {
            name: name.into(),
            fixed,
        }
    }

    /// A slot the resolver may rename.
    pub fn movable(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// A slot the resolver must leave untouched.
    pub fn fixed(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Build slots from a list of names and a parallel list of fixed flags.
    ///
    /// Fails with [`NamingError::InvalidArgument`] when the lists differ in length.
    pub fn from_parallel<S: AsRef<str>>(names: &[S], is_fixed: &[bool]) -> NamingResult<Vec<Self>> {
        if names.len() != is_fixed.len() {
            return Err(NamingError::invalid_argument(format!(
                "{} names but {} fixed flags",
                names.len(),
                is_fixed.len()
            )));
        }

        Ok(names
            .iter()
            .zip(is_fixed)
            .map(|(name, &fixed)| Self::new(name.as_ref(), fixed))
            .collect())
    }

    /// Build slots that may all be renamed.
    pub fn all_movable<S: AsRef<str>>(names: &[S]) -> Vec<Self> {
        names.iter().map(|n| Self::movable(n.as_ref())).collect()
    }
}
