//! The configured entry point shared by the resolver and the suffix search.

use tracing::warn;

use super::options::NameOptions;
use super::usability::{ACCEPT_ALL, Usability};
use crate::error::{NamingError, NamingResult};

/// Generates names that avoid collisions.
///
/// Holds the options for one logical call and the usability check that every
/// newly assigned name must pass. Holds no state between calls, so one
/// generator can serve any number of requests on the thread that owns it.
/// The usability check is not required to be `Sync`, so a generator is not
/// shared across threads; concurrent callers each build their own (the free
/// functions in [`crate::names`] do this on every call).
pub struct NameGenerator<'a> {
    usability: &'a dyn Usability,
    options: NameOptions,
}

impl NameGenerator<'static> {
    /// A generator that accepts every name not already taken by a collision.
    pub fn new(options: NameOptions) -> Self {
        Self {
            usability: &ACCEPT_ALL,
            options,
        }
    }
}

impl Default for NameGenerator<'static> {
    fn default() -> Self {
        Self::new(NameOptions::default())
    }
}

impl<'a> NameGenerator<'a> {
    /// Replace the usability check.
    pub fn with_usability<'b>(self, usability: &'b dyn Usability) -> NameGenerator<'b> {
        NameGenerator {
            usability,
            options: self.options,
        }
    }

    pub fn options(&self) -> &NameOptions {
        &self.options
    }

    pub(crate) fn can_use(&self, name: &str) -> bool {
        self.usability.can_use(name)
    }

    /// Fail if the search for `base` must stop before trying another candidate.
    pub(crate) fn guard(&self, base: &str, attempts: usize) -> NamingResult<()> {
        if self.options.cancel.is_cancelled() {
            warn!("[NAME_SEARCH] cancelled base='{}' after {} attempts", base, attempts);
            return Err(NamingError::Cancelled);
        }
        if self.options.exhausted(attempts) {
            warn!("[NAME_SEARCH] exhausted base='{}' after {} attempts", base, attempts);
            return Err(NamingError::exhausted(base, attempts));
        }
        Ok(())
    }
}
