//! Usability checks: may a candidate name be adopted?
//!
//! The resolver and the suffix search treat a [`Usability`] as a black box.
//! It may consult scopes, symbol tables, or the file system, may be called
//! many times with the same candidate, and is never memoized.

use rustc_hash::FxHashSet;

use crate::base::CaseMode;

/// Decides whether a candidate name is free to adopt.
pub trait Usability {
    fn can_use(&self, name: &str) -> bool;
}

impl<F> Usability for F
where
    F: Fn(&str) -> bool,
{
    fn can_use(&self, name: &str) -> bool {
        self(name)
    }
}

/// Accepts every name. Used when the caller supplies no check.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Usability for AcceptAll {
    fn can_use(&self, _name: &str) -> bool {
        true
    }
}

pub(crate) static ACCEPT_ALL: AcceptAll = AcceptAll;

/// Rejects every name already present in a set, compared under a [`CaseMode`].
#[derive(Debug, Clone, Default)]
pub struct ReservedNames {
    keys: FxHashSet<String>,
    case_mode: CaseMode,
}

impl ReservedNames {
    pub fn new<I, S>(names: I, case_mode: CaseMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = names
            .into_iter()
            .map(|n| case_mode.key(n.as_ref()).into_owned())
            .collect();
        Self { keys, case_mode }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(self.case_mode.key(name).as_ref())
    }

    /// Reserve another name.
    pub fn insert(&mut self, name: &str) -> bool {
        self.keys.insert(self.case_mode.key(name).into_owned())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Usability for ReservedNames {
    fn can_use(&self, name: &str) -> bool {
        !self.contains(name)
    }
}
