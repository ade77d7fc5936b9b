//! Naming constants shared across the crate.

/// Separator placed before a file extension.
pub const EXTENSION_SEPARATOR: char = '.';

/// Default number of candidates a single suffix search may try.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// First numeric suffix appended to a colliding name.
pub const FIRST_SUFFIX: usize = 1;
