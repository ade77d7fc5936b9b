//! Foundation types for Syster name generation.
//!
//! This module provides the primitives every naming operation builds on:
//! - [`CaseMode`] - Case-sensitive vs case-insensitive name comparison
//! - Word-boundary helpers for identifier text
//! - Shared constants (extension separator, default attempt bound)
//!
//! This module has NO dependencies on other syster modules.

pub mod case;
pub mod constants;
pub mod text;

pub use case::CaseMode;
pub use constants::{DEFAULT_MAX_ATTEMPTS, EXTENSION_SEPARATOR};
