//! # syster-naming
//!
//! Unique identifier generation for Syster tooling.
//!
//! Whenever tooling synthesizes a new identifier (a parameter, a local, a
//! member, a file) the name must not collide with existing names, must leave
//! untouchable names alone, and may need to follow a naming convention.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! conventions → Naming rules: first applicable rule styles the name
//!   ↓
//! names       → Collision detection, uniqueness resolution, suffix search
//!   ↓
//! base        → Primitives (CaseMode, word boundaries, constants)
//! ```
//!
//! ## Example
//! ```
//! use syster_naming::names::{NameOptions, ensure_unique_name};
//!
//! let name = ensure_unique_name("item", ["item", "item1"], &NameOptions::default()).unwrap();
//! assert_eq!(name, "item2");
//! ```

// ============================================================================
// MODULES (dependency order: base → names → conventions)
// ============================================================================

/// Foundation types: CaseMode, text helpers, constants
pub mod base;

/// Error taxonomy shared by every naming operation
pub mod error;

/// Unique name generation: resolver, suffix search, adapters
pub mod names;

/// Naming conventions: rule capability, kinds, reference style rule
pub mod conventions;

// Re-export commonly needed items
pub use base::CaseMode;
pub use error::{NamingError, NamingResult};
pub use names::{NameGenerator, NameOptions, NameSlot, Usability};
