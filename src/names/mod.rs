//! Unique name generation.
//!
//! Tooling that synthesizes identifiers (parameters, locals, members, files)
//! needs names that:
//! - do not collide with each other or with existing names
//! - never alter names that cannot change ("fixed" names)
//! - pass a caller-supplied [`Usability`] check
//!
//! [`NameGenerator`] is the configured entry point. It offers two searches:
//! - [`NameGenerator::ensure_unique`] resolves a whole list of [`NameSlot`]s
//! - [`NameGenerator::generate`] finds the first usable `base`, `base1`, ...
//!
//! The free functions are thin wrappers for common call shapes.

mod collisions;
mod generate;
mod generator;
mod options;
mod resolver;
mod slot;
mod usability;

#[cfg(test)]
mod tests;

pub use collisions::{collision_indices, contains_name};
pub use generate::{
    NameTransform, ensure_unique_name, generate_unique_file_name, generate_unique_name,
    generate_unique_name_in_set, normalize_extension,
};
pub use generator::NameGenerator;
pub use options::NameOptions;
pub use resolver::{
    ensure_unique, ensure_unique_slots, ensure_unique_with, ensure_unique_with_fixed,
};
pub use slot::NameSlot;
pub use usability::{AcceptAll, ReservedNames, Usability};
