//! Uniqueness resolution over an ordered list of name slots.
//!
//! One left-to-right pass visits every position. When the name at a position
//! collides with others (or the usability check rejects it) every colliding,
//! non-fixed position is renamed to `name1`, `name2`, ... immediately, so later
//! positions see the rewritten list.
//!
//! Two fixed slots with the same name stay the same: nothing may rename them.

use rustc_hash::FxHashMap;
use tracing::trace;

use super::collisions::collision_indices;
use super::generator::NameGenerator;
use super::options::NameOptions;
use super::slot::NameSlot;
use super::usability::Usability;
use crate::base::CaseMode;
use crate::base::constants::FIRST_SUFFIX;
use crate::error::NamingResult;

impl NameGenerator<'_> {
    /// Make every non-fixed name in `slots` unique.
    ///
    /// The output has one entry per slot, in slot order. Fixed slots come back
    /// unchanged; renamed slots pass the usability check. `slots` is not
    /// modified.
    pub fn ensure_unique(&self, slots: &[NameSlot]) -> NamingResult<Vec<String>> {
        let mode = self.options().case_mode;
        let mut names: Vec<String> = slots.iter().map(|slot| slot.name.clone()).collect();
        let mut present = NameCounts::new(&names, mode);

        for i in 0..names.len() {
            let name = names[i].clone();
            let collisions = collision_indices(&names, &name, mode);

            if self.can_use(&name) && collisions.len() < 2 {
                continue;
            }

            trace!(
                "[ENSURE_UNIQUE] name='{}' position={} collisions={:?}",
                name, i, collisions
            );
            self.handle_collisions(slots, &mut names, &mut present, &name, &collisions)?;
        }

        Ok(names)
    }

    fn handle_collisions(
        &self,
        slots: &[NameSlot],
        names: &mut [String],
        present: &mut NameCounts,
        name: &str,
        collisions: &[usize],
    ) -> NamingResult<()> {
        // Shared across positions so each renamed slot gets a fresh suffix.
        let mut suffix = FIRST_SUFFIX;

        for &index in collisions {
            if slots[index].fixed {
                continue;
            }

            // Only usability rejections count against the bound; skips over
            // names already in the list end once the list is exhausted.
            let mut rejected = 0;
            loop {
                self.guard(name, rejected)?;

                let candidate = format!("{name}{suffix}");
                suffix += 1;

                if present.contains(&candidate) {
                    continue;
                }
                if self.can_use(&candidate) {
                    trace!("[ENSURE_UNIQUE] position={} '{}' -> '{}'", index, name, candidate);
                    present.replace(&names[index], &candidate);
                    names[index] = candidate;
                    break;
                }
                rejected += 1;
            }
        }

        Ok(())
    }
}

/// Multiset of the names currently in the working list, keyed under a [`CaseMode`].
struct NameCounts {
    counts: FxHashMap<String, usize>,
    mode: CaseMode,
}

impl NameCounts {
    fn new(names: &[String], mode: CaseMode) -> Self {
        let mut counts = FxHashMap::default();
        for name in names {
            *counts.entry(mode.key(name).into_owned()).or_insert(0) += 1;
        }
        Self { counts, mode }
    }

    fn contains(&self, name: &str) -> bool {
        self.counts.contains_key(self.mode.key(name).as_ref())
    }

    fn replace(&mut self, old: &str, new: &str) {
        let old_key = self.mode.key(old);
        if let Some(count) = self.counts.get_mut(old_key.as_ref()) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(old_key.as_ref());
            }
        }
        *self.counts.entry(self.mode.key(new).into_owned()).or_insert(0) += 1;
    }
}

/// Make a list of names unique; every name may be renamed.
pub fn ensure_unique<S: AsRef<str>>(
    names: &[S],
    options: &NameOptions,
) -> NamingResult<Vec<String>> {
    NameGenerator::new(options.clone()).ensure_unique(&NameSlot::all_movable(names))
}

/// Make a list of names unique; every name may be renamed and every renamed
/// name must pass `usability`.
pub fn ensure_unique_with<S: AsRef<str>>(
    names: &[S],
    usability: &dyn Usability,
    options: &NameOptions,
) -> NamingResult<Vec<String>> {
    ensure_unique_slots(&NameSlot::all_movable(names), usability, options)
}

/// Make a list of names unique, leaving the names flagged in `is_fixed` alone.
///
/// `names` and `is_fixed` are parallel and must have the same length.
pub fn ensure_unique_with_fixed<S: AsRef<str>>(
    names: &[S],
    is_fixed: &[bool],
    usability: &dyn Usability,
    options: &NameOptions,
) -> NamingResult<Vec<String>> {
    let slots = NameSlot::from_parallel(names, is_fixed)?;
    ensure_unique_slots(&slots, usability, options)
}

/// Make the non-fixed names in `slots` unique.
pub fn ensure_unique_slots(
    slots: &[NameSlot],
    usability: &dyn Usability,
    options: &NameOptions,
) -> NamingResult<Vec<String>> {
    NameGenerator::new(options.clone())
        .with_usability(usability)
        .ensure_unique(slots)
}
