//! Collision detection over an ordered list of names.

use crate::base::CaseMode;

/// Every index in `names` whose name equals `name` under `mode`, in order.
pub fn collision_indices<S: AsRef<str>>(names: &[S], name: &str, mode: CaseMode) -> Vec<usize> {
    names
        .iter()
        .enumerate()
        .filter(|(_, current)| mode.equals(current.as_ref(), name))
        .map(|(index, _)| index)
        .collect()
}

/// Whether any entry of `names` equals `name` under `mode`.
pub fn contains_name<S: AsRef<str>>(names: &[S], name: &str, mode: CaseMode) -> bool {
    names.iter().any(|current| mode.equals(current.as_ref(), name))
}
