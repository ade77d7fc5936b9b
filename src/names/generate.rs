//! Suffix search: find the first usable `base`, `base1`, `base2`, ...

use indexmap::IndexSet;
use tracing::trace;

use super::generator::NameGenerator;
use super::options::NameOptions;
use super::slot::NameSlot;
use super::usability::{ReservedNames, Usability};
use crate::base::EXTENSION_SEPARATOR;
use crate::error::NamingResult;

/// Transform applied to every candidate before it is checked.
pub type NameTransform<'a> = &'a dyn Fn(&str) -> String;

impl NameGenerator<'_> {
    /// Find the first usable name built from `base` and `extension`.
    ///
    /// Candidate 0 is `transform(base + extension)`, candidate `k` is
    /// `transform(base + k + extension)`. A non-empty extension always gets a
    /// leading `.`. The bound and the cancellation token are only consulted
    /// once candidate 0 has been rejected.
    pub fn generate(
        &self,
        base: &str,
        extension: &str,
        transform: Option<NameTransform<'_>>,
    ) -> NamingResult<String> {
        let extension = normalize_extension(extension);
        let apply = |raw: String| match transform {
            Some(transform) => transform(&raw),
            None => raw,
        };

        let mut attempts = 0;
        loop {
            // A usable first candidate needs no search, so nothing to stop.
            if attempts > 0 {
                self.guard(base, attempts)?;
            }

            let candidate = if attempts == 0 {
                apply(format!("{base}{extension}"))
            } else {
                apply(format!("{base}{attempts}{extension}"))
            };
            attempts += 1;

            if self.can_use(&candidate) {
                return Ok(candidate);
            }
            trace!("[GENERATE] rejected '{}'", candidate);
        }
    }
}

/// Prefix a non-empty extension with `.` unless it already has one.
pub fn normalize_extension(extension: &str) -> String {
    if extension.is_empty() || extension.starts_with(EXTENSION_SEPARATOR) {
        extension.to_string()
    } else {
        format!("{EXTENSION_SEPARATOR}{extension}")
    }
}

/// Transform `base` into a name that collides with nothing in `reserved`.
///
/// Every reserved name is treated as fixed; only `base` may change.
pub fn ensure_unique_name<I, S>(
    base: &str,
    reserved: I,
    options: &NameOptions,
) -> NamingResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let reserved: IndexSet<String> = reserved
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();

    let mut slots = Vec::with_capacity(reserved.len() + 1);
    slots.push(NameSlot::movable(base));
    slots.extend(reserved.into_iter().map(NameSlot::fixed));

    let mut names = NameGenerator::new(options.clone()).ensure_unique(&slots)?;
    Ok(names.swap_remove(0))
}

/// Find the first usable name derived from `base`.
pub fn generate_unique_name(
    base: &str,
    usability: &dyn Usability,
    transform: Option<NameTransform<'_>>,
    options: &NameOptions,
) -> NamingResult<String> {
    NameGenerator::new(options.clone())
        .with_usability(usability)
        .generate(base, "", transform)
}

/// Find the first usable file name `base.ext`, `base1.ext`, ...
pub fn generate_unique_file_name(
    base: &str,
    extension: &str,
    usability: &dyn Usability,
    options: &NameOptions,
) -> NamingResult<String> {
    NameGenerator::new(options.clone())
        .with_usability(usability)
        .generate(base, extension, None)
}

/// Find the first name derived from `base` that is not in `names`.
///
/// Membership uses the case mode from `options`. Every reserved name tried
/// counts as a rejection, so a run of more than `max_attempts` consecutive
/// reserved suffixes ends in [`NamingError::ResourceExhausted`]; prefer
/// [`ensure_unique_name`] when the reserved set is the only constraint.
///
/// [`NamingError::ResourceExhausted`]: crate::error::NamingError::ResourceExhausted
pub fn generate_unique_name_in_set<I, S>(
    base: &str,
    names: I,
    transform: Option<NameTransform<'_>>,
    options: &NameOptions,
) -> NamingResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let reserved = ReservedNames::new(names, options.case_mode);
    generate_unique_name(base, &reserved, transform, options)
}
