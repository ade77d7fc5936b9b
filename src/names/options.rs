//! Configuration shared by every naming operation.

use tokio_util::sync::CancellationToken;

use crate::base::{CaseMode, DEFAULT_MAX_ATTEMPTS};

/// Options controlling a naming call.
#[derive(Debug, Clone)]
pub struct NameOptions {
    /// How names are compared for collisions and membership
    pub case_mode: CaseMode,
    /// Maximum candidates a single suffix search may try (`None` = unbounded)
    pub max_attempts: Option<usize>,
    /// Checked before every candidate; a signalled token aborts the call
    pub cancel: CancellationToken,
}

impl Default for NameOptions {
    fn default() -> Self {
        Self {
            case_mode: CaseMode::Sensitive,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            cancel: CancellationToken::new(),
        }
    }
}

impl NameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options with the comparison picked from a flag.
    pub fn case_sensitive(case_sensitive: bool) -> Self {
        Self::default().with_case_mode(CaseMode::from_sensitivity(case_sensitive))
    }

    pub fn case_insensitive(self) -> Self {
        self.with_case_mode(CaseMode::Insensitive)
    }

    pub fn with_case_mode(mut self, case_mode: CaseMode) -> Self {
        self.case_mode = case_mode;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Remove the attempt bound. A usability check that never accepts
    /// will then loop until cancelled.
    pub fn unbounded(mut self) -> Self {
        self.max_attempts = None;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Whether `attempts` candidates have used up the budget.
    pub(crate) fn exhausted(&self, attempts: usize) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}
