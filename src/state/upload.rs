/// Request lifecycle state owned by the application shell
///
/// Idle -> Loading -> Success | Failure -> Loading -> ...
/// No phase is terminal; a new submission is always allowed.

use chrono::{DateTime, Local};

use super::data::ClassificationResult;

/// The only message the user ever sees for a failed classification
pub const CLASSIFY_FAILED_MESSAGE: &str = "Failed to classify the resume. Please try again.";

/// Where the shell is in the request lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Upload state: result, loading flag, error message
///
/// `result` and `error` are never both set. Each submission clears both and
/// gets a new generation; completions from older generations are discarded.
#[derive(Debug, Default)]
pub struct UploadState {
    result: Option<ClassificationResult>,
    loading: bool,
    error: Option<String>,
    /// Local time the current result arrived
    completed_at: Option<DateTime<Local>>,
    generation: u64,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission and return its generation
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.result = None;
        self.completed_at = None;
        self.generation
    }

    /// Record a successful response. Returns false if the generation is stale.
    pub fn succeed(&mut self, generation: u64, result: ClassificationResult) -> bool {
        if !self.is_current(generation) {
            return false;
        }

        self.result = Some(result);
        self.completed_at = Some(Local::now());
        self.error = None;
        self.loading = false;
        true
    }

    /// Record a failed request. Returns false if the generation is stale.
    pub fn fail(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }

        self.result = None;
        self.completed_at = None;
        self.error = Some(CLASSIFY_FAILED_MESSAGE.to_string());
        self.loading = false;
        true
    }

    fn is_current(&self, generation: u64) -> bool {
        self.loading && generation == self.generation
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failure
        } else if self.result.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn completed_at(&self) -> Option<DateTime<Local>> {
        self.completed_at
    }
}
