use std::fmt;
use std::path::PathBuf;

/// What happened to a single candidate URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Transfer finished and the file is large enough to be the real model.
    Accepted { size: u64 },
    /// Transfer finished but the file is most likely an error page.
    TooSmall { size: u64 },
    /// Transport, HTTP status or local I/O failure.
    Failed { reason: String },
}

impl AttemptOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AttemptOutcome::Accepted { .. })
    }
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptOutcome::Accepted { size } => write!(f, "accepted ({size} bytes)"),
            AttemptOutcome::TooSmall { size } => write!(f, "too small ({size} bytes)"),
            AttemptOutcome::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptRecord {
    pub url: String,
    pub outcome: AttemptOutcome,
}

/// A successful fetch. `attempts` ends with the accepted attempt.
#[derive(Clone, Debug)]
pub struct FetchOutcome {
    pub url: String,
    pub path: PathBuf,
    pub size: u64,
    pub attempts: Vec<AttemptRecord>,
}
