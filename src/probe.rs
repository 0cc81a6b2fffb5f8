use std::fmt;
use thiserror::Error;

/// Why a site was judged not reachable.
///
/// Every variant means the same thing to the output file: the site is dropped.
/// The distinction only exists for logs and the run summary.
#[derive(Error, Debug)]
pub enum ProbeFailure {
    #[error("malformed site: {0}")]
    Malformed(String),
    #[error("no answer: {0}")]
    NoAnswer(String),
    #[error("refused: {0}")]
    Refused(String),
    #[error("timed out: {0}")]
    Timeout(String),
    #[error("probe failed: {0}")]
    Other(String),
}

impl ProbeFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            ProbeFailure::Malformed(_) => FailureKind::Malformed,
            ProbeFailure::NoAnswer(_) => FailureKind::NoAnswer,
            ProbeFailure::Refused(_) => FailureKind::Refused,
            ProbeFailure::Timeout(_) => FailureKind::Timeout,
            ProbeFailure::Other(_) => FailureKind::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FailureKind {
    Malformed,
    NoAnswer,
    Refused,
    Timeout,
    Other,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Malformed => "malformed",
            FailureKind::NoAnswer => "no_answer",
            FailureKind::Refused => "refused",
            FailureKind::Timeout => "timeout",
            FailureKind::Other => "other",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single liveness check. `Ok(())` means the site survives.
pub trait Prober {
    fn name(&self) -> &'static str;

    fn probe(&self, site: &str) -> Result<(), ProbeFailure>;
}
