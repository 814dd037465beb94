use crate::error::EngineError;
use crate::verdict::Verdict;
use serde::Serialize;
use std::path::PathBuf;

/// Inference result for one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub verdict: Verdict,
    /// True when the verdict is the configured fallback rather than an
    /// inference from actual evidence.
    pub fallback: bool,
    /// Whether the content was detected as binary (no analysis performed).
    pub binary: bool,
    /// Number of physical lines scanned.
    pub lines: usize,
    /// Lines that contributed no evidence (blank, comment, continuation,
    /// no-signal transitions).
    pub skipped: usize,
}

/// Inference result for one aggregation group (the default multi-file mode).
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    #[serde(flatten)]
    pub verdict: Verdict,
    pub fallback: bool,
    /// Number of text files that contributed lines.
    pub files: usize,
    pub lines: usize,
    pub skipped: usize,
}

/// Everything one engine run produced. Exactly one of `reports` (separate
/// mode) and `summary` (aggregate mode) is populated.
#[derive(Debug)]
pub struct RunResult {
    pub reports: Vec<FileReport>,
    pub summary: Option<Summary>,
    pub errors: Vec<(PathBuf, EngineError)>,
}
