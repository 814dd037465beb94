use crate::verdict::Verdict;
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    #[builder(default = "1")]
    pub threads: usize,
    #[builder(default)]
    pub hidden: bool,
    #[builder(default = "true")]
    pub git_ignore: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![],
            threads: 1,
            hidden: false,
            git_ignore: true,
            max_depth: None,
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,

    /// Verdict to report when a file (or aggregation group) yields no
    /// conclusive evidence.
    #[builder(default = "Verdict::space(4)")]
    pub fallback: Verdict,

    /// Report one verdict per file instead of one verdict for all input.
    #[builder(default)]
    pub separate: bool,

    /// Fail on the first unreadable file instead of collecting the error.
    #[builder(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            fallback: Verdict::space(4),
            separate: false,
            strict: false,
        }
    }
}
