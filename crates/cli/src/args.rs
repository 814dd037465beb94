// crates/cli/src/args.rs
use crate::options::OutputFormat;
use crate::parsers;
use clap::Parser;
use detect_indent_engine::verdict::Verdict;
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "detect_indent",
    version = crate::VERSION,
    about = "Infer the indentation style (tab, space, or mixed tab+space) of source files"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Files or directories to analyse (directories are walked recursively)
    pub paths: Vec<PathBuf>,

    /// Report one verdict per file instead of one verdict for all input
    #[arg(long)]
    pub separate: bool,

    /// Fallback verdict when the input yields no conclusive evidence
    /// (tab, space:N, or mixed:N with N between 2 and 8)
    #[arg(long, default_value = "space:4", value_parser = parsers::parse_style)]
    pub default: Verdict,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Include hidden files and directories
    #[arg(long)]
    pub hidden: bool,

    /// Do not honour .gitignore files
    #[arg(long)]
    pub no_gitignore: bool,

    /// Maximum directory depth to walk
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Follow symbolic links
    #[arg(long)]
    pub follow: bool,

    /// Number of walker/analysis threads (defaults to the CPU count)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Fail on the first unreadable file instead of reporting and continuing
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
