// crates/cli/src/config.rs
use crate::args::Args;
pub use detect_indent_engine::config::{Config, ConfigBuilder, WalkOptions, WalkOptionsBuilder};
use std::path::PathBuf;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let threads = args.jobs.unwrap_or_else(num_cpus::get);
        let roots = if args.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            args.paths
        };

        let walk = WalkOptionsBuilder::default()
            .roots(roots)
            .threads(threads)
            .hidden(args.hidden)
            .git_ignore(!args.no_gitignore)
            .max_depth(args.max_depth)
            .follow_links(args.follow)
            .build()
            .expect("Failed to build walk options");

        ConfigBuilder::default()
            .walk(walk)
            .fallback(args.default)
            .separate(args.separate)
            .strict(args.strict)
            .build()
            .expect("Failed to build config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use detect_indent_engine::verdict::Verdict;

    #[test]
    fn test_default_roots_and_fallback() {
        let args = crate::args::Args::parse_from(["detect_indent"]);
        let config = Config::from(args);
        assert_eq!(config.walk.roots, vec![PathBuf::from(".")]);
        assert_eq!(config.fallback, Verdict::space(4));
        assert!(!config.separate);
    }

    #[test]
    fn test_flags_map_through() {
        let args = crate::args::Args::parse_from([
            "detect_indent",
            "--separate",
            "--default",
            "tab",
            "--no-gitignore",
            "--max-depth",
            "3",
            "src",
        ]);
        let config = Config::from(args);
        assert_eq!(config.walk.roots, vec![PathBuf::from("src")]);
        assert!(!config.walk.git_ignore);
        assert_eq!(config.walk.max_depth, Some(3));
        assert!(config.separate);
        assert_eq!(config.fallback, Verdict::Tab);
    }
}
