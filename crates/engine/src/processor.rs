use crate::analyze::IndentAnalyzer;
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::histogram::Histogram;
use crate::report::FileReport;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Line totals from feeding one file through an analyzer.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanCounts {
    pub lines: usize,
    /// Lines that contributed no evidence.
    pub skipped: usize,
    /// Set when the content looked binary; nothing was scanned.
    pub binary: bool,
}

/// Scan one file's lines into `hist` with a fresh analyzer. The histogram is
/// deliberately caller-owned so aggregate mode can share one across files
/// while line context never leaks across a file boundary.
pub fn scan_file(path: &Path, hist: &mut Histogram) -> Result<ScanCounts> {
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    let mut counts = ScanCounts::default();

    // Binary check on the first buffered block.
    {
        let buffer = reader.fill_buf().map_err(|e| EngineError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if buffer.is_empty() {
            return Ok(counts);
        }
        if buffer.contains(&0) {
            counts.binary = true;
            return Ok(counts);
        }
    }

    let mut analyzer = IndentAnalyzer::new();
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        match reader.read_until(b'\n', &mut line_buf) {
            Ok(0) => break,
            Ok(_) => {
                counts.lines += 1;
                // Lossy conversion keeps mostly-text non-UTF8 files usable.
                let cow = String::from_utf8_lossy(&line_buf);
                if analyzer.observe(hist, &cow).is_none() {
                    counts.skipped += 1;
                }
            }
            Err(e) => {
                return Err(EngineError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        }
    }

    debug!(
        "{}: {} lines scanned, {} without signal",
        path.display(),
        counts.lines,
        counts.skipped
    );
    Ok(counts)
}

/// Analyze a single file in isolation and produce its report.
pub fn analyze_file(path: PathBuf, config: &Config) -> Result<FileReport> {
    let mut hist = Histogram::new();
    let counts = scan_file(&path, &mut hist)?;
    let resolved = hist.try_resolve();

    Ok(FileReport {
        path,
        verdict: resolved.unwrap_or(config.fallback),
        fallback: resolved.is_none(),
        binary: counts.binary,
        lines: counts.lines,
        skipped: counts.skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Verdict;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_analyze_four_space_file() {
        let file = write_file("fn f() {\n    a();\n        b();\n    c();\n}\n");
        let report = analyze_file(file.path().to_path_buf(), &Config::default()).unwrap();

        assert_eq!(report.verdict, Verdict::space(4));
        assert!(!report.fallback);
        assert_eq!(report.lines, 5);
    }

    #[test]
    fn test_analyze_tab_file() {
        let file = write_file("a\n\tb\n\t\tc\n\t\t\td\n\t\t\t\te\n");
        let report = analyze_file(file.path().to_path_buf(), &Config::default()).unwrap();
        assert_eq!(report.verdict, Verdict::Tab);
    }

    #[test]
    fn test_empty_file_falls_back() {
        let file = write_file("");
        let config = Config {
            fallback: Verdict::Tab,
            ..Config::default()
        };
        let report = analyze_file(file.path().to_path_buf(), &config).unwrap();
        assert_eq!(report.verdict, Verdict::Tab);
        assert!(report.fallback);
        assert_eq!(report.lines, 0);
    }

    #[test]
    fn test_comment_only_file_falls_back() {
        let file = write_file("   # a\n   # b\n       # c\n");
        let report = analyze_file(file.path().to_path_buf(), &Config::default()).unwrap();
        assert!(report.fallback);
        assert_eq!(report.verdict, Verdict::space(4));
        assert_eq!(report.skipped, 3);
    }

    #[test]
    fn test_binary_file_is_flagged() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"ELF\x00\x01\x02\n\tnot code\n").unwrap();
        let report = analyze_file(file.path().to_path_buf(), &Config::default()).unwrap();
        assert!(report.binary);
        assert_eq!(report.lines, 0);
    }

    #[test]
    fn test_crlf_file() {
        let file = write_file("a {\r\n    b;\r\n        c;\r\n}\r\n");
        let report = analyze_file(file.path().to_path_buf(), &Config::default()).unwrap();
        assert_eq!(report.verdict, Verdict::space(4));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = analyze_file(PathBuf::from("/no/such/file"), &Config::default());
        assert!(matches!(err, Err(EngineError::FileRead { .. })));
    }

    #[test]
    fn test_shared_histogram_across_files() {
        let a = write_file("x\n  y\n    z\n");
        let b = write_file("x\n  y\n    z\n");
        let mut hist = Histogram::new();
        scan_file(a.path(), &mut hist).unwrap();
        scan_file(b.path(), &mut hist).unwrap();
        assert_eq!(hist.space_count(2), 4);
        assert_eq!(hist.try_resolve(), Some(Verdict::space(2)));
    }
}
