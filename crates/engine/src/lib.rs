// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::path::PathBuf;

pub mod analyze;
pub mod classify;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod histogram;
pub mod processor;
pub mod report;
pub mod verdict;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::histogram::Histogram;
use crate::report::{FileReport, RunResult, Summary};

/// Run the indentation inference engine over the configured roots.
///
/// Separate mode analyzes files in parallel and reports each one; aggregate
/// mode (the default) folds every file into one shared histogram and reports
/// a single verdict for the whole group.
///
/// # Errors
///
/// Returns an error only for critical failures (a missing root, or any file
/// error in `strict` mode). Individual file errors are otherwise collected in
/// `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    let (tx, rx) = crossbeam_channel::bounded(1024);
    let (err_tx, err_rx) = std::sync::mpsc::channel();

    let walk_cfg = config.walk.clone();
    std::thread::spawn(move || {
        if let Err(e) = crate::filesystem::walk_parallel(&walk_cfg, &tx) {
            let _ = err_tx.send(e);
        }
    });

    let mut result = if config.separate {
        run_separate(rx, config)?
    } else {
        run_aggregate(rx, config)?
    };

    // Surface walk errors from the background thread.
    if let Ok(walk_err) = err_rx.try_recv() {
        if config.strict {
            return Err(walk_err);
        }
        result.errors.push((PathBuf::from("<walk>"), walk_err));
    }

    Ok(result)
}

fn run_separate(rx: crossbeam_channel::Receiver<PathBuf>, config: &Config) -> Result<RunResult> {
    let iter = rx.into_iter().par_bridge();

    if config.strict {
        let reports = iter
            .map(|path| processor::analyze_file(path, config))
            .collect::<Result<Vec<_>>>()?;
        return Ok(RunResult {
            reports,
            summary: None,
            errors: Vec::new(),
        });
    }

    #[allow(clippy::redundant_closure_for_method_calls)]
    let (reports, errors): (Vec<_>, Vec<_>) = iter
        .map(|path| {
            processor::analyze_file(path.clone(), config).map_err(|e| (path, e))
        })
        .partition(|r| r.is_ok());

    let reports: Vec<FileReport> = reports.into_iter().map(|r| r.unwrap()).collect();
    let errors: Vec<(PathBuf, EngineError)> = errors.into_iter().map(|r| r.unwrap_err()).collect();

    Ok(RunResult {
        reports,
        summary: None,
        errors,
    })
}

fn run_aggregate(rx: crossbeam_channel::Receiver<PathBuf>, config: &Config) -> Result<RunResult> {
    let mut hist = Histogram::new();
    let mut errors = Vec::new();
    let mut files = 0usize;
    let mut lines = 0usize;
    let mut skipped = 0usize;

    // One shared histogram; scan_file starts a fresh analyzer per file, so
    // no line context crosses a file boundary.
    for path in rx {
        match processor::scan_file(&path, &mut hist) {
            Ok(counts) => {
                if !counts.binary {
                    files += 1;
                    lines += counts.lines;
                    skipped += counts.skipped;
                }
            }
            Err(e) => {
                if config.strict {
                    return Err(e);
                }
                errors.push((path, e));
            }
        }
    }

    let resolved = hist.try_resolve();
    Ok(RunResult {
        reports: Vec::new(),
        summary: Some(Summary {
            verdict: resolved.unwrap_or(config.fallback),
            fallback: resolved.is_none(),
            files,
            lines,
            skipped,
        }),
        errors,
    })
}
