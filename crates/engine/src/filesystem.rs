use crate::config::WalkOptions;
use crate::error::{EngineError, Result};
use crossbeam_channel::Sender;
use ignore::WalkBuilder;
use std::path::PathBuf;

/// Parallel recursive directory walk. Explicit file roots are forwarded
/// as-is; directory roots are expanded gitignore-aware.
///
/// # Errors
///
/// Returns an error if a root does not exist. Errors on individual entries
/// during traversal are skipped.
pub fn walk_parallel(options: &WalkOptions, tx: &Sender<PathBuf>) -> Result<()> {
    if options.roots.is_empty() {
        return Ok(());
    }

    for root in &options.roots {
        if !root.exists() {
            return Err(EngineError::FileRead {
                path: root.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            });
        }
    }

    let mut builder = WalkBuilder::new(&options.roots[0]);
    for root in &options.roots[1..] {
        builder.add(root);
    }

    builder
        .threads(options.threads)
        .hidden(!options.hidden)
        .git_ignore(options.git_ignore)
        .follow_links(options.follow_links);

    if let Some(depth) = options.max_depth {
        builder.max_depth(Some(depth));
    }

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            if let Ok(entry) = entry
                && entry.file_type().is_some_and(|ft| ft.is_file())
            {
                let _ = tx.send(entry.path().to_owned());
            }
            ignore::WalkState::Continue
        })
    });

    Ok(())
}
