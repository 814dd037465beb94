//! `FromStr`-style parsing for CLI argument values.

use detect_indent_engine::histogram::{MAX_WIDTH, MIN_WIDTH};
use detect_indent_engine::verdict::Verdict;

/// Parse an indent-style spec: `tab`, `space:N`, or `mixed:N`.
pub fn parse_style(s: &str) -> Result<Verdict, String> {
    let (name, width) = s
        .split_once(':')
        .map_or((s, None), |(n, w)| (n, Some(w)));

    match (name.trim(), width) {
        ("tab", None) => Ok(Verdict::Tab),
        ("space", Some(w)) => Ok(Verdict::space(parse_width(w)?)),
        ("mixed", Some(w)) => Ok(Verdict::mixed(parse_width(w)?)),
        _ => Err(format!(
            "Unknown indent style: {s} (expected tab, space:N, or mixed:N)"
        )),
    }
}

fn parse_width(w: &str) -> Result<usize, String> {
    let n: usize = w
        .trim()
        .parse()
        .map_err(|_| format!("Invalid indent width: {w}"))?;
    if (MIN_WIDTH..=MAX_WIDTH).contains(&n) {
        Ok(n)
    } else {
        Err(format!(
            "Indent width must be between {MIN_WIDTH} and {MAX_WIDTH}: {n}"
        ))
    }
}
