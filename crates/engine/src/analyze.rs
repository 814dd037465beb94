//! Transition analysis: consecutive classified lines become histogram
//! evidence.
//!
//! Indentation width is only observable at the moment a new nesting level
//! begins, so the analyzer looks exclusively at *increases* between two
//! consecutive significant lines. Dedents and same-level lines carry no
//! width signal and are ignored.

use crate::classify::{ClassifiedLine, LineType, TAB_STOP, classify};
use crate::histogram::{Histogram, MAX_WIDTH, MIN_WIDTH};

/// Which hypothesis a single accepted transition fed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    /// Space bucket of the given width.
    Space(usize),
    /// Mixed bucket of the given trailing-space width.
    Mixed(usize),
    /// Short-space transition, ambiguous between a pure-space file and the
    /// sub-tab level of a mixed file; feeds both buckets.
    SpaceOrMixed(usize),
    /// Tab counter.
    Tab,
}

/// Sequential state threaded through one call per physical line: the most
/// recent significant classification plus the backslash-continuation flag.
#[derive(Debug, Clone, Default)]
pub struct IndentAnalyzer {
    prev: Option<ClassifiedLine>,
    skip_next: bool,
}

impl IndentAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all line context. Call between unrelated files when reusing an
    /// analyzer (the histogram is reset separately, if at all).
    pub fn reset(&mut self) {
        self.prev = None;
        self.skip_next = false;
    }

    /// Feed one physical line, in file order. Returns the evidence recorded
    /// into `hist`, if any; two consecutive significant lines are required
    /// before any transition can be observed.
    pub fn observe(&mut self, hist: &mut Histogram, raw: &str) -> Option<Evidence> {
        let stripped = match raw.strip_suffix('\n') {
            Some(l) => l.strip_suffix('\r').unwrap_or(l),
            None => raw,
        };
        let skip = self.skip_next;
        self.skip_next = stripped.ends_with('\\');
        if skip {
            // The body of a continued statement is often aligned to the
            // opening expression rather than indented by the file's rule.
            // Its indentation is untrustworthy, and the continuation also
            // invalidates the surrounding context.
            self.prev = None;
            return None;
        }

        let current = classify(raw);
        if current.kind == LineType::Rejected {
            // No signal, but a rejected line does not erase prior context.
            return None;
        }
        let prev = self.prev.replace(current)?;

        let evidence = transition(prev, current)?;
        match evidence {
            Evidence::Space(w) => hist.add_space(w),
            Evidence::Mixed(w) => hist.add_mixed(w),
            Evidence::SpaceOrMixed(w) => {
                hist.add_space(w);
                hist.add_mixed(w);
            }
            Evidence::Tab => hist.add_tab(),
        }
        Some(evidence)
    }
}

/// The fixed transition table. Every accepted `(previous, current)` pairing
/// and its delta formula in one place; everything else yields no signal.
fn transition(prev: ClassifiedLine, cur: ClassifiedLine) -> Option<Evidence> {
    use LineType::{BeginSpace, Mixed, NoIndent, SpaceOnly, TabOnly};

    match (prev.kind, cur.kind) {
        // One more tab of depth.
        (NoIndent | TabOnly, TabOnly) if cur.tabs == prev.tabs + 1 => Some(Evidence::Tab),

        // A deeper run of spaces; the step is the candidate width.
        (NoIndent | BeginSpace | SpaceOnly, SpaceOnly) => {
            width(cur.spaces.checked_sub(prev.spaces)?).map(Evidence::Space)
        }

        // Same, but both runs are short enough to also be the sub-tab level
        // of a mixed file. Feed both hypotheses.
        (NoIndent | BeginSpace, BeginSpace) => {
            width(cur.spaces.checked_sub(prev.spaces)?).map(Evidence::SpaceOrMixed)
        }

        // A short space run collapsing into a single tab: the space run was
        // the sub-tab level, and its complement to the tab stop is the step.
        // Deliberately restricted to a single-tab current line.
        (BeginSpace, TabOnly) if cur.tabs == 1 => {
            width(TAB_STOP - prev.spaces).map(Evidence::Mixed)
        }

        // Tabs gaining a trailing space run at the same tab depth: the run
        // length is the sub-tab width.
        (TabOnly, Mixed) if prev.tabs == cur.tabs => width(cur.spaces).map(Evidence::Mixed),

        // A tab+space line rounding up to the next full tab: the complement
        // of the old space run is the sub-tab width.
        (Mixed, TabOnly) if prev.tabs + 1 == cur.tabs => {
            width(TAB_STOP - prev.spaces).map(Evidence::Mixed)
        }

        _ => None,
    }
}

/// Accept a step as a candidate width only inside the reportable range; a
/// step of 0 or 1 column, or of more than one tab stop, is noise.
fn width(delta: usize) -> Option<usize> {
    (MIN_WIDTH..=MAX_WIDTH).contains(&delta).then_some(delta)
}

/// Run a fresh analyzer over an in-memory sequence of lines and return the
/// populated histogram. Mostly useful for tests and benchmarks; file-backed
/// analysis lives in [`crate::processor`].
pub fn analyze_lines<'a, I>(lines: I) -> Histogram
where
    I: IntoIterator<Item = &'a str>,
{
    let mut hist = Histogram::new();
    let mut analyzer = IndentAnalyzer::new();
    for line in lines {
        let _ = analyzer.observe(&mut hist, line);
    }
    hist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Verdict;

    fn observe_all(lines: &[&str]) -> (Histogram, Vec<Option<Evidence>>) {
        let mut hist = Histogram::new();
        let mut analyzer = IndentAnalyzer::new();
        let seen = lines
            .iter()
            .map(|l| analyzer.observe(&mut hist, l))
            .collect();
        (hist, seen)
    }

    #[test]
    fn test_tab_ladder_resolves_to_tab() {
        let (hist, _) = observe_all(&["a", "\tb", "\t\tc", "\t\t\td", "\t\t\t\te"]);
        assert_eq!(hist.tab_count(), 4);
        assert_eq!(hist.try_resolve(), Some(Verdict::Tab));
    }

    #[test]
    fn test_tab_jump_of_two_is_ignored() {
        let (hist, seen) = observe_all(&["a", "\t\tb"]);
        assert_eq!(seen, vec![None, None]);
        assert!(hist.is_empty());
    }

    #[test]
    fn test_four_space_file() {
        let (hist, _) = observe_all(&["fn f() {", "    a;", "        b;", "    c;", "}"]);
        // 0 -> 4 feeds both hypotheses, 4 -> 8 is unambiguous space.
        assert_eq!(hist.space_count(4), 2);
        assert_eq!(hist.mixed_count(4), 1);
        assert_eq!(hist.try_resolve(), Some(Verdict::space(4)));
    }

    #[test]
    fn test_two_space_file() {
        let (hist, _) = observe_all(&["a", "  b", "    c", "      d"]);
        assert_eq!(hist.space_count(2), 3);
        assert_eq!(hist.try_resolve(), Some(Verdict::space(2)));
    }

    #[test]
    fn test_mixed_tab_plus_two_spaces() {
        let mut lines = vec!["start"];
        for _ in 0..6 {
            lines.push("\tlevel");
            lines.push("\t  sublevel");
        }
        let (hist, _) = observe_all(&lines);
        assert_eq!(hist.mixed_count(2), 6);
        assert_eq!(hist.try_resolve(), Some(Verdict::mixed(2)));
    }

    #[test]
    fn test_begin_space_to_single_tab() {
        let (hist, seen) = observe_all(&["  a", "\tb"]);
        // 8 - 2 = 6 column step on the mixed hypothesis.
        assert_eq!(seen[1], Some(Evidence::Mixed(6)));
        assert_eq!(hist.mixed_count(6), 1);
    }

    #[test]
    fn test_begin_space_to_multiple_tabs_is_dropped() {
        // Restrictive on purpose: only a single-tab line is accepted here.
        let (hist, seen) = observe_all(&["  a", "\t\tb"]);
        assert_eq!(seen[1], None);
        assert!(hist.is_empty());
    }

    #[test]
    fn test_mixed_rounding_up_to_next_tab() {
        let (hist, seen) = observe_all(&["\ta", "\t  b", "\t\tc"]);
        assert_eq!(seen[1], Some(Evidence::Mixed(2)));
        assert_eq!(seen[2], Some(Evidence::Mixed(6)));
        assert_eq!(hist.mixed_count(2), 1);
        assert_eq!(hist.mixed_count(6), 1);
    }

    #[test]
    fn test_continuation_skips_next_line_and_resets_context() {
        let (hist, seen) = observe_all(&["a \\", "    b", "        c"]);
        // Line 2 is skipped, and the skip drops the NoIndent context, so
        // line 3 has no partner either.
        assert_eq!(seen, vec![None, None, None]);
        assert!(hist.is_empty());
    }

    #[test]
    fn test_chained_continuations() {
        let (hist, seen) = observe_all(&["a \\", "  b \\", "    c", "x", "    y"]);
        // Lines 2 and 3 are both skipped; the pair (x, y) finally signals.
        assert_eq!(seen[4], Some(Evidence::SpaceOrMixed(4)));
        assert_eq!(hist.space_count(4), 1);
    }

    #[test]
    fn test_rejected_line_keeps_context() {
        let (hist, seen) = observe_all(&["    a", "    # note", "        b"]);
        assert_eq!(seen[1], None);
        // The comment did not erase the 4-space context.
        assert_eq!(seen[2], Some(Evidence::Space(4)));
        assert_eq!(hist.space_count(4), 1);
    }

    #[test]
    fn test_delta_guard() {
        // Step of 1 and step of 9 are both noise.
        let (hist, _) = observe_all(&["a", " b"]);
        assert!(hist.is_empty());
        let (hist, _) = observe_all(&["a", "         b"]);
        assert!(hist.is_empty());
    }

    #[test]
    fn test_dedent_is_ignored() {
        let (hist, seen) = observe_all(&["        a", "    b"]);
        assert_eq!(seen[1], None);
        assert!(hist.is_empty());
    }

    #[test]
    fn test_reset_forgets_context() {
        let mut hist = Histogram::new();
        let mut analyzer = IndentAnalyzer::new();
        let _ = analyzer.observe(&mut hist, "a");
        analyzer.reset();
        assert_eq!(analyzer.observe(&mut hist, "    b"), None);
        assert!(hist.is_empty());
    }

    #[test]
    fn test_analyze_lines_zero_evidence_falls_back() {
        let hist = analyze_lines(["// only", "#comment", "", "   "]);
        assert_eq!(hist.resolve(Verdict::space(4)), Verdict::space(4));
    }
}
