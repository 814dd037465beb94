//! Evidence histogram and verdict resolution.
//!
//! The histogram is the accumulator shared by the transition analyzer and the
//! decision step: width buckets for the space and mixed hypotheses plus a
//! single tab counter. One histogram belongs to one analysis session (one
//! file, or one explicit aggregation group); [`Histogram::clear`] resets it
//! between unrelated sessions.

use crate::verdict::Verdict;
use log::trace;

/// Smallest indentation width the engine will ever report.
pub const MIN_WIDTH: usize = 2;
/// Largest indentation width the engine will ever report.
pub const MAX_WIDTH: usize = 8;

const BUCKETS: usize = MAX_WIDTH - MIN_WIDTH + 1;

/// Per-width evidence counts. All counts are monotonically non-decreasing
/// between clears; resolution never mutates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    space: [u32; BUCKETS],
    mixed: [u32; BUCKETS],
    tab: u32,
}

impl Histogram {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every count to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no transition has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn add_space(&mut self, width: usize) {
        self.space[width - MIN_WIDTH] += 1;
    }

    pub(crate) fn add_mixed(&mut self, width: usize) {
        self.mixed[width - MIN_WIDTH] += 1;
    }

    pub(crate) fn add_tab(&mut self) {
        self.tab += 1;
    }

    /// Evidence count for space indentation of `width` (2..=8).
    #[must_use]
    pub fn space_count(&self, width: usize) -> u32 {
        self.space[width - MIN_WIDTH]
    }

    /// Evidence count for mixed indentation with a space run of `width`.
    #[must_use]
    pub fn mixed_count(&self, width: usize) -> u32 {
        self.mixed[width - MIN_WIDTH]
    }

    /// Evidence count for tab indentation.
    #[must_use]
    pub fn tab_count(&self) -> u32 {
        self.tab
    }

    /// Resolve the histogram to a verdict, or `None` when no hypothesis has
    /// conclusive support. Read-only: resolving twice yields the same answer.
    #[must_use]
    pub fn try_resolve(&self) -> Option<Verdict> {
        let max_space = self.space.iter().copied().max().unwrap_or(0);
        let max_mixed = self.mixed.iter().copied().max().unwrap_or(0);
        let max_tab = self.tab;
        trace!("resolve: space={:?} mixed={:?} tab={}", self.space, self.mixed, self.tab);

        if max_space >= max_mixed && max_space > max_tab {
            dominant_width(&self.space).map(Verdict::space)
        } else if max_tab > max_mixed && max_tab > max_space {
            Some(Verdict::Tab)
        } else if max_mixed >= max_tab && max_mixed > max_space {
            dominant_width(&self.mixed).map(Verdict::mixed)
        } else {
            // All zero, or no hypothesis dominates.
            None
        }
    }

    /// Resolve to a verdict, falling back to `fallback` when the evidence is
    /// inconclusive. A histogram with zero recorded transitions always falls
    /// back: the engine never fabricates a verdict from no evidence.
    #[must_use]
    pub fn resolve(&self, fallback: Verdict) -> Verdict {
        self.try_resolve().unwrap_or(fallback)
    }
}

/// Descending scan with a 10% dominance margin. Multiples of the true width
/// also collect counts (a two-level jump in a 4-space file lands in the
/// 8-bucket), so the largest width is preferred; a smaller width only takes
/// over by beating the running best by strictly more than 10%.
fn dominant_width(buckets: &[u32; BUCKETS]) -> Option<usize> {
    let mut best: u32 = 0;
    let mut width = None;
    for w in (MIN_WIDTH..=MAX_WIDTH).rev() {
        let count = buckets[w - MIN_WIDTH];
        if f64::from(count) > f64::from(best) * 1.1 {
            best = count;
            width = Some(w);
        }
    }
    width
}
