//! The final inferred indentation style.

use crate::classify::TAB_STOP;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inferred indentation style and width for one file (or one aggregation
/// group of files).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum Verdict {
    /// Space indentation of the given width.
    Space { size: usize },
    /// Tab indentation.
    Tab,
    /// Tabs for outer levels, a short space run for one extra sub-tab level.
    Mixed { tab_size: usize, space_size: usize },
}

impl Verdict {
    /// Space indentation of width `size`.
    #[must_use]
    pub const fn space(size: usize) -> Self {
        Self::Space { size }
    }

    /// Mixed indentation: tab stops of [`TAB_STOP`] columns plus a trailing
    /// space run of `space_size`.
    #[must_use]
    pub const fn mixed(space_size: usize) -> Self {
        Self::Mixed {
            tab_size: TAB_STOP,
            space_size,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space { size } => write!(f, "space {size}"),
            Self::Tab => write!(f, "tab"),
            Self::Mixed {
                tab_size,
                space_size,
            } => write!(f, "mixed tab {tab_size} space {space_size}"),
        }
    }
}
