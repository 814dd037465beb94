//! Per-line indentation classification.
//!
//! One raw line in, one [`ClassifiedLine`] out. Classification is a pure
//! function; all sequencing (continuation lines, previous-line context) lives
//! in [`crate::analyze`].

/// Column width of one tab stop. Also the cutoff between a short, ambiguous
/// space run ([`LineType::BeginSpace`]) and an unambiguous one
/// ([`LineType::SpaceOnly`]), and the upper bound on the space run of a
/// tab+space indent.
pub const TAB_STOP: usize = 8;

/// What kind of indentation signal a line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// No leading whitespace at all.
    NoIndent,
    /// Leading spaces only, run of `TAB_STOP` or more.
    SpaceOnly,
    /// Leading tabs only.
    TabOnly,
    /// Leading tabs followed by fewer than `TAB_STOP` spaces.
    Mixed,
    /// Leading spaces only, run shorter than `TAB_STOP`. Ambiguous between a
    /// pure-space file and the sub-tab level of a mixed file.
    BeginSpace,
    /// No usable signal: blank line, whitespace-only line, comment
    /// continuation, or a malformed tab/space mixture.
    Rejected,
}

/// Result of classifying one line: the kind plus the lengths of the tab run
/// and space run making up the indent. Only the runs relevant to the kind are
/// populated; `Rejected` and `NoIndent` carry zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub kind: LineType,
    pub tabs: usize,
    pub spaces: usize,
}

impl ClassifiedLine {
    const fn rejected() -> Self {
        Self {
            kind: LineType::Rejected,
            tabs: 0,
            spaces: 0,
        }
    }
}

/// Classify one raw line. A single trailing `\n` or `\r\n` is stripped before
/// inspection; everything else on the line is treated as opaque text.
///
/// Lines whose first visible character is `*`, `/*`, or `#` are rejected:
/// such lines are frequently aligned for readability (block-comment bodies,
/// preprocessor directives) rather than indented by the file's real rule.
#[must_use]
pub fn classify(line: &str) -> ClassifiedLine {
    let line = match line.strip_suffix('\n') {
        Some(l) => l.strip_suffix('\r').unwrap_or(l),
        None => line,
    };

    let Some(first) = line.chars().next() else {
        return ClassifiedLine::rejected();
    };
    if first != ' ' && first != '\t' {
        return ClassifiedLine {
            kind: LineType::NoIndent,
            tabs: 0,
            spaces: 0,
        };
    }

    let indent_end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    let (indent, text) = line.split_at(indent_end);
    if text.is_empty() {
        // Whitespace-only line.
        return ClassifiedLine::rejected();
    }
    if text.starts_with('*') || text.starts_with("/*") || text.starts_with('#') {
        return ClassifiedLine::rejected();
    }

    let tabs = indent.chars().take_while(|&c| c == '\t').count();
    let rest = &indent[tabs..];

    if tabs > 0 {
        if rest.is_empty() {
            return ClassifiedLine {
                kind: LineType::TabOnly,
                tabs,
                spaces: 0,
            };
        }
        if rest.contains('\t') {
            // Tabs after the space run started: malformed, no usable signal.
            return ClassifiedLine::rejected();
        }
        let spaces = rest.len();
        if spaces >= TAB_STOP {
            // A full tab stop of trailing spaces means the file is not
            // really on 8-column tab stops; treat as noise.
            return ClassifiedLine::rejected();
        }
        return ClassifiedLine {
            kind: LineType::Mixed,
            tabs,
            spaces,
        };
    }

    if indent.contains('\t') {
        // First char was a space but a tab appears later in the run.
        return ClassifiedLine::rejected();
    }

    let spaces = indent.len();
    let kind = if spaces < TAB_STOP {
        LineType::BeginSpace
    } else {
        LineType::SpaceOnly
    };
    ClassifiedLine {
        kind,
        tabs: 0,
        spaces,
    }
}
