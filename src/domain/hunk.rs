use crate::domain::change_block::ChangeKind;
use crate::domain::line_record::LineRecord;
use std::fmt::Display;

/// A contiguous run of rendered diff lines plus its bounding context.
///
/// Offsets are 0-based counts of lines consumed on each side before this
/// hunk. Side lengths are fixed at construction: side a counts removed and
/// unmodified lines, side b counts added and unmodified lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    a_offset: usize,
    b_offset: usize,
    a_len: usize,
    b_len: usize,
    lines: Vec<LineRecord>,
}

impl Hunk {
    pub fn new(a_offset: usize, b_offset: usize, lines: Vec<LineRecord>) -> Self {
        let a_len = lines
            .iter()
            .filter(|line| matches!(line.kind, ChangeKind::Removed | ChangeKind::Unmodified))
            .count();
        let b_len = lines
            .iter()
            .filter(|line| matches!(line.kind, ChangeKind::Added | ChangeKind::Unmodified))
            .count();

        Hunk {
            a_offset,
            b_offset,
            a_len,
            b_len,
            lines,
        }
    }

    pub fn a_offset(&self) -> usize {
        self.a_offset
    }

    pub fn b_offset(&self) -> usize {
        self.b_offset
    }

    pub fn a_len(&self) -> usize {
        self.a_len
    }

    pub fn b_len(&self) -> usize {
        self.b_len
    }

    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    /// 1-based first line of the hunk on side a. A zero-length side reports
    /// the line preceding the hunk instead: an empty range has no first
    /// line.
    pub fn a_start(&self) -> usize {
        if self.a_len == 0 {
            self.a_offset
        } else {
            self.a_offset + 1
        }
    }

    pub fn b_start(&self) -> usize {
        if self.b_len == 0 {
            self.b_offset
        } else {
            self.b_offset + 1
        }
    }

    /// `@@ -<start>,<len> +<start>,<len> @@`, with a `,<len>` suffix omitted
    /// when that side is exactly one line long.
    pub fn unified_header(&self) -> String {
        let a_len = if self.a_len == 1 {
            String::new()
        } else {
            format!(",{}", self.a_len)
        };
        let b_len = if self.b_len == 1 {
            String::new()
        } else {
            format!(",{}", self.b_len)
        };

        format!(
            "@@ -{}{a_len} +{}{b_len} @@",
            self.a_start(),
            self.b_start()
        )
    }

    /// Header line followed by each rendered line, newline-joined.
    pub fn unified(&self) -> String {
        let mut out = vec![self.unified_header()];
        out.extend(self.lines.iter().map(LineRecord::unified));
        out.join("\n")
    }

    /// Kind characters of the lines in order, e.g. `ss--+++s`.
    pub fn shorthand(&self) -> String {
        self.lines.iter().map(|line| line.kind.shorthand()).collect()
    }
}

impl Display for Hunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unified())
    }
}
