use crate::domain::line_record::LineRecord;
use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Removed,
    Unmodified,
}

impl ChangeKind {
    /// Single-character notation used in compact change summaries.
    pub fn shorthand(&self) -> char {
        match self {
            ChangeKind::Added => '+',
            ChangeKind::Removed => '-',
            ChangeKind::Unmodified => 's',
        }
    }

    /// Prefix of a rendered unified diff line.
    pub fn unified_prefix(&self) -> char {
        match self {
            ChangeKind::Added => '+',
            ChangeKind::Removed => '-',
            ChangeKind::Unmodified => ' ',
        }
    }
}

impl Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.shorthand())
    }
}

/// Which lines of a block to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSelection {
    All,
    First(usize),
    Last(usize),
}

/// One run of consecutive same-kind lines, as produced by a line-diffing
/// engine.
///
/// `text` spans exactly `line_count` lines delimited by newlines; a trailing
/// newline terminates the last line and does not start an empty one.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ChangeBlock {
    pub kind: ChangeKind,
    pub line_count: usize,
    pub text: String,
}

impl ChangeBlock {
    /// Materializes the selected lines of this block, in order.
    ///
    /// Selection is pure slicing on newline positions. `First(n)` and
    /// `Last(n)` expect `n <= line_count`; `n == line_count` yields every
    /// line, `First(0)` and `Last(0)` yield none.
    pub fn lines(&self, selection: LineSelection) -> Vec<LineRecord> {
        if self.line_count == 0 {
            return Vec::new();
        }

        let text = self.text.strip_suffix('\n').unwrap_or(&self.text);
        let slice = match selection {
            LineSelection::All => text,
            LineSelection::First(0) | LineSelection::Last(0) => return Vec::new(),
            LineSelection::First(n) => match text.match_indices('\n').nth(n - 1) {
                Some((at, _)) => &text[..at],
                None => text,
            },
            LineSelection::Last(n) => match text.rmatch_indices('\n').nth(n - 1) {
                Some((at, _)) => &text[at + 1..],
                None => text,
            },
        };

        slice
            .split('\n')
            .map(|line| LineRecord::new(self.kind, line.to_string()))
            .collect()
    }

    /// Kind character repeated once per line, e.g. `sss` for a three-line
    /// unmodified block.
    pub fn shorthand(&self) -> String {
        self.kind.shorthand().to_string().repeat(self.line_count)
    }

    /// One-line truncated rendering for debug output, newlines shown as
    /// commas.
    pub fn preview(&self, max_width: usize) -> String {
        let mut out = format!("{}: {}", self.line_count, self.kind.unified_prefix());
        let budget = max_width.saturating_sub(out.len());

        let text = self.text.strip_suffix('\n').unwrap_or(&self.text);
        let shown: String = text
            .chars()
            .take(budget)
            .map(|c| if c == '\n' { ',' } else { c })
            .collect();
        out.push_str(&shown);
        if text.chars().nth(budget).is_some() {
            out.push_str("...");
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn texts(block: &ChangeBlock, selection: LineSelection) -> Vec<String> {
        block
            .lines(selection)
            .into_iter()
            .map(|line| line.text)
            .collect()
    }

    #[rstest]
    #[case("1\n", LineSelection::All, vec!["1"])]
    #[case("1\n2\n3\n", LineSelection::All, vec!["1", "2", "3"])]
    #[case("1\n2\n3\n", LineSelection::First(1), vec!["1"])]
    #[case("1\n2\n3\n", LineSelection::First(2), vec!["1", "2"])]
    #[case("1\n2\n3\n", LineSelection::First(3), vec!["1", "2", "3"])]
    #[case("1\n2\n3\n", LineSelection::Last(1), vec!["3"])]
    #[case("1\n2\n3\n", LineSelection::Last(2), vec!["2", "3"])]
    #[case("1\n2\n3\n", LineSelection::Last(3), vec!["1", "2", "3"])]
    #[case("1\n2\n3\n", LineSelection::First(0), vec![])]
    #[case("1\n2\n3\n", LineSelection::Last(0), vec![])]
    fn materializes_selected_lines(
        #[case] text: &str,
        #[case] selection: LineSelection,
        #[case] expected: Vec<&str>,
    ) {
        let count = text.matches('\n').count();
        let block = ChangeBlock::new(ChangeKind::Unmodified, count, text.to_string());
        let expected: Vec<String> = expected.into_iter().map(|line| line.to_string()).collect();

        assert_eq!(texts(&block, selection), expected);
    }

    #[rstest]
    fn trailing_newline_does_not_create_an_empty_line() {
        let block = ChangeBlock::new(ChangeKind::Added, 2, "1\n2\n".to_string());

        assert_eq!(texts(&block, LineSelection::All), vec!["1", "2"]);
    }

    #[rstest]
    fn unterminated_last_line_is_kept() {
        let block = ChangeBlock::new(ChangeKind::Added, 2, "1\n2".to_string());

        assert_eq!(texts(&block, LineSelection::All), vec!["1", "2"]);
    }

    #[rstest]
    fn empty_lines_are_real_lines() {
        let block = ChangeBlock::new(ChangeKind::Removed, 3, "\n\n\n".to_string());

        assert_eq!(texts(&block, LineSelection::All), vec!["", "", ""]);
        assert_eq!(texts(&block, LineSelection::Last(2)), vec!["", ""]);
        assert_eq!(texts(&block, LineSelection::First(1)), vec![""]);
    }

    #[rstest]
    fn zero_line_block_materializes_nothing() {
        let block = ChangeBlock::new(ChangeKind::Unmodified, 0, String::new());

        assert_eq!(block.lines(LineSelection::All), Vec::new());
        assert_eq!(block.lines(LineSelection::First(0)), Vec::new());
        assert_eq!(block.shorthand(), "");
    }

    #[rstest]
    fn records_carry_the_block_kind() {
        let block = ChangeBlock::new(ChangeKind::Removed, 2, "1\n2\n".to_string());

        for line in block.lines(LineSelection::All) {
            assert_eq!(line.kind, ChangeKind::Removed);
        }
    }

    #[rstest]
    #[case(ChangeKind::Added, 3, "+++")]
    #[case(ChangeKind::Removed, 1, "-")]
    #[case(ChangeKind::Unmodified, 4, "ssss")]
    fn shorthand_repeats_the_kind_character(
        #[case] kind: ChangeKind,
        #[case] count: usize,
        #[case] expected: &str,
    ) {
        let block = ChangeBlock::new(kind, count, "x\n".repeat(count));

        assert_eq!(block.shorthand(), expected);
    }

    #[rstest]
    fn preview_truncates_and_folds_newlines() {
        let block = ChangeBlock::new(ChangeKind::Added, 3, "alpha\nbeta\ngamma\n".to_string());

        assert_eq!(block.preview(60), "3: +alpha,beta,gamma");
        assert_eq!(block.preview(12), "3: +alpha,be...");
    }
}
