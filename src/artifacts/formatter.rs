use crate::artifacts::assembler::HunkAssembler;
use crate::artifacts::error::FormatError;
use crate::domain::change_block::ChangeBlock;
use crate::domain::hunk::Hunk;
use std::fmt::Display;

/// Presentation options for a formatted comparison.
///
/// `pre_context` and `post_context` override the shared `context`
/// independently when set. The labels are printed verbatim on the
/// `---`/`+++` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub a_name: String,
    pub b_name: String,
    pub context: usize,
    pub pre_context: Option<usize>,
    pub post_context: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            a_name: "a".to_string(),
            b_name: "b".to_string(),
            context: 0,
            pre_context: None,
            post_context: None,
        }
    }
}

impl FormatOptions {
    /// Context window actually applied, as (pre, post).
    fn context_budget(&self) -> (usize, usize) {
        (
            self.pre_context.unwrap_or(self.context),
            self.post_context.unwrap_or(self.context),
        )
    }
}

/// A fully assembled comparison: two display labels and the hunks between
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    a_name: String,
    b_name: String,
    hunks: Vec<Hunk>,
}

impl Document {
    /// Validates the change sequence and assembles its hunks.
    ///
    /// Adjacent blocks sharing a kind violate the upstream diffing contract
    /// and fail the whole call; nothing is partially rendered.
    pub fn assemble(
        blocks: &[ChangeBlock],
        options: &FormatOptions,
    ) -> Result<Self, FormatError> {
        check_alternation(blocks)?;

        let (pre_context, post_context) = options.context_budget();
        let hunks = HunkAssembler::new(pre_context, post_context).assemble(blocks);

        Ok(Document {
            a_name: options.a_name.clone(),
            b_name: options.b_name.clone(),
            hunks,
        })
    }

    pub fn hunks(&self) -> &[Hunk] {
        &self.hunks
    }

    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// The complete unified diff text, or an empty string when there are no
    /// hunks. An empty string is the no-differences sentinel, never a
    /// zero-hunk document with headers.
    pub fn unified(&self) -> String {
        if self.hunks.is_empty() {
            return String::new();
        }

        let mut out = vec![
            format!("--- {}", self.a_name),
            format!("+++ {}", self.b_name),
        ];
        out.extend(self.hunks.iter().map(Hunk::unified));
        out.join("\n")
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unified())
    }
}

/// Renders the change sequence as unified diff text.
pub fn format_lines(
    blocks: &[ChangeBlock],
    options: &FormatOptions,
) -> Result<String, FormatError> {
    Ok(Document::assemble(blocks, options)?.unified())
}

fn check_alternation(blocks: &[ChangeBlock]) -> Result<(), FormatError> {
    for (i, pair) in blocks.windows(2).enumerate() {
        if pair[0].kind == pair[1].kind {
            return Err(FormatError::RepeatedKind {
                kind: pair[1].kind,
                first: i,
                second: i + 1,
            });
        }
    }

    Ok(())
}
