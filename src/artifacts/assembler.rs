use crate::domain::change_block::{ChangeBlock, ChangeKind, LineSelection};
use crate::domain::hunk::Hunk;
use crate::domain::line_record::LineRecord;
use derive_new::new;

/// Groups a flat change sequence into hunks bounded by unchanged context.
///
/// `pre_context`/`post_context` are the unchanged lines kept immediately
/// before/after a change run. An unmodified gap no larger than their sum is
/// absorbed whole, merging the surrounding changes into one hunk; a larger
/// gap closes the open hunk and its excess is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct HunkAssembler {
    pre_context: usize,
    post_context: usize,
}

impl HunkAssembler {
    /// Single forward pass over the blocks. The first unmodified block owes
    /// no trailing context and the last owes no leading context.
    pub fn assemble(&self, blocks: &[ChangeBlock]) -> Vec<Hunk> {
        let mut open = OpenHunk::default();
        let last = blocks.len().saturating_sub(1);

        for (i, block) in blocks.iter().enumerate() {
            match block.kind {
                ChangeKind::Added | ChangeKind::Removed => {
                    open.push(block.lines(LineSelection::All));
                }
                ChangeKind::Unmodified => {
                    let ctx_after = if i > 0 { self.post_context } else { 0 };
                    let ctx_before = if i < last { self.pre_context } else { 0 };
                    let skip = block.line_count.saturating_sub(ctx_after + ctx_before);

                    if skip > 0 {
                        open.push(block.lines(LineSelection::First(ctx_after)));
                        open.close();
                        open.push(block.lines(LineSelection::Last(ctx_before)));
                        open.skip(skip);
                    } else {
                        open.push(block.lines(LineSelection::All));
                    }
                }
            }
        }

        open.close();
        open.hunks
    }
}

/// Accumulator for the hunk under construction.
#[derive(Debug, Default)]
struct OpenHunk {
    hunks: Vec<Hunk>,
    pending: Vec<LineRecord>,
    skipped: usize,
}

impl OpenHunk {
    fn push(&mut self, lines: Vec<LineRecord>) {
        self.pending.extend(lines);
    }

    fn skip(&mut self, count: usize) {
        self.skipped += count;
    }

    /// Emits the pending lines as a hunk. An empty accumulator emits
    /// nothing and keeps the skipped count, so offsets stay correct across
    /// context-only runs.
    fn close(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let mut a_offset = self.skipped;
        let mut b_offset = self.skipped;
        if let Some(prev) = self.hunks.last() {
            a_offset += prev.a_offset() + prev.a_len();
            b_offset += prev.b_offset() + prev.b_len();
        }

        let lines = std::mem::take(&mut self.pending);
        self.hunks.push(Hunk::new(a_offset, b_offset, lines));
        self.skipped = 0;
    }
}
