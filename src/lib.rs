//! Unified-diff formatting for pre-computed line changes.
//!
//! The input is an ordered sequence of [`ChangeBlock`]s as produced by a
//! line-diffing engine, with adjacent blocks never sharing a kind. This
//! crate groups them into [`Hunk`]s bounded by a configurable amount of
//! unchanged context, computes the 1-based `@@` header offsets for both
//! sides of the comparison, and renders the result in unified diff format,
//! byte-compatible with `diff -U<n>`.
//!
//! ```
//! use unihunk::{ChangeBlock, ChangeKind, FormatOptions, format_lines};
//!
//! let blocks = vec![
//!     ChangeBlock::new(ChangeKind::Unmodified, 1, "line 1\n".to_string()),
//!     ChangeBlock::new(ChangeKind::Removed, 1, "line 2\n".to_string()),
//!     ChangeBlock::new(ChangeKind::Unmodified, 1, "line 3\n".to_string()),
//! ];
//!
//! let options = FormatOptions {
//!     context: 2,
//!     ..FormatOptions::default()
//! };
//! let text = format_lines(&blocks, &options)?;
//! assert_eq!(text, "--- a\n+++ b\n@@ -1,3 +1,2 @@\n line 1\n-line 2\n line 3");
//! # Ok::<(), unihunk::FormatError>(())
//! ```
//!
//! An empty change sequence (identical inputs upstream) formats to an empty
//! string.

pub mod artifacts;
pub mod domain;

pub use artifacts::assembler::HunkAssembler;
pub use artifacts::error::FormatError;
pub use artifacts::formatter::{Document, FormatOptions, format_lines};
pub use domain::change_block::{ChangeBlock, ChangeKind, LineSelection};
pub use domain::hunk::Hunk;
pub use domain::line_record::LineRecord;
