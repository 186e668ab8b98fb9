#![allow(dead_code)]

use rstest::fixture;
use unihunk::{ChangeBlock, ChangeKind};

/// `line <start>` through `line <start + count - 1>`, newline-terminated.
pub fn numbered_lines(start: usize, count: usize) -> String {
    (start..start + count).map(|i| format!("line {i}\n")).collect()
}

pub fn unmodified(start: usize, count: usize) -> ChangeBlock {
    ChangeBlock::new(ChangeKind::Unmodified, count, numbered_lines(start, count))
}

pub fn removed(start: usize, count: usize) -> ChangeBlock {
    ChangeBlock::new(ChangeKind::Removed, count, numbered_lines(start, count))
}

pub fn added(start: usize, count: usize) -> ChangeBlock {
    ChangeBlock::new(ChangeKind::Added, count, numbered_lines(start, count))
}

/// Comparison of a 12-line file against a copy missing line 2, lines 5-6
/// and lines 10-12.
#[fixture]
pub fn drop_lines_blocks() -> Vec<ChangeBlock> {
    vec![
        unmodified(1, 1),
        removed(2, 1),
        unmodified(3, 2),
        removed(5, 2),
        unmodified(7, 3),
        removed(10, 3),
    ]
}

/// The same comparison with the sides swapped.
#[fixture]
pub fn insert_lines_blocks() -> Vec<ChangeBlock> {
    vec![
        unmodified(1, 1),
        added(2, 1),
        unmodified(3, 2),
        added(5, 2),
        unmodified(7, 3),
        added(10, 3),
    ]
}

/// Comparison of a 12-line file against a copy with every third line
/// rewritten in braces.
#[fixture]
pub fn replace_every_third_blocks() -> Vec<ChangeBlock> {
    let mut blocks = Vec::new();
    for start in [1usize, 4, 7, 10] {
        blocks.push(removed(start, 1));
        blocks.push(ChangeBlock::new(
            ChangeKind::Added,
            1,
            format!("{{line {start}}}\n"),
        ));
        blocks.push(unmodified(start + 1, 2));
    }
    blocks
}
