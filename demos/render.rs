use anyhow::Result;
use unihunk::{ChangeBlock, ChangeKind, FormatOptions, format_lines};

// The change sequence a line differ produces when comparing
//   a quick / brown / fox / jumped / over / the / lazy / dog
// against
//   a quick / brown / cat / jumped / at / the / not-so-lazy / fox
fn main() -> Result<()> {
    let blocks = vec![
        ChangeBlock::new(ChangeKind::Unmodified, 2, "a quick\nbrown\n".to_string()),
        ChangeBlock::new(ChangeKind::Removed, 1, "fox\n".to_string()),
        ChangeBlock::new(ChangeKind::Added, 1, "cat\n".to_string()),
        ChangeBlock::new(ChangeKind::Unmodified, 1, "jumped\n".to_string()),
        ChangeBlock::new(ChangeKind::Removed, 1, "over\n".to_string()),
        ChangeBlock::new(ChangeKind::Added, 1, "at\n".to_string()),
        ChangeBlock::new(ChangeKind::Unmodified, 1, "the\n".to_string()),
        ChangeBlock::new(ChangeKind::Removed, 2, "lazy\ndog\n".to_string()),
        ChangeBlock::new(ChangeKind::Added, 2, "not-so-lazy\nfox\n".to_string()),
    ];

    let options = FormatOptions {
        context: 2,
        ..FormatOptions::default()
    };
    println!("{}", format_lines(&blocks, &options)?);

    Ok(())
}
