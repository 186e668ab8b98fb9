use crate::domain::change_block::ChangeKind;
use thiserror::Error;

/// Structural problems in the incoming change sequence.
///
/// These indicate a contract violation by the upstream diffing engine, not
/// a recoverable runtime condition; nothing is rendered when one is
/// returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("repeating change kinds are not handled: {kind} (at {first} and {second})")]
    RepeatedKind {
        kind: ChangeKind,
        first: usize,
        second: usize,
    },
}
