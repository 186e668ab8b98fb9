use crate::domain::change_block::ChangeKind;
use derive_new::new;
use std::fmt::Display;

/// A single line of change, without its line break.
///
/// Produced transiently from a [`ChangeBlock`](crate::ChangeBlock) and owned
/// by the hunk that collects it.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LineRecord {
    pub kind: ChangeKind,
    pub text: String,
}

impl LineRecord {
    pub fn unified(&self) -> String {
        match self.kind {
            ChangeKind::Added => format!("+{}", self.text),
            ChangeKind::Removed => format!("-{}", self.text),
            ChangeKind::Unmodified => format!(" {}", self.text),
        }
    }
}

impl Display for LineRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unified())
    }
}
