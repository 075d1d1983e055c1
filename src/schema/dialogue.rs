use serde::{Deserialize, Serialize};

use super::speaker::DialogueLine;

/// An ordered, append-only sequence of dialogue lines.
///
/// Serializes as a plain JSON array of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogueBlock {
    lines: Vec<DialogueLine>,
}

impl DialogueBlock {
    pub fn lines(&self) -> &[DialogueLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub(crate) fn push(&mut self, line: DialogueLine) {
        self.lines.push(line);
    }

    pub(crate) fn extend(&mut self, lines: impl IntoIterator<Item = DialogueLine>) {
        self.lines.extend(lines);
    }
}

impl<'a> IntoIterator for &'a DialogueBlock {
    type Item = &'a DialogueLine;
    type IntoIter = std::slice::Iter<'a, DialogueLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
