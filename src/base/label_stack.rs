//! Label stack for the nesting path of configuration blocks.

use smol_str::SmolStr;

use super::constants::LABEL_SEPARATOR;

/// A stack of labels rendered as `|outer|inner|leaf`.
///
/// Every pushed segment is prefixed with [`LABEL_SEPARATOR`], so the joined
/// path of a non-empty stack always starts with the separator and an empty
/// stack joins to the empty string. A pushed label that itself contains the
/// separator is stored as several segments, so [`pop`](LabelStack::pop)
/// always cuts the path back to its last separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelStack {
    segments: Vec<SmolStr>,
}

impl LabelStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: &str) {
        self.segments.extend(label.split(LABEL_SEPARATOR).map(SmolStr::new));
    }

    /// Remove the innermost segment. Popping an empty stack is a no-op.
    pub fn pop(&mut self) -> Option<SmolStr> {
        self.segments.pop()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// The joined path, e.g. `|cfg|u1`.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push(LABEL_SEPARATOR);
            path.push_str(segment);
        }
        path
    }

    /// The joined path folded to lower case.
    pub fn lower_path(&self) -> String {
        self.path().to_lowercase()
    }
}

impl std::fmt::Display for LabelStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
