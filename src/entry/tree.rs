//! The documentation entry tree.

use smol_str::SmolStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Argument, EntryKind, Language, Protection, Purity, VhdlSpec};

/// One node of the documentation tree.
///
/// Each entry owns its children; insertion order is declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry {
    pub name: SmolStr,
    pub kind: EntryKind,
    /// `None` until a construct classifies the entry.
    pub spec: Option<VhdlSpec>,
    pub file_name: String,
    pub language: Language,
    pub start_line: u32,
    pub body_line: u32,
    /// Line of the long-form documentation, if any.
    pub doc_line: Option<u32>,
    /// Line of the short-form documentation, if any.
    pub brief_line: Option<u32>,
    pub brief: String,
    pub doc: String,
    pub arguments: Vec<Argument>,
    /// Free-form signature text (process sensitivity list, parameter names).
    pub args: String,
    /// Referenced type of an object declaration.
    pub type_name: String,
    pub purity: Option<Purity>,
    pub protection: Protection,
    /// The documentation carried a PlantUML marker.
    pub plantuml: bool,
    children: Vec<Entry>,
}

/// Child indices leading from a root to one of its descendants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EntryPath(Vec<usize>);

impl EntryPath {
    /// The path of the root itself.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entry for a construct with its default kind.
    pub fn with_spec(name: &str, spec: VhdlSpec, line: u32) -> Self {
        Self {
            name: SmolStr::new(name),
            kind: spec.default_kind(),
            spec: Some(spec),
            start_line: line,
            body_line: line,
            ..Self::default()
        }
    }

    pub fn is_compound(&self) -> bool {
        self.spec.is_some_and(VhdlSpec::is_compound)
    }

    pub fn children(&self) -> &[Entry] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Entry> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.children.get_mut(index)
    }

    /// Append a child and return its index.
    pub fn push_child(&mut self, child: Entry) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    pub fn get(&self, path: &EntryPath) -> Option<&Entry> {
        path.indices()
            .iter()
            .try_fold(self, |entry, &index| entry.children.get(index))
    }

    pub fn get_mut(&mut self, path: &EntryPath) -> Option<&mut Entry> {
        path.indices()
            .iter()
            .try_fold(self, |entry, &index| entry.children.get_mut(index))
    }

    pub fn append_brief(&mut self, text: &str) {
        self.brief.push_str(text);
    }

    pub fn append_doc(&mut self, text: &str) {
        self.doc.push_str(text);
    }

    /// Depth-first, pre-order walk over every descendant (the entry itself
    /// is not included).
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Apply `f` to every descendant whose body starts at `line`, in
    /// depth-first order. Returns the number of matches.
    pub fn for_each_at_body_line(&mut self, line: u32, f: &mut impl FnMut(&mut Entry)) -> usize {
        let mut matched = 0;
        for child in &mut self.children {
            if child.body_line == line {
                f(child);
                matched += 1;
            }
            matched += child.for_each_at_body_line(line, f);
        }
        matched
    }

    /// Number of entries below this one.
    pub fn descendant_count(&self) -> usize {
        self.descendants().count()
    }
}

/// Iterator returned by [`Entry::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Entry>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        self.stack.extend(entry.children.iter().rev());
        Some(entry)
    }
}
