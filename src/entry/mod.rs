//! Documentation entries, the output tree of a file scan.
//!
//! # Module structure
//!
//! - [`types`] - Classification enums (`EntryKind`, `VhdlSpec`) and `Argument`
//! - [`tree`] - The owning `Entry` tree, paths and traversal

mod tree;
mod types;


pub use tree::{Descendants, Entry, EntryPath};
pub use types::{Argument, EntryKind, Language, Mode, Protection, Purity, VhdlSpec};
