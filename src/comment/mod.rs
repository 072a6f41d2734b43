//! Documentation comment plumbing.
//!
//! The markup inside a comment (`@param`, `@brief`, ...) is interpreted by a
//! [`CommentParser`] supplied by the caller. This module only defines that
//! seam, the text preparation applied before any parser sees a comment, and
//! the one-slot buffer used while a comment waits for its entry.

mod parser;

pub use parser::{CommentBlock, CommentParser, ParseStep, PlainCommentParser};

use crate::base::constants::{DOC_COMMENT_PREFIX, PLANTUML_MARKER};

/// A comment that arrived before the entry it documents was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingComment {
    pub text: String,
    pub line: u32,
    pub brief: bool,
}

/// Strip every `--!` marker and surrounding whitespace.
pub fn prepare_comment(text: &str) -> String {
    text.replace(DOC_COMMENT_PREFIX, "").trim().to_string()
}

/// Remove the first PlantUML marker from `text`, reporting whether one was found.
pub fn take_plantuml_marker(text: &mut String) -> bool {
    match text.find(PLANTUML_MARKER) {
        Some(pos) => {
            text.replace_range(pos..pos + PLANTUML_MARKER.len(), "");
            true
        }
        None => false,
    }
}
