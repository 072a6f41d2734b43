//! The markup parser seam.

use crate::entry::Entry;

/// A prepared comment handed to a [`CommentParser`].
#[derive(Debug, Clone, Copy)]
pub struct CommentBlock<'a> {
    pub text: &'a str,
    pub file_name: &'a str,
    /// Line at which the comment block started.
    pub line: u32,
    pub brief: bool,
}

/// Result of parsing one fragment of a comment block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStep {
    /// More fragments remain after the current position.
    pub more: bool,
    /// The fragment just parsed belongs to the entry being built, which must
    /// be committed before the next fragment is parsed.
    pub needs_entry: bool,
}

/// Interprets documentation markup into an [`Entry`].
///
/// The scanner calls [`parse_block`](CommentParser::parse_block) repeatedly
/// while it returns `more`, committing the in-progress entry whenever
/// `needs_entry` is set. `position` is the byte offset into `block.text`
/// where the next fragment starts.
pub trait CommentParser {
    fn parse_block(
        &mut self,
        entry: &mut Entry,
        block: &CommentBlock<'_>,
        position: &mut usize,
    ) -> ParseStep;
}

/// Stores the raw comment text without interpreting any markup.
///
/// Short comments are appended to `brief`, long ones to `doc`; a second
/// comment for the same entry is joined to the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCommentParser;

impl CommentParser for PlainCommentParser {
    fn parse_block(
        &mut self,
        entry: &mut Entry,
        block: &CommentBlock<'_>,
        position: &mut usize,
    ) -> ParseStep {
        let text = block.text.get(*position..).unwrap_or_default().trim();
        *position = block.text.len();
        if text.is_empty() {
            return ParseStep::default();
        }

        if block.brief {
            if !entry.brief.is_empty() {
                entry.brief.push(' ');
            }
            entry.append_brief(text);
        } else {
            if !entry.doc.is_empty() {
                entry.doc.push('\n');
            }
            entry.append_doc(text);
        }
        ParseStep::default()
    }
}
