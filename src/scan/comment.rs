//! Comment association: attaching documentation text to entries.

use tracing::trace;

use crate::comment::{prepare_comment, take_plantuml_marker, CommentBlock, PendingComment};
use crate::entry::EntryKind;

use super::context::ScanContext;

impl ScanContext {
    /// Associate a documentation comment that ended at `line`.
    ///
    /// A comment on the line of an already committed entry documents that
    /// entry. Otherwise it documents the in-progress entry, unless that
    /// entry already received a comment: then it waits in the pending slot
    /// for the next entry.
    pub fn comment(&mut self, text: &str, line: u32, brief: bool) {
        let mut text = prepare_comment(text);
        if text.is_empty() {
            return;
        }

        if self.attach_trailing(&text, line) > 0 {
            return;
        }

        if self.last_documented == Some(self.current_id) {
            trace!(line, brief, "comment deferred to next entry");
            self.pending = Some(PendingComment { text, line, brief });
            return;
        }
        self.last_documented = Some(self.current_id);

        if brief {
            self.current.brief_line = Some(line);
        } else {
            self.current.doc_line = Some(line);
        }
        if take_plantuml_marker(&mut text) {
            self.current.plantuml = true;
        }

        self.parse_into_current(&text, line, brief);
    }

    /// Attach a short comment that trails a statement on `line`.
    ///
    /// Every committed entry whose body starts on that line receives the
    /// text. If none does, the comment is dropped.
    pub fn trailing_comment(&mut self, text: &str, line: u32) {
        let text = prepare_comment(text);
        if text.is_empty() {
            return;
        }
        if self.attach_trailing(&text, line) == 0 {
            trace!(line, "trailing comment matches no entry");
        }
    }

    fn attach_trailing(&mut self, text: &str, line: u32) -> usize {
        let matched = self.root.for_each_at_body_line(line, &mut |entry| {
            entry.brief_line = Some(line);
            entry.append_brief(text);
        });
        if matched > 0 {
            trace!(line, matched, "trailing comment attached");
        }
        matched
    }

    /// Run the markup parser over `text`, committing whenever it asks for
    /// a new entry.
    fn parse_into_current(&mut self, text: &str, line: u32, brief: bool) {
        let file_name = self.file_name.clone();
        let block = CommentBlock {
            text,
            file_name: &file_name,
            line,
            brief,
        };

        let mut position = 0;
        loop {
            let step = self
                .parser
                .parse_block(&mut self.current, &block, &mut position);
            if !step.more {
                if step.needs_entry {
                    if let Some(name) = self.pseudo_variable.take() {
                        self.current.name = name;
                        self.current.kind = EntryKind::VariableDoc;
                    }
                    self.commit();
                }
                break;
            }
            if step.needs_entry {
                self.commit();
            }
        }
    }

    /// Deliver the pending comment, if any, to the in-progress entry.
    pub(super) fn flush_pending(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        // The flushed comment must not be deferred again.
        self.last_documented = None;
        trace!(line = pending.line, "flushing pending comment");
        self.comment(&pending.text, pending.line, pending.brief);
    }

    pub fn pending_comment(&self) -> Option<&PendingComment> {
        self.pending.as_ref()
    }
}
