//! Scan context holding the scope pointers and in-progress entry of one file scan.

use std::mem;

use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::base::LabelStack;
use crate::comment::{CommentParser, PendingComment, PlainCommentParser};
use crate::config::ScanConfig;
use crate::entry::{Entry, EntryPath, Language, VhdlSpec};

use super::configuration::ConfigNode;
use super::deferred::{DeferredClauses, InstantiationRecord};

/// Which part of a declaration the grammar engine is inside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeclSection {
    /// Ordinary declarative region.
    #[default]
    Body,
    /// A `generic ( ... )` clause. Everything declared here is a generic.
    Generic,
    /// A `port ( ... )` clause.
    Port,
    /// A subprogram parameter list.
    Parameter,
}

/// Subprogram whose body is currently being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SubprogramKind {
    Function,
    Procedure,
    Process,
}

/// Everything a finished file scan produced.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileScan {
    pub file_name: String,
    pub root: Entry,
    pub config_nodes: Vec<ConfigNode>,
    pub instantiations: Vec<InstantiationRecord>,
}

/// State of one in-flight file scan.
///
/// Compound entries always sit directly under the root, so the scope
/// pointers are indices into the root's children. All state is reset by
/// [`begin_file`](ScanContext::begin_file) and again by
/// [`end_file`](ScanContext::end_file); nothing survives from one file to
/// the next.
pub struct ScanContext {
    pub(super) config: ScanConfig,
    pub(super) parser: Box<dyn CommentParser>,
    pub(super) file_name: String,
    pub(super) root: Entry,
    /// The entry under construction. Moved into the tree on commit.
    pub(super) current: Entry,
    /// Generation of `current`; bumped whenever a fresh builder replaces it.
    pub(super) current_id: u64,
    /// Generation of the builder that received the last comment.
    pub(super) last_documented: Option<u64>,
    pub(super) last_compound: Option<usize>,
    pub(super) last_entity: Option<usize>,
    pub(super) current_compound: Option<usize>,
    pub(super) previous: Option<EntryPath>,
    pub(super) pending: Option<PendingComment>,
    pub(super) section: DeclSection,
    pub(super) active_body: Option<SubprogramKind>,
    pub(super) pseudo_variable: Option<SmolStr>,
    pub(super) configuration_entity: SmolStr,
    pub(super) config_labels: LabelStack,
    pub(super) config_nodes: Vec<ConfigNode>,
    pub(super) deferred: DeferredClauses,
    pub(super) instantiations: Vec<InstantiationRecord>,
}

impl Default for ScanContext {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

impl ScanContext {
    /// A context that stores comments verbatim.
    pub fn new(config: ScanConfig) -> Self {
        Self::with_parser(config, Box::new(PlainCommentParser))
    }

    pub fn with_parser(config: ScanConfig, parser: Box<dyn CommentParser>) -> Self {
        Self {
            config,
            parser,
            file_name: String::new(),
            root: Entry::new(),
            current: Entry::new(),
            current_id: 0,
            last_documented: None,
            last_compound: None,
            last_entity: None,
            current_compound: None,
            previous: None,
            pending: None,
            section: DeclSection::Body,
            active_body: None,
            pseudo_variable: None,
            configuration_entity: SmolStr::default(),
            config_labels: LabelStack::new(),
            config_nodes: Vec::new(),
            deferred: DeferredClauses::default(),
            instantiations: Vec::new(),
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Start scanning `file_name`, building into `root`.
    ///
    /// An empty file name marks an inline fragment: its deferred context
    /// clauses are never resolved.
    pub fn begin_file(&mut self, file_name: &str, root: Entry) {
        self.reset();
        self.file_name = file_name.to_string();
        self.root = root;
        self.init_current();
        debug!(file = file_name, "begin VHDL scan");
    }

    /// Finish the scan, resolve deferred context clauses and hand back the
    /// finished tree with the collected side tables.
    pub fn end_file(&mut self) -> FileScan {
        if !self.is_inline() {
            let deferred = mem::take(&mut self.deferred);
            deferred.resolve(&mut self.root, &self.config);
        }

        let scan = FileScan {
            file_name: mem::take(&mut self.file_name),
            root: mem::take(&mut self.root),
            config_nodes: mem::take(&mut self.config_nodes),
            instantiations: mem::take(&mut self.instantiations),
        };
        debug!(
            file = scan.file_name.as_str(),
            entries = scan.root.descendant_count(),
            config_nodes = scan.config_nodes.len(),
            instantiations = scan.instantiations.len(),
            "end VHDL scan"
        );
        self.reset();
        scan
    }

    fn reset(&mut self) {
        self.file_name.clear();
        self.root = Entry::new();
        self.current = Entry::new();
        self.current_id = 0;
        self.last_documented = None;
        self.last_compound = None;
        self.last_entity = None;
        self.current_compound = None;
        self.previous = None;
        self.pending = None;
        self.section = DeclSection::Body;
        self.active_body = None;
        self.pseudo_variable = None;
        self.configuration_entity = SmolStr::default();
        self.config_labels.clear();
        self.config_nodes.clear();
        self.deferred = DeferredClauses::default();
        self.instantiations.clear();
    }

    pub fn is_inline(&self) -> bool {
        self.file_name.is_empty()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    // ========================================================================
    // SCOPE TRACKING
    // ========================================================================

    /// Move the in-progress entry into the tree and start a fresh one.
    ///
    /// Compounds go directly under the root. Everything else goes under the
    /// last compound, else the last entity, else the root.
    pub fn commit(&mut self) -> EntryPath {
        let entry = mem::take(&mut self.current);
        let path = self.attach(entry);
        self.previous = Some(path.clone());
        self.start_fresh();
        path
    }

    fn attach(&mut self, entry: Entry) -> EntryPath {
        let spec = entry.spec;
        if let Some(spec) = spec.filter(|s| s.is_compound()) {
            let index = self.root.push_child(entry);
            match spec {
                VhdlSpec::Entity => {
                    self.last_entity = Some(index);
                    self.last_compound = None;
                }
                _ => self.last_compound = Some(index),
            }
            self.current_compound = Some(index);
            trace!(index, %spec, "compound attached to root");
            return EntryPath::root().child(index);
        }

        for scope in [self.last_compound, self.last_entity].into_iter().flatten() {
            if let Some(parent) = self.root.child_mut(scope) {
                let index = parent.push_child(entry);
                trace!(scope, index, "entry attached to enclosing scope");
                return EntryPath::root().child(scope).child(index);
            }
        }

        let index = self.root.push_child(entry);
        trace!(index, "entry attached to root");
        EntryPath::root().child(index)
    }

    /// Replace the in-progress entry with a fresh, initialized one.
    pub(super) fn start_fresh(&mut self) {
        self.current = Entry::new();
        self.current_id += 1;
        self.init_current();
    }

    /// Stamp the in-progress entry and deliver any comment waiting for it.
    fn init_current(&mut self) {
        self.current.file_name = self.file_name.clone();
        self.current.language = Language::Vhdl;
        self.flush_pending();
    }

    /// The entry under construction.
    pub fn current(&self) -> &Entry {
        &self.current
    }

    /// Mutable access for fields the grammar engine fills in directly
    /// (return types, extra signature text).
    pub fn current_mut(&mut self) -> &mut Entry {
        &mut self.current
    }

    /// The most recently committed entry.
    pub fn previous(&self) -> Option<&Entry> {
        self.previous.as_ref().and_then(|p| self.root.get(p))
    }

    pub fn root(&self) -> &Entry {
        &self.root
    }

    pub fn last_compound(&self) -> Option<&Entry> {
        self.last_compound.and_then(|i| self.root.child(i))
    }

    pub fn last_entity(&self) -> Option<&Entry> {
        self.last_entity.and_then(|i| self.root.child(i))
    }

    /// The compound most recently opened, whatever its kind.
    pub fn current_compound(&self) -> Option<&Entry> {
        self.current_compound.and_then(|i| self.root.child(i))
    }

    /// The last entity if one was declared, else the last compound.
    pub fn enclosing_compound(&self) -> Option<&Entry> {
        self.last_entity().or_else(|| self.last_compound())
    }

    pub(super) fn has_open_scope(&self) -> bool {
        self.last_compound.is_some() || self.last_entity.is_some()
    }

    // ========================================================================
    // GRAMMAR STATE
    // ========================================================================

    pub fn set_section(&mut self, section: DeclSection) {
        self.section = section;
    }

    pub fn section(&self) -> DeclSection {
        self.section
    }

    /// Enter a subprogram body; object declarations are ignored until
    /// [`leave_body`](ScanContext::leave_body).
    pub fn enter_body(&mut self, kind: SubprogramKind) {
        self.active_body = Some(kind);
    }

    pub fn leave_body(&mut self) {
        self.active_body = None;
    }

    pub fn active_body(&self) -> Option<SubprogramKind> {
        self.active_body
    }

    /// Remember a name announced while scanning a prototype; it names the
    /// next entry synthesized from a comment block.
    pub fn parse_prototype(&mut self, name: &str) {
        self.pseudo_variable = Some(SmolStr::new(name.trim()));
    }
}
