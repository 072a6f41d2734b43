//! Event-stream driver.
//!
//! [`Scanner`] replays the events a grammar engine emits for one or more
//! files, enforcing the `begin_file`/`end_file` bracket and collecting one
//! [`FileScan`] per file in scan order.

use indexmap::IndexMap;
use tracing::debug;

use crate::comment::CommentParser;
use crate::config::ScanConfig;
use crate::entry::Entry;
use crate::error::{Result, ScanError};

use super::configuration::ConfigBlock;
use super::construct::{Declaration, InterfaceElement, Subprogram};
use super::context::{DeclSection, FileScan, ScanContext, SubprogramKind};
use super::deferred::Instantiation;

/// One semantic event from the grammar engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum ScanEvent {
    BeginFile { name: String },
    EndFile,
    Declaration(Declaration),
    Subprogram { header: Subprogram, line: u32 },
    Interface(InterfaceElement),
    Commit,
    Section { section: DeclSection },
    EnterBody { kind: SubprogramKind },
    LeaveBody,
    Comment { text: String, line: u32, brief: bool },
    TrailingComment { text: String, line: u32 },
    Prototype { name: String },
    BeginConfiguration { entity: String },
    ConfigBlock(ConfigBlock),
    Instantiation(Instantiation),
}

impl ScanEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ScanEvent::BeginFile { .. } => "begin_file",
            ScanEvent::EndFile => "end_file",
            ScanEvent::Declaration(_) => "declaration",
            ScanEvent::Subprogram { .. } => "subprogram",
            ScanEvent::Interface(_) => "interface",
            ScanEvent::Commit => "commit",
            ScanEvent::Section { .. } => "section",
            ScanEvent::EnterBody { .. } => "enter_body",
            ScanEvent::LeaveBody => "leave_body",
            ScanEvent::Comment { .. } => "comment",
            ScanEvent::TrailingComment { .. } => "trailing_comment",
            ScanEvent::Prototype { .. } => "prototype",
            ScanEvent::BeginConfiguration { .. } => "begin_configuration",
            ScanEvent::ConfigBlock(_) => "config_block",
            ScanEvent::Instantiation(_) => "instantiation",
        }
    }
}

/// Replays event streams file by file.
pub struct Scanner {
    context: ScanContext,
    open_file: Option<String>,
    files: IndexMap<String, FileScan>,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self::from_context(ScanContext::new(config))
    }

    pub fn with_parser(config: ScanConfig, parser: Box<dyn CommentParser>) -> Self {
        Self::from_context(ScanContext::with_parser(config, parser))
    }

    fn from_context(context: ScanContext) -> Self {
        Self {
            context,
            open_file: None,
            files: IndexMap::new(),
        }
    }

    /// The context of the file being scanned.
    pub fn context(&self) -> &ScanContext {
        &self.context
    }

    pub fn open_file(&self) -> Option<&str> {
        self.open_file.as_deref()
    }

    /// Apply one event.
    pub fn handle(&mut self, event: ScanEvent) -> Result<()> {
        match event {
            ScanEvent::BeginFile { name } => {
                if let Some(open) = &self.open_file {
                    return Err(ScanError::file_already_open(open.as_str(), name));
                }
                self.context.begin_file(&name, Entry::new());
                self.open_file = Some(name);
                return Ok(());
            }
            ScanEvent::EndFile => {
                if self.open_file.take().is_none() {
                    return Err(ScanError::no_open_file("end_file"));
                }
                let scan = self.context.end_file();
                // A re-scanned file replaces its earlier result in place.
                self.files.insert(scan.file_name.clone(), scan);
                return Ok(());
            }
            _ if self.open_file.is_none() => {
                return Err(ScanError::no_open_file(event.name()));
            }
            _ => {}
        }

        let ctx = &mut self.context;
        match event {
            ScanEvent::Declaration(decl) => ctx.add_declaration(&decl),
            ScanEvent::Subprogram { header, line } => ctx.create_function(&header, line),
            ScanEvent::Interface(element) => ctx.add_interface_element(&element),
            ScanEvent::Commit => {
                ctx.commit();
            }
            ScanEvent::Section { section } => ctx.set_section(section),
            ScanEvent::EnterBody { kind } => ctx.enter_body(kind),
            ScanEvent::LeaveBody => ctx.leave_body(),
            ScanEvent::Comment { text, line, brief } => ctx.comment(&text, line, brief),
            ScanEvent::TrailingComment { text, line } => ctx.trailing_comment(&text, line),
            ScanEvent::Prototype { name } => ctx.parse_prototype(&name),
            ScanEvent::BeginConfiguration { entity } => ctx.begin_configuration(&entity),
            ScanEvent::ConfigBlock(block) => ctx.add_config_block(&block),
            ScanEvent::Instantiation(inst) => ctx.add_instantiation(&inst),
            ScanEvent::BeginFile { .. } | ScanEvent::EndFile => {}
        }
        Ok(())
    }

    /// Apply every event of `events` in order.
    pub fn run<I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = ScanEvent>,
    {
        for event in events {
            self.handle(event)?;
        }
        Ok(())
    }

    /// Decode a JSON array of events and apply them.
    #[cfg(feature = "serde")]
    pub fn run_json(&mut self, json: &str) -> Result<()> {
        let events: Vec<ScanEvent> = serde_json::from_str(json)?;
        self.run(events)
    }

    /// Results of every completed file, in scan order.
    pub fn files(&self) -> &IndexMap<String, FileScan> {
        &self.files
    }

    /// Consume the scanner, failing if a file is still open.
    pub fn finish(self) -> Result<IndexMap<String, FileScan>> {
        if let Some(open) = self.open_file {
            return Err(ScanError::UnterminatedFile(open));
        }
        debug!(files = self.files.len(), "scanner finished");
        Ok(self.files)
    }
}

/// Scan a single file's events into `root`.
///
/// The file is bracketed here, so `events` must not contain lifecycle
/// events: a nested `BeginFile` or an `EndFile` is rejected.
pub fn scan_file<I>(config: ScanConfig, file_name: &str, root: Entry, events: I) -> Result<FileScan>
where
    I: IntoIterator<Item = ScanEvent>,
{
    let mut scanner = Scanner::new(config);
    scanner.context.begin_file(file_name, root);
    scanner.open_file = Some(file_name.to_string());
    for event in events {
        if event == ScanEvent::EndFile {
            return Err(ScanError::no_open_file(event.name()));
        }
        scanner.handle(event)?;
    }
    scanner.open_file = None;
    Ok(scanner.context.end_file())
}
