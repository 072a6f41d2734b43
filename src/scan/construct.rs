//! Construct events: declarations, subprogram headers and interface elements.

use std::mem;

use smol_str::SmolStr;
use tracing::trace;

use crate::base::{remove_whitespace, split_name_list};
use crate::entry::{Argument, EntryKind, Mode, Protection, Purity, VhdlSpec};

use super::context::{DeclSection, ScanContext};

/// A type or object declaration. `names` may list several objects
/// (`a, b, c : integer`), each of which becomes its own entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    pub names: String,
    pub line: u32,
    pub kind: EntryKind,
    pub spec: VhdlSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub args: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub type_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub protection: Protection,
}

impl Declaration {
    pub fn new(names: &str, spec: VhdlSpec, line: u32) -> Self {
        Self {
            names: names.to_string(),
            line,
            kind: spec.default_kind(),
            spec,
            args: String::new(),
            type_name: String::new(),
            protection: Protection::Public,
        }
    }

    pub fn with_type(mut self, type_name: &str) -> Self {
        self.type_name = type_name.to_string();
        self
    }

    pub fn with_args(mut self, args: &str) -> Self {
        self.args = args.to_string();
        self
    }

    pub fn with_kind(mut self, kind: EntryKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_protection(mut self, protection: Protection) -> Self {
        self.protection = protection;
        self
    }
}

/// Header of a function, procedure or process.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Subprogram {
    Function {
        name: String,
        purity: Option<Purity>,
    },
    Procedure {
        name: String,
    },
    Process {
        label: String,
        /// Comma-joined sensitivity list.
        sensitivity: String,
    },
}

/// One element of a port, generic or parameter list: `names : [mode] type [:= default]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InterfaceElement {
    pub names: String,
    pub mode: Option<Mode>,
    pub type_name: String,
    pub default_value: Option<String>,
}

impl ScanContext {
    /// Build and commit one entry per name in a type/object declaration.
    ///
    /// Declarations inside a subprogram body are local and produce nothing.
    /// Context clauses seen before any entity or compound are held back and
    /// placed when the file ends.
    pub fn add_declaration(&mut self, decl: &Declaration) {
        if let Some(body) = self.active_body {
            trace!(names = decl.names.as_str(), ?body, "declaration inside subprogram body ignored");
            return;
        }

        let spec = match self.section {
            DeclSection::Generic => VhdlSpec::Generic,
            _ => decl.spec,
        };

        for name in split_name_list(&decl.names) {
            let current = &mut self.current;
            current.name = SmolStr::new(name);
            current.start_line = decl.line;
            current.body_line = decl.line;
            current.kind = decl.kind;
            current.spec = Some(spec);
            current.file_name.clone_from(&self.file_name);
            if current.args.is_empty() {
                current.args.clone_from(&decl.args);
            }
            current.type_name.clone_from(&decl.type_name);
            current.protection = decl.protection;

            if !self.has_open_scope() && spec.is_context_clause() {
                trace!(name, line = decl.line, "context clause deferred");
                let clause = mem::take(&mut self.current);
                self.deferred.push(clause);
                self.start_fresh();
                continue;
            }
            self.commit();
        }
    }

    /// Fill the in-progress entry from a subprogram header declared at `line`.
    ///
    /// The entry is not committed; the caller commits once the parameter
    /// list has been added. Inside a generic clause the entry is classified
    /// as a generic whatever the header says.
    pub fn create_function(&mut self, header: &Subprogram, line: u32) {
        let current = &mut self.current;
        current.kind = EntryKind::Function;
        current.start_line = line;
        current.body_line = line;
        match header {
            Subprogram::Function { name, purity } => {
                current.spec = Some(VhdlSpec::Function);
                current.name = SmolStr::new(name);
                current.purity = *purity;
            }
            Subprogram::Procedure { name } => {
                current.spec = Some(VhdlSpec::Procedure);
                current.name = SmolStr::new(name);
                current.purity = None;
            }
            Subprogram::Process { label, sensitivity } => {
                current.spec = Some(VhdlSpec::Process);
                current.name = SmolStr::new(label);
                current.args = remove_whitespace(sensitivity);
                current
                    .arguments
                    .extend(split_name_list(sensitivity).map(Argument::named));
            }
        }

        if self.section == DeclSection::Generic {
            current.spec = Some(VhdlSpec::Generic);
        }
    }

    /// Append one argument per name of an interface element to the
    /// in-progress entry.
    pub fn add_interface_element(&mut self, element: &InterfaceElement) {
        let generic = self.section == DeclSection::Generic;
        let current = &mut self.current;
        for name in split_name_list(&element.names) {
            current.arguments.push(Argument {
                name: SmolStr::new(name),
                type_name: element.type_name.trim().to_string(),
                default_value: element.default_value.clone(),
                direction: element.mode,
                generic,
            });
            current.args.push_str(name);
            current.args.push(',');
        }
    }
}
