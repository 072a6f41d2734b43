//! Classification types for documentation entries.
//!
//! [`EntryKind`] is the coarse category a renderer groups by, [`VhdlSpec`]
//! the exact VHDL construct that produced the entry.

use std::fmt;

use smol_str::SmolStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Coarse category of an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntryKind {
    /// Fresh builder that no construct has classified yet.
    #[default]
    Empty,
    /// Objects, types, clauses and instantiations.
    Variable,
    /// Documentation-only entry synthesized from a comment block.
    VariableDoc,
    /// Functions, procedures and processes.
    Function,
    /// Entity, package, architecture or package body.
    Compound,
}

/// The VHDL construct an entry was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VhdlSpec {
    Library,
    Use,
    Entity,
    Package,
    PackageBody,
    Architecture,
    Configuration,
    Component,
    Signal,
    Constant,
    Type,
    Subtype,
    Record,
    Units,
    Attribute,
    Alias,
    Group,
    File,
    SharedVariable,
    Variable,
    Port,
    Generic,
    Function,
    Procedure,
    Process,
    Instantiation,
    Miscellaneous,
}

impl VhdlSpec {
    /// Compound constructs open a documentation scope and always live
    /// directly under the file root.
    pub fn is_compound(self) -> bool {
        matches!(
            self,
            VhdlSpec::Entity | VhdlSpec::Package | VhdlSpec::Architecture | VhdlSpec::PackageBody
        )
    }

    /// `library` and `use` context clauses.
    pub fn is_context_clause(self) -> bool {
        matches!(self, VhdlSpec::Library | VhdlSpec::Use)
    }

    pub fn is_subprogram(self) -> bool {
        matches!(
            self,
            VhdlSpec::Function | VhdlSpec::Procedure | VhdlSpec::Process
        )
    }

    /// The coarse category a construct is filed under.
    pub fn default_kind(self) -> EntryKind {
        match self {
            VhdlSpec::Entity
            | VhdlSpec::Package
            | VhdlSpec::PackageBody
            | VhdlSpec::Architecture => EntryKind::Compound,
            VhdlSpec::Function | VhdlSpec::Procedure | VhdlSpec::Process => EntryKind::Function,
            VhdlSpec::Library
            | VhdlSpec::Use
            | VhdlSpec::Configuration
            | VhdlSpec::Component
            | VhdlSpec::Signal
            | VhdlSpec::Constant
            | VhdlSpec::Type
            | VhdlSpec::Subtype
            | VhdlSpec::Record
            | VhdlSpec::Units
            | VhdlSpec::Attribute
            | VhdlSpec::Alias
            | VhdlSpec::Group
            | VhdlSpec::File
            | VhdlSpec::SharedVariable
            | VhdlSpec::Variable
            | VhdlSpec::Port
            | VhdlSpec::Generic
            | VhdlSpec::Instantiation
            | VhdlSpec::Miscellaneous => EntryKind::Variable,
        }
    }

    /// The VHDL keyword (or phrase) for this construct.
    pub fn keyword(self) -> &'static str {
        match self {
            VhdlSpec::Library => "library",
            VhdlSpec::Use => "use",
            VhdlSpec::Entity => "entity",
            VhdlSpec::Package => "package",
            VhdlSpec::PackageBody => "package body",
            VhdlSpec::Architecture => "architecture",
            VhdlSpec::Configuration => "configuration",
            VhdlSpec::Component => "component",
            VhdlSpec::Signal => "signal",
            VhdlSpec::Constant => "constant",
            VhdlSpec::Type => "type",
            VhdlSpec::Subtype => "subtype",
            VhdlSpec::Record => "record",
            VhdlSpec::Units => "units",
            VhdlSpec::Attribute => "attribute",
            VhdlSpec::Alias => "alias",
            VhdlSpec::Group => "group",
            VhdlSpec::File => "file",
            VhdlSpec::SharedVariable => "shared variable",
            VhdlSpec::Variable => "variable",
            VhdlSpec::Port => "port",
            VhdlSpec::Generic => "generic",
            VhdlSpec::Function => "function",
            VhdlSpec::Procedure => "procedure",
            VhdlSpec::Process => "process",
            VhdlSpec::Instantiation => "instantiation",
            VhdlSpec::Miscellaneous => "miscellaneous",
        }
    }
}

impl fmt::Display for VhdlSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

/// Visibility of an entry in the rendered documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Protection {
    #[default]
    Public,
    Protected,
    Private,
    Package,
}

/// Source language stamped on every initialized entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Language {
    #[default]
    Unknown,
    Vhdl,
}

/// Function purity qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Purity {
    Pure,
    Impure,
}

impl Purity {
    /// Parse `pure`/`impure` (case-insensitive). Anything else is not a qualifier.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("pure") {
            Some(Purity::Pure)
        } else if text.eq_ignore_ascii_case("impure") {
            Some(Purity::Impure)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Purity::Pure => "pure",
            Purity::Impure => "impure",
        }
    }
}

/// Port/parameter direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    In,
    Out,
    InOut,
    Buffer,
    Linkage,
}

impl Mode {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "in" => Some(Mode::In),
            "out" => Some(Mode::Out),
            "inout" => Some(Mode::InOut),
            "buffer" => Some(Mode::Buffer),
            "linkage" => Some(Mode::Linkage),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::In => "in",
            Mode::Out => "out",
            Mode::InOut => "inout",
            Mode::Buffer => "buffer",
            Mode::Linkage => "linkage",
        }
    }
}

/// One element of an entry's argument list (port, generic, parameter or
/// process sensitivity name).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Argument {
    pub name: SmolStr,
    pub type_name: String,
    pub default_value: Option<String>,
    pub direction: Option<Mode>,
    /// Declared inside a generic clause.
    pub generic: bool,
}

impl Argument {
    pub fn named(name: &str) -> Self {
        Self {
            name: SmolStr::new(name),
            ..Self::default()
        }
    }
}
