//! # vhdoc-base
//!
//! Core library for building VHDL documentation entry trees from the
//! semantic events of a grammar engine.
//!
//! The grammar engine tokenizes the source and reports each recognized
//! construct and documentation comment in source order. This crate decides
//! where each construct lands in the documentation tree, which entry each
//! comment documents, how nested configuration blocks are labelled, and
//! where context clauses that precede every design unit belong.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! scan      → ScanContext, Scanner, events, placement and association
//!   ↓
//! comment   → CommentParser seam, comment preparation, pending slot
//!   ↓
//! entry     → Entry tree, VhdlSpec / EntryKind, tree search
//!   ↓
//! base      → LabelStack, text helpers, constants
//! ```

// ============================================================================
// MODULES (dependency order: base → entry → comment → scan)
// ============================================================================

/// Foundation types: LabelStack, text helpers, constants
pub mod base;

/// Documentation entries and the entry tree
pub mod entry;

/// Comment parser seam and comment preparation
pub mod comment;

/// Scan configuration
pub mod config;

/// Driver error types
pub mod error;

/// File scanning: scope tracking, comment association, configuration nesting
pub mod scan;

pub use base::LabelStack;
pub use config::ScanConfig;
pub use entry::{Argument, Entry, EntryKind, EntryPath, VhdlSpec};
pub use error::{Result, ScanError};
pub use scan::{FileScan, ScanContext, ScanEvent, Scanner};
