//! File scanning: building the entry tree from grammar events.
//!
//! A [`ScanContext`] holds the state of one in-flight file scan: the root it
//! builds into, the entry under construction, the scope pointers that decide
//! where each committed entry goes, the pending comment slot, and the side
//! tables (configuration nodes, instantiations, deferred context clauses).
//! [`Scanner`] drives a context from a stream of [`ScanEvent`]s.
//!
//! # Module structure
//!
//! - [`context`] - `ScanContext`, lifecycle and commit placement
//! - [`construct`] - Declarations, subprogram headers, interface elements
//! - [`comment`] - Comment association and the pending slot
//! - [`configuration`] - Configuration blocks and label path reconstruction
//! - [`deferred`] - Context clause hoisting and instantiation records
//! - [`events`] - `ScanEvent` and the `Scanner` driver

mod comment;
mod configuration;
mod construct;
mod context;
mod deferred;
mod events;


pub use configuration::{ConfigBlock, ConfigNode};
pub use construct::{Declaration, InterfaceElement, Subprogram};
pub use context::{DeclSection, FileScan, ScanContext, SubprogramKind};
pub use deferred::{Instantiation, InstantiationRecord};
pub use events::{scan_file, ScanEvent, Scanner};
