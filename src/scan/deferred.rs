//! Constructs placed outside the normal commit path: context clauses that
//! precede every design unit, and instantiation records.

use std::mem;

use smol_str::SmolStr;
use tracing::trace;

use crate::base::constants::LABEL_SEPARATOR;
use crate::config::ScanConfig;
use crate::entry::Entry;

use super::context::ScanContext;

// ============================================================================
// CONTEXT CLAUSES
// ============================================================================

/// `library`/`use` clauses seen before any design unit, in declaration order.
#[derive(Debug, Clone, Default)]
pub(crate) struct DeferredClauses {
    clauses: Vec<Entry>,
}

impl DeferredClauses {
    pub fn push(&mut self, clause: Entry) {
        self.clauses.push(clause);
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Attach each clause to the first compound declared after it, or to
    /// the root when none follows. Suppressed clauses are dropped.
    pub fn resolve(self, root: &mut Entry, config: &ScanConfig) {
        for clause in self.clauses {
            if !config.keeps_context_clause(&clause.name) {
                trace!(name = clause.name.as_str(), "standard library clause suppressed");
                continue;
            }

            let target = root
                .children()
                .iter()
                .position(|unit| unit.is_compound() && unit.start_line > clause.start_line);
            match target.and_then(|index| root.child_mut(index)) {
                Some(unit) => {
                    trace!(
                        name = clause.name.as_str(),
                        unit = unit.name.as_str(),
                        "context clause attached to design unit"
                    );
                    unit.push_child(clause);
                }
                None => {
                    trace!(name = clause.name.as_str(), "context clause attached to root");
                    root.push_child(clause);
                }
            }
        }
    }
}

// ============================================================================
// INSTANTIATIONS
// ============================================================================

/// A component, entity or configuration instantiation statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instantiation {
    /// Instance label (`u1`).
    pub label: String,
    /// Instantiated unit as written (`work.fifo(rtl)`).
    pub unit: String,
    /// `component`, `entity` or `configuration`.
    pub unit_kind: String,
    pub line: u32,
    /// Generate-statement label path enclosing the instance.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label_path: String,
}

/// An instantiation as exposed to the cross-reference index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstantiationRecord {
    pub label: SmolStr,
    pub unit: String,
    pub unit_kind: String,
    /// Name of the enclosing architecture, if one is open.
    pub architecture: Option<SmolStr>,
    pub file_name: String,
    pub line: u32,
    /// Lower-cased generate label path.
    pub label_path: String,
    /// Label path up to its second separator.
    pub read: String,
    /// Label path from its second separator on.
    pub write: String,
    pub brief: String,
    pub doc: String,
}

/// Split `|a|b|c` into `|a` and `|b|c`. Paths without a second separator
/// are not split.
fn split_label_path(path: &str) -> (String, String) {
    let split = path
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == LABEL_SEPARATOR)
        .map(|(i, _)| i);
    match split {
        Some(i) => (path[..i].to_string(), path[i..].to_string()),
        None => (String::new(), String::new()),
    }
}

impl ScanContext {
    /// Record an instantiation. Comments collected for the in-progress
    /// entry, including a pending one, move onto the record and a fresh
    /// entry is started; nothing is added to the tree.
    pub fn add_instantiation(&mut self, inst: &Instantiation) {
        self.flush_pending();
        let documented = mem::take(&mut self.current);
        let (read, write) = split_label_path(&inst.label_path);
        let record = InstantiationRecord {
            label: SmolStr::new(&inst.label),
            unit: inst.unit.clone(),
            unit_kind: inst.unit_kind.clone(),
            architecture: self.last_compound().map(|c| c.name.clone()),
            file_name: self.file_name.clone(),
            line: inst.line,
            label_path: inst.label_path.to_lowercase(),
            read,
            write,
            brief: documented.brief,
            doc: documented.doc,
        };
        trace!(label = record.label.as_str(), unit = record.unit.as_str(), "instantiation recorded");
        self.instantiations.push(record);
        self.start_fresh();
    }

    pub fn instantiations(&self) -> &[InstantiationRecord] {
        &self.instantiations
    }

    /// Context clauses waiting for the end of the file.
    pub fn deferred_clause_count(&self) -> usize {
        self.deferred.len()
    }
}
