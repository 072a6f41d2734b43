//! Scan configuration.

use smol_str::SmolStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::base::constants::STANDARD_LIBRARY_PREFIXES;
use crate::base::starts_with_ignore_case;

/// Options controlling a file scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanConfig {
    /// Drop `library`/`use` clauses that name a standard library.
    pub suppress_standard_libraries: bool,
    /// Name prefixes (case-insensitive) treated as standard libraries.
    pub standard_library_prefixes: Vec<SmolStr>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            suppress_standard_libraries: false,
            standard_library_prefixes: STANDARD_LIBRARY_PREFIXES
                .iter()
                .copied()
                .map(SmolStr::new_static)
                .collect(),
        }
    }
}

impl ScanConfig {
    pub fn with_suppress_standard_libraries(mut self, suppress: bool) -> Self {
        self.suppress_standard_libraries = suppress;
        self
    }

    pub fn with_standard_library_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.standard_library_prefixes = prefixes
            .into_iter()
            .map(|p| SmolStr::new(p.as_ref()))
            .collect();
        self
    }

    /// Whether a context clause naming `name` should be kept.
    pub fn keeps_context_clause(&self, name: &str) -> bool {
        if !self.suppress_standard_libraries {
            return true;
        }
        let name = name.trim();
        !self
            .standard_library_prefixes
            .iter()
            .any(|prefix| starts_with_ignore_case(name, prefix))
    }
}
