//! Configuration blocks and their nesting labels.
//!
//! The grammar engine reports `for ... end for` blocks as a flat sequence
//! carrying only a nesting level. The label path of each block is rebuilt
//! by comparing its level with the previous block's.

use std::cmp::Ordering;

use smol_str::SmolStr;
use tracing::{trace, warn};

use super::context::ScanContext;

/// A configuration block as reported by the grammar engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigBlock {
    /// Block specification (architecture name or instance label).
    pub name: String,
    /// Bound component, when the block binds one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub binding: Option<String>,
    pub level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub leaf: bool,
    /// A configuration specification inside an architecture.
    #[cfg_attr(feature = "serde", serde(default))]
    pub inline: bool,
}

impl ConfigBlock {
    pub fn new(name: &str, level: u32) -> Self {
        Self {
            name: name.to_string(),
            binding: None,
            level,
            leaf: false,
            inline: false,
        }
    }

    pub fn with_binding(mut self, binding: &str) -> Self {
        self.binding = Some(binding.to_string());
        self
    }

    pub fn leaf(mut self) -> Self {
        self.leaf = true;
        self
    }

    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// The label this block contributes to the path.
    fn label(&self) -> &str {
        self.binding.as_deref().unwrap_or(&self.name)
    }
}

/// A recorded configuration block with its resolved label path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigNode {
    pub name: SmolStr,
    pub binding: Option<SmolStr>,
    /// Lower-cased name of the configured entity.
    pub entity: SmolStr,
    /// Lower-cased label path, e.g. `|rtl|u1`.
    pub label_path: String,
    pub level: u32,
    pub leaf: bool,
    pub inline: bool,
}

impl ScanContext {
    /// Start a `configuration ... of <entity>` declaration.
    pub fn begin_configuration(&mut self, entity: &str) {
        self.configuration_entity = SmolStr::new(entity);
    }

    /// Record a configuration block, pushing or popping one label segment
    /// depending on how its level compares to the previous block.
    ///
    /// A decrease of any size pops a single segment.
    pub fn add_config_block(&mut self, block: &ConfigBlock) {
        match self.config_nodes.last() {
            None => self.config_labels.push(block.label()),
            Some(prev) => match prev.level.cmp(&block.level) {
                Ordering::Less if !block.leaf => self.config_labels.push(block.label()),
                Ordering::Less | Ordering::Equal => {}
                Ordering::Greater => {
                    self.config_labels.pop();
                }
            },
        }

        if block.inline {
            match self.last_compound().map(|c| c.name.clone()) {
                Some(name) => self.configuration_entity = name,
                None => warn!(
                    block = block.name.as_str(),
                    "inline configuration outside of any compound"
                ),
            }
        }

        let node = ConfigNode {
            name: SmolStr::new(&block.name),
            binding: block.binding.as_deref().map(SmolStr::new),
            entity: SmolStr::new(self.configuration_entity.to_lowercase()),
            label_path: self.config_labels.lower_path(),
            level: block.level,
            leaf: block.leaf,
            inline: block.inline,
        };
        trace!(path = node.label_path.as_str(), level = node.level, "configuration block");
        self.config_nodes.push(node);
    }

    pub fn config_nodes(&self) -> &[ConfigNode] {
        &self.config_nodes
    }
}
