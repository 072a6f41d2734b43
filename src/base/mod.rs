//! Foundation types for the vhdoc scanner.
//!
//! This module provides primitives used throughout the crate:
//! - [`LabelStack`] - Separator-joined label path for configuration nesting
//! - Text helpers for VHDL name lists
//! - Domain constants (label separator, comment markers, standard libraries)
//!
//! This module has NO dependencies on other vhdoc modules.

pub mod constants;
mod label_stack;
mod text;

pub use label_stack::LabelStack;
pub use text::{remove_whitespace, split_name_list, starts_with_ignore_case};
