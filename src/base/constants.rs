//! Domain constants shared across the scanner.

/// Separator joining label segments in a label path.
pub const LABEL_SEPARATOR: char = '|';

/// Marker smuggled through comment text to request a PlantUML diagram.
pub const PLANTUML_MARKER: &str = "[plant]";

/// Prefix of a VHDL documentation comment.
pub const DOC_COMMENT_PREFIX: &str = "--!";

/// Library/use names hidden when standard library suppression is enabled.
pub const STANDARD_LIBRARY_PREFIXES: &[&str] = &["ieee", "std"];
