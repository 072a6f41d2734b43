//! Text helpers for the comma-separated name lists VHDL allows.

/// Split a declaration name list (`a, b, c`) into its trimmed names.
///
/// Empty segments are skipped, so `"a,,b"` yields two names.
pub fn split_name_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Remove every whitespace character from `text`.
pub fn remove_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// ASCII case-insensitive prefix test.
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
