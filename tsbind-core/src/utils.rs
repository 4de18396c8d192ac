//! Shared string helpers.

/// Remove every `"` character from a literal argument value.
///
/// Annotation arguments arrive as literal source text (`"\"{id}\""`).
pub fn strip_quotes(s: &str) -> String {
    s.replace('"', "")
}

/// Remove a single trailing `suffix`, if present.
pub fn strip_suffix<'a>(s: &'a str, suffix: &str) -> &'a str {
    s.strip_suffix(suffix).unwrap_or(s)
}

/// Convert `\r\n` line endings to `\n`.
pub fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n")
}
