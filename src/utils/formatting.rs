//! Formatting utilities used for CLI outputs.

use textwrap::Options;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `1 hour`, `8 hours`.
pub fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Description preview: at most `max_len` characters followed by `...`,
/// unless `full` is set. Empty descriptions yield `None`.
pub fn preview(text: &str, max_len: usize, full: bool) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    if full || text.chars().count() <= max_len {
        return Some(text.to_string());
    }

    let cut: String = text.chars().take(max_len).collect();
    Some(format!("{cut}..."))
}

/// Wrap `text` to `width` columns, every line prefixed with `indent`.
pub fn wrap_indented(text: &str, width: usize, indent: &str) -> String {
    let options = Options::new(width)
        .initial_indent(indent)
        .subsequent_indent(indent);
    textwrap::fill(text, &options)
}
