//! Quote frontmatter titles that contain a colon.
//!
//! An unquoted `title: Part One: The Beginning` is invalid YAML (or at best a
//! surprising mapping); it becomes `title: "Part One: The Beginning"`.

use super::TITLE_KEY;
use super::split::split;

const QUOTE_CHARS: [char; 2] = ['"', '\''];

/// Result of scanning frontmatter lines for a title to quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedLines {
    pub lines: Vec<String>,
    pub changed: bool,
}

/// Quote the first title line that needs it; later lines are left alone.
pub fn quote_title_lines<S: AsRef<str>>(lines: &[S]) -> QuotedLines {
    let mut changed = false;
    let lines: Vec<String> = lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            if !changed {
                if let Some(quoted) = quote_line(line) {
                    changed = true;
                    return quoted;
                }
            }
            line.to_string()
        })
        .collect();

    QuotedLines { lines, changed }
}

fn quote_line(line: &str) -> Option<String> {
    let (line, line_end) = match line.strip_suffix('\r') {
        Some(stripped) => (stripped, "\r"),
        None => (line, ""),
    };

    let rest = line.strip_prefix(TITLE_KEY)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let value = rest.trim_start();
    needs_quotes(value).then(|| format!("{TITLE_KEY} \"{value}\"{line_end}"))
}

/// Unquoted at both ends with a colon strictly inside.
fn needs_quotes(value: &str) -> bool {
    let mut chars = value.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return false;
    };
    !QUOTE_CHARS.contains(&first) && !QUOTE_CHARS.contains(&last) && chars.as_str().contains(':')
}

/// Rewrite `content` with its frontmatter title quoted.
///
/// Returns `None` when nothing changes, including documents without
/// frontmatter. Bytes outside the rewritten line are preserved.
pub fn quote_title(content: &str) -> Option<String> {
    let range = split(content).frontmatter_range()?;
    let lines: Vec<&str> = content[range.clone()].split('\n').collect();

    let quoted = quote_title_lines(&lines);
    if !quoted.changed {
        return None;
    }

    Some(format!(
        "{}{}{}",
        &content[..range.start],
        quoted.lines.join("\n"),
        &content[range.end..]
    ))
}
