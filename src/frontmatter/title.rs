//! Title resolution: first H1 heading, or a name derived from the file path.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// File stem whose title comes from the parent directory instead.
const INDEX_STEM: &str = "index";

/// Where a resolved title came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    /// First H1 heading of the body
    Heading,
    /// Generated from the file name (or parent directory for `index` files)
    Path,
}

impl fmt::Display for TitleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleSource::Heading => write!(f, "heading"),
            TitleSource::Path => write!(f, "path"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTitle {
    pub text: String,
    pub source: TitleSource,
}

/// Text of the first H1 heading in `body`, trimmed.
///
/// A heading is one `#`, at least one whitespace character, then non-empty
/// text. Deeper headings (`##`, `###`, ...) never match.
pub fn extract_h1(body: &str) -> Option<String> {
    body.lines().find_map(h1_text).map(str::to_string)
}

fn h1_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    (!text.is_empty()).then_some(text)
}

/// Human-readable title generated from a file path.
///
/// `docs/my-cool_page.md` becomes `My Cool Page`, `docs/guides/index.md`
/// becomes `Guides`. Interior capitals are preserved.
pub fn title_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    let name: Cow<'_, str> = if stem == INDEX_STEM {
        path.parent()
            .and_then(Path::file_name)
            .map_or(stem, |parent| parent.to_string_lossy())
    } else {
        stem
    };

    let words: Vec<String> = name
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize_word)
        .collect();

    if words.is_empty() {
        name.into_owned()
    } else {
        words.join(" ")
    }
}

/// Upper-case the first character and keep the rest as-is.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pick the title for a document body stored at `path`.
pub fn resolve_title(body: &str, path: &Path) -> ResolvedTitle {
    match extract_h1(body) {
        Some(text) => ResolvedTitle {
            text,
            source: TitleSource::Heading,
        },
        None => ResolvedTitle {
            text: title_from_path(path),
            source: TitleSource::Path,
        },
    }
}
