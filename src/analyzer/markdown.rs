//! Markdown structure extraction

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// What the analyzer needs from one Markdown body
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedMarkdown {
    /// Readable text: paragraphs, headings, list items and table cells,
    /// one block per line. Code blocks and raw HTML are left out.
    pub prose: String,

    /// Heading count per level, index 0 is H1
    pub headings: [usize; 6],

    /// Non-blank lines inside fenced or indented code blocks
    pub code_lines: usize,
}

/// Parse a Markdown body (frontmatter already removed).
pub fn parse(body: &str) -> ParsedMarkdown {
    let mut parsed = ParsedMarkdown::default();
    let mut in_code_block = false;

    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    for event in Parser::new_ext(body, options) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Start(Tag::Heading { level, .. }) => parsed.headings[level as usize - 1] += 1,
            Event::Text(text) if in_code_block => {
                parsed.code_lines += text.lines().filter(|l| !l.trim().is_empty()).count();
            }
            Event::Text(text) | Event::Code(text) => parsed.prose.push_str(&text),
            Event::SoftBreak | Event::HardBreak => parsed.prose.push(' '),
            Event::End(TagEnd::TableCell) => parsed.prose.push(' '),
            Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::TableRow | TagEnd::TableHead,
            ) => end_block(&mut parsed.prose),
            _ => {}
        }
    }

    let trimmed_len = parsed.prose.trim_end().len();
    parsed.prose.truncate(trimmed_len);
    parsed
}

fn end_block(prose: &mut String) {
    if !prose.is_empty() && !prose.ends_with('\n') {
        prose.push('\n');
    }
}

/// Total and blank line counts for a whole file.
pub fn line_counts(content: &str) -> (usize, usize) {
    content.lines().fold((0, 0), |(total, empty), line| {
        (total + 1, empty + usize::from(line.trim().is_empty()))
    })
}
