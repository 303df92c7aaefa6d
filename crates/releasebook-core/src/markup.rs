//! Just enough Markdown to show release bullets: `- ` lines become list items and everything
//! else is kept as plain text. No inline formatting is interpreted.

use std::fmt::Write;

use html_escape::encode_text;

const BULLET: &str = "- ";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Block<'a> {
    /// A run of consecutive bullet lines, markers stripped
    List(Vec<&'a str>),
    /// A non-bullet line, exactly as written
    Text(&'a str),
}

#[must_use]
pub fn parse_blocks(content: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    for line in content.split('\n') {
        match line.trim().strip_prefix(BULLET) {
            Some(item) => match blocks.last_mut() {
                Some(Block::List(items)) => items.push(item),
                _ => blocks.push(Block::List(vec![item])),
            },
            None => blocks.push(Block::Text(line)),
        }
    }
    blocks
}

/// Render release content as HTML, escaping all text.
///
/// Lines stay separated by `\n`. Inside a list, the separator follows each `</li>`, so the
/// newline after the last item of a list lands just before `</ul>`.
#[must_use]
pub fn format_bullets(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    let blocks = parse_blocks(content);
    let mut out = String::with_capacity(content.len() * 2);
    let mut blocks = blocks.iter().peekable();
    while let Some(block) = blocks.next() {
        let is_last = blocks.peek().is_none();
        match block {
            Block::List(items) => {
                out.push_str("<ul>");
                let mut items = items.iter().peekable();
                while let Some(item) = items.next() {
                    write!(out, "<li>{}</li>", encode_text(item)).ok();
                    if items.peek().is_some() || !is_last {
                        out.push('\n');
                    }
                }
                out.push_str("</ul>");
            }
            Block::Text(text) => {
                out.push_str(&encode_text(text));
                if !is_last {
                    out.push('\n');
                }
            }
        }
    }
    out
}
