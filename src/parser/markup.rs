//! Markup parser: line classification into the document model.
//!
//! The grammar is deliberately small and the parser deliberately permissive:
//! lines that fit no rule inside a section become paragraphs, and content
//! before the first section heading (other than title and tagline) is
//! discarded. Parsing never fails.

use log::trace;
use regex::Regex;

use crate::model::{Block, Document, Section};
use crate::text::sanitize;

/// Parse markup text into a [`Document`].
pub fn parse(text: &str) -> Document {
    MarkupParser::new().parse(text)
}

/// Reusable markup parser.
///
/// Holds the compiled numbered-item pattern so repeated parses don't pay
/// regex compilation again.
pub struct MarkupParser {
    numbered: Regex,
}

impl MarkupParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self {
            numbered: Regex::new(r"^(\d+)\.\s+(.*)$").unwrap(),
        }
    }

    /// Parse markup text into a [`Document`].
    pub fn parse(&self, text: &str) -> Document {
        let mut state = ParserState::new();

        for raw in text.lines() {
            let line = raw.trim();
            self.classify(line, &mut state);
        }
        state.flush_rows();
        state.seal();

        trace!(
            "parsed document: {} sections, title {:?}",
            state.doc.section_count(),
            state.doc.title
        );
        state.doc
    }

    /// Apply the line-classification rules, first match wins.
    fn classify(&self, line: &str, state: &mut ParserState) {
        if line.is_empty() {
            state.flush_rows();
            return;
        }
        if line.starts_with("<!--") || line.starts_with("<div") || line.starts_with("</div") {
            return;
        }
        if line == "---" {
            state.flush_rows();
            return;
        }

        if let Some(rest) = line.strip_prefix("# ") {
            // First title wins; later `# ` lines are ignored.
            if state.doc.title.is_empty() {
                state.doc.title = sanitize(rest);
            }
            return;
        }

        if state.doc.sections.is_empty() && state.current.is_none() && state.doc.tagline.is_none() {
            if line.len() > 2 && line.starts_with('*') && line.ends_with('*') {
                state.doc.tagline = Some(sanitize(line.trim_matches('*')));
                return;
            }
        }

        if let Some(rest) = line.strip_prefix("## ") {
            state.flush_rows();
            state.seal();
            state.current = Some(Section::new(rest.trim()));
            return;
        }

        // Everything below needs an open section; malformed leading content
        // is dropped.
        if state.current.is_none() {
            return;
        }

        if let Some(row) = parse_table_row(line) {
            state.rows.push(row);
            return;
        }
        if line.starts_with('|') && line.ends_with('|') {
            // Header or separator row of a table.
            return;
        }

        if let Some(caps) = self.numbered.captures(line) {
            let ordinal = &caps[1];
            let rest = sanitize(&caps[2]);
            state.push_block(Block::Numbered(format!("{ordinal}. {rest}")));
            return;
        }

        if let Some(rest) = line.strip_prefix("- ") {
            state.push_block(Block::Bullet(sanitize(rest)));
            return;
        }

        state.push_block(Block::Paragraph(sanitize(line)));
    }
}

impl Default for MarkupParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable parse state threaded through line classification.
struct ParserState {
    doc: Document,
    current: Option<Section>,
    /// Pending table rows as (screen, vibe, description)
    rows: Vec<(String, String, String)>,
}

impl ParserState {
    fn new() -> Self {
        Self {
            doc: Document::new(),
            current: None,
            rows: Vec::new(),
        }
    }

    /// Flush pending table rows into the open section as screen-summary
    /// blocks. Rows accumulated with no section open are discarded.
    fn flush_rows(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let rows = std::mem::take(&mut self.rows);
        let Some(section) = self.current.as_mut() else {
            return;
        };
        for (screen, vibe, what) in rows {
            // ASCII separator on purpose: the content stream is Latin-1.
            let text = sanitize(&format!("{screen} - {what} ({vibe})"));
            section.add_block(Block::ScreenItem(text));
        }
    }

    /// Close the open section, appending it to the document.
    fn seal(&mut self) {
        if let Some(section) = self.current.take() {
            self.doc.add_section(section);
        }
    }

    fn push_block(&mut self, block: Block) {
        if let Some(section) = self.current.as_mut() {
            section.add_block(block);
        }
    }
}

/// Parse a pipe-delimited data row into its first three cells.
///
/// Returns `None` for header rows (first cell is the `screen` label),
/// separator rows (first cell all dashes), and rows with fewer than three
/// cells.
fn parse_table_row(line: &str) -> Option<(String, String, String)> {
    if !line.starts_with('|') || !line.ends_with('|') {
        return None;
    }
    let cells: Vec<&str> = line
        .trim_matches('|')
        .split('|')
        .map(str::trim)
        .collect();
    if cells.len() < 3 {
        return None;
    }
    let first = cells[0];
    if first.eq_ignore_ascii_case("screen") {
        return None;
    }
    if first.is_empty() || first.chars().all(|c| c == '-') {
        return None;
    }
    Some((
        sanitize(cells[0]),
        sanitize(cells[1]),
        sanitize(cells[2]),
    ))
}
