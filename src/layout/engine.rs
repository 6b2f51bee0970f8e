//! The layout engine.
//!
//! Walks the document top to bottom against a theme, emitting drawing ops
//! and descending a single vertical cursor. The engine itself never retries:
//! it reports where the cursor ended and leaves the fit decision to the
//! caller.

use crate::model::{Block, Document, Section};
use crate::pdf::{Font, Op};
use crate::text::{estimate_width, sanitize, wrap_words};
use crate::theme::{Color, Theme, TitleAlign};

/// Hanging indent for bullet continuation lines and grid wrap lines.
const INDENT: f64 = 12.0;

/// Gap between the two grid columns.
const GRID_COL_GAP: f64 = 18.0;

/// Floor for the wrappable width of a grid cell remainder.
const GRID_MIN_WRAP: f64 = 20.0;

/// Panel fill used when a two-column theme doesn't name one.
const DEFAULT_PANEL_FILL: Color = Color::new(0.95, 0.95, 0.95);

/// How many section headings feed the side panel's tag list.
const PANEL_TAG_COUNT: usize = 4;

/// The product of one layout attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Drawing ops in paint order
    pub ops: Vec<Op>,
    /// Final vertical cursor position
    pub cursor: f64,
}

impl LayoutResult {
    /// Whether content ran past the bottom margin.
    pub fn overflows(&self, margin: f64) -> bool {
        self.cursor < margin
    }
}

/// Lay the document out against the theme.
///
/// Pure function of its inputs: identical `(doc, theme)` pairs produce
/// identical op streams.
pub fn lay_out(doc: &Document, theme: &Theme) -> LayoutResult {
    Engine::new(theme).run(doc)
}

struct Engine<'a> {
    theme: &'a Theme,
    ops: Vec<Op>,
    y: f64,
    content_x: f64,
    content_w: f64,
}

impl<'a> Engine<'a> {
    fn new(theme: &'a Theme) -> Self {
        let page = theme.page;
        Self {
            theme,
            ops: Vec::new(),
            y: page.height - page.margin,
            content_x: page.margin,
            content_w: page.width - 2.0 * page.margin,
        }
    }

    fn run(mut self, doc: &Document) -> LayoutResult {
        self.draw_background();
        if self.theme.layout.two_column_ui {
            self.draw_panel(doc);
        }
        self.draw_header(doc);
        for section in &doc.sections {
            self.draw_section(section);
        }
        LayoutResult {
            ops: self.ops,
            cursor: self.y,
        }
    }

    fn draw_background(&mut self) {
        let page = self.theme.page;
        if let Some(bg) = self.theme.colors.background {
            self.ops.push(Op::FillColor(bg));
            self.ops.push(Op::Rect {
                x: 0.0,
                y: 0.0,
                w: page.width,
                h: page.height,
            });
        }
    }

    /// Left panel: fill, document title, and a short tag list derived from
    /// the section headings. Shifts the usable content area to the right of
    /// the panel.
    fn draw_panel(&mut self, doc: &Document) {
        let page = self.theme.page;
        let panel_w = self.theme.layout.left_panel_width.unwrap_or(0.0);
        let fill = self.theme.colors.panel_fill.unwrap_or(DEFAULT_PANEL_FILL);

        self.ops.push(Op::FillColor(fill));
        self.ops.push(Op::Rect {
            x: 0.0,
            y: 0.0,
            w: panel_w,
            h: page.height,
        });
        self.content_x = panel_w + page.margin;
        self.content_w = page.width - self.content_x - page.margin;

        self.ops.push(Op::FillColor(self.theme.colors.text));
        let mut py = page.height - 56.0;
        self.text(Font::Bold, 11.0, 14.0, py, doc.title.clone());
        py -= 18.0;
        for tag in panel_tags(doc) {
            self.text(Font::Body, 9.0, 14.0, py, tag);
            py -= 14.0;
        }
    }

    /// Title, optional tagline, and the header rule.
    fn draw_header(&mut self, doc: &Document) {
        let page = self.theme.page;
        let t = self.theme.type_scale;
        let colors = &self.theme.colors;

        self.ops.push(Op::FillColor(colors.text));
        let tx = self.aligned_x(&doc.title, t.title_size);
        self.y -= t.title_size;
        self.text(Font::Bold, t.title_size, tx, self.y, doc.title.clone());
        self.y -= 10.0;

        if let Some(tagline) = doc.tagline.clone() {
            let tx = self.aligned_x(&tagline, t.tagline_size);
            self.ops.push(Op::FillColor(colors.muted));
            self.y -= t.tagline_size;
            self.text(Font::Body, t.tagline_size, tx, self.y, tagline);
            self.ops.push(Op::FillColor(colors.text));
            self.y -= 10.0;
        }

        self.ops.push(Op::StrokeColor(colors.rule));
        self.ops.push(Op::LineWidth(0.8));
        self.ops.push(Op::Line {
            x1: self.content_x,
            y1: self.y,
            x2: self.content_x + self.content_w,
            y2: self.y,
        });
        self.ops.push(Op::FillColor(colors.text));
        self.y -= self.theme.layout.rule_gap;
    }

    fn draw_section(&mut self, section: &Section) {
        let t = self.theme.type_scale;
        let colors = &self.theme.colors;

        self.y -= self.theme.layout.section_gap;
        self.ops.push(Op::FillColor(colors.muted));
        self.y -= t.h2_size + 1.0;
        self.text(
            Font::Bold,
            t.h2_size,
            self.content_x,
            self.y,
            sanitize(&section.heading),
        );
        self.ops.push(Op::FillColor(colors.text));

        let screen_items = section.screen_items();
        if !screen_items.is_empty() && self.theme.layout.two_column_ui {
            // Screen summaries get the grid treatment exclusively; ordinary
            // block rendering is skipped for this section.
            self.draw_screen_grid(&screen_items);
            return;
        }

        for block in &section.blocks {
            match block {
                Block::Paragraph(text) => {
                    self.draw_paragraph(text, 0.0);
                    self.y -= 2.0;
                }
                Block::Bullet(text) => self.draw_bullet(text),
                Block::Numbered(text) => self.draw_paragraph(text, 0.0),
                Block::ScreenItem(text) => self.draw_bullet(text),
            }
        }
    }

    fn draw_paragraph(&mut self, text: &str, indent: f64) {
        let t = self.theme.type_scale;
        let max_w = self.content_w - indent;
        for line in wrap_words(text, max_w, t.body_size) {
            self.y -= t.leading;
            self.text(Font::Body, t.body_size, self.content_x + indent, self.y, line);
        }
    }

    /// Bullet with a hanging indent: marker on the first line, continuation
    /// lines indented without it.
    fn draw_bullet(&mut self, text: &str) {
        let t = self.theme.type_scale;
        let wrapped = wrap_words(text, self.content_w - INDENT, t.body_size);
        let Some((first, rest)) = wrapped.split_first() else {
            return;
        };
        self.y -= t.leading;
        self.text(
            Font::Body,
            t.body_size,
            self.content_x,
            self.y,
            format!("- {first}"),
        );
        for cont in rest {
            self.y -= t.leading;
            self.text(
                Font::Body,
                t.body_size,
                self.content_x + INDENT,
                self.y,
                cont.clone(),
            );
        }
    }

    /// Two-column grid of screen summaries. Each item splits at the first
    /// `" - "` into a bold label prefix and a wrapped remainder; both cells
    /// of a row share baselines, and the row is as tall as its tallest cell.
    fn draw_screen_grid(&mut self, items: &[&str]) {
        let t = self.theme.type_scale;
        let col_w = (self.content_w - GRID_COL_GAP) / 2.0;
        let left_x = self.content_x;
        let right_x = self.content_x + col_w + GRID_COL_GAP;

        for row in items.chunks(2) {
            let mut cells: Vec<(String, Vec<String>)> = Vec::with_capacity(2);
            let mut max_lines = 1;

            for item in row {
                let (label, rest) = split_label_rest(item);
                let prefix = if label.is_empty() {
                    String::new()
                } else {
                    format!("{label} - ")
                };
                let prefix_w = estimate_width(&prefix, t.body_size);
                let max_w = (col_w - prefix_w).max(GRID_MIN_WRAP);
                let mut rest_lines = wrap_words(rest, max_w, t.body_size);
                if rest_lines.is_empty() {
                    rest_lines.push(rest.to_string());
                }
                max_lines = max_lines.max(rest_lines.len());
                cells.push((prefix, rest_lines));
            }

            // Whole row descends from a shared top baseline.
            for line_idx in 0..max_lines {
                self.y -= t.leading;
                for (col_idx, (prefix, rest_lines)) in cells.iter().enumerate() {
                    let x0 = if col_idx == 0 { left_x } else { right_x };
                    if line_idx == 0 {
                        if !prefix.is_empty() {
                            self.ops.push(Op::Text {
                                font: Font::Bold,
                                size: t.body_size,
                                x: x0,
                                y: self.y,
                                text: prefix.clone(),
                            });
                        }
                        let px = x0 + estimate_width(prefix, t.body_size);
                        self.ops.push(Op::Text {
                            font: Font::Body,
                            size: t.body_size,
                            x: px,
                            y: self.y,
                            text: rest_lines[0].clone(),
                        });
                    } else if line_idx < rest_lines.len() {
                        self.ops.push(Op::Text {
                            font: Font::Body,
                            size: t.body_size,
                            x: x0 + INDENT,
                            y: self.y,
                            text: rest_lines[line_idx].clone(),
                        });
                    }
                }
            }
            self.y -= 2.0;
        }
    }

    fn aligned_x(&self, text: &str, size: f64) -> f64 {
        match self.theme.layout.title_align {
            TitleAlign::Center => (self.theme.page.width - estimate_width(text, size)) / 2.0,
            TitleAlign::Left => self.content_x,
        }
    }

    fn text(&mut self, font: Font, size: f64, x: f64, y: f64, text: String) {
        self.ops.push(Op::Text {
            font,
            size,
            x,
            y,
            text,
        });
    }
}

/// Topical tags for the side panel: the first few section headings,
/// sanitized and lowercased.
fn panel_tags(doc: &Document) -> Vec<String> {
    doc.sections
        .iter()
        .take(PANEL_TAG_COUNT)
        .map(|s| sanitize(&s.heading).to_lowercase())
        .collect()
}

/// Split a screen summary at its first `" - "` separator.
fn split_label_rest(s: &str) -> (&str, &str) {
    match s.split_once(" - ") {
        Some((label, rest)) => (label.trim(), rest.trim()),
        None => ("", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use crate::theme::Theme;

    fn sample_doc() -> Document {
        parser::parse(
            "# Sample\n*one line of intent*\n\
             ## Overview\nA short paragraph about the idea.\n\
             ## Flow\n- open the app\n- pick a sound\n1. vote\n\
             ## Screens\n| home | calm | landing screen |\n| voting | playful | rating screen |\n",
        )
    }

    #[test]
    fn test_deterministic() {
        let doc = sample_doc();
        let theme = Theme::designed();
        let a = lay_out(&doc, &theme);
        let b = lay_out(&doc, &theme);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cursor_descends_monotonically() {
        let doc = sample_doc();
        let theme = Theme::minimal();
        let result = lay_out(&doc, &theme);
        assert!(result.cursor < theme.page.height - theme.page.margin);

        // Text baselines never go back up between consecutive text ops.
        let ys: Vec<f64> = result
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        assert!(!ys.is_empty());
        // Single-column layout descends before every placement, so
        // baselines strictly decrease.
        for pair in ys.windows(2) {
            assert!(pair[1] < pair[0], "baseline went back up: {pair:?}");
        }
    }

    #[test]
    fn test_minimal_theme_has_no_background_or_panel() {
        let doc = sample_doc();
        let result = lay_out(&doc, &Theme::minimal());
        assert!(!result
            .ops
            .iter()
            .any(|op| matches!(op, Op::Rect { .. })));
    }

    #[test]
    fn test_designed_theme_paints_background_and_panel() {
        let doc = sample_doc();
        let theme = Theme::designed();
        let result = lay_out(&doc, &theme);
        let rects: Vec<_> = result
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Rect { .. }))
            .collect();
        // Full-page background plus the side panel.
        assert_eq!(rects.len(), 2);
        assert!(matches!(
            rects[1],
            Op::Rect { w, .. } if *w == theme.layout.left_panel_width.unwrap()
        ));
    }

    #[test]
    fn test_screen_items_render_as_grid_in_two_column() {
        let doc = sample_doc();
        let result = lay_out(&doc, &Theme::designed());
        let has_bold_label = result.ops.iter().any(|op| {
            matches!(op, Op::Text { font: Font::Bold, text, .. } if text == "home - ")
        });
        assert!(has_bold_label);
        // Grid cells carry the remainder without the label.
        let no_bulleted_screen = !result.ops.iter().any(|op| {
            matches!(op, Op::Text { text, .. } if text.starts_with("- home"))
        });
        assert!(no_bulleted_screen);
    }

    #[test]
    fn test_screen_items_render_as_bullets_in_single_column() {
        let doc = sample_doc();
        let result = lay_out(&doc, &Theme::minimal());
        let bulleted = result.ops.iter().any(|op| {
            matches!(op, Op::Text { text, .. } if text == "- home - landing screen (calm)")
        });
        assert!(bulleted);
    }

    #[test]
    fn test_title_centered_in_minimal() {
        let doc = sample_doc();
        let theme = Theme::minimal();
        let result = lay_out(&doc, &theme);
        let title_op = result
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Text { x, text, .. } if text == "Sample" => Some(*x),
                _ => None,
            })
            .unwrap();
        let expected =
            (theme.page.width - estimate_width("Sample", theme.type_scale.title_size)) / 2.0;
        assert!((title_op - expected).abs() < 1e-9);
    }

    #[test]
    fn test_panel_tags_derived_from_headings() {
        let doc = sample_doc();
        assert_eq!(panel_tags(&doc), vec!["overview", "flow", "screens"]);
    }

    #[test]
    fn test_overflow_detection() {
        let mut doc = sample_doc();
        let mut big = Section::new("Padding");
        for i in 0..120 {
            big.add_block(Block::Paragraph(format!(
                "filler paragraph number {i} with enough words to wrap across lines"
            )));
        }
        doc.add_section(big);

        let theme = Theme::minimal();
        let result = lay_out(&doc, &theme);
        assert!(result.overflows(theme.page.margin));
    }

    #[test]
    fn test_empty_document_still_lays_out() {
        let doc = Document::new();
        let theme = Theme::minimal();
        let result = lay_out(&doc, &theme);
        assert!(!result.overflows(theme.page.margin));
        // Title (empty) and the header rule are still emitted.
        assert!(result.ops.iter().any(|op| matches!(op, Op::Line { .. })));
    }
}
