//! Content-stream drawing operations and their operator encoding.

use crate::theme::Color;

/// The three built-in page fonts.
///
/// Courier is declared in the page resources for parity with the theme's
/// mono size even when no op uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Helvetica, resource name `/F1`
    Body,
    /// Helvetica-Bold, resource name `/F2`
    Bold,
    /// Courier, resource name `/F3`
    Mono,
}

impl Font {
    /// Resource name used inside the content stream.
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Body => "F1",
            Font::Bold => "F2",
            Font::Mono => "F3",
        }
    }

    /// Base-14 font name used in the font descriptor object.
    pub fn base_font(self) -> &'static str {
        match self {
            Font::Body => "Helvetica",
            Font::Bold => "Helvetica-Bold",
            Font::Mono => "Courier",
        }
    }
}

/// One primitive page-drawing operation.
///
/// The layout engine emits these; the serializer turns them into PDF
/// operators. Coordinates are absolute page points, origin bottom-left.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Set the non-stroking (fill) color
    FillColor(Color),
    /// Set the stroking color
    StrokeColor(Color),
    /// Set the stroke line width
    LineWidth(f64),
    /// Stroke a line segment
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Fill an axis-aligned rectangle
    Rect { x: f64, y: f64, w: f64, h: f64 },
    /// Place text at an absolute position
    Text {
        font: Font,
        size: f64,
        x: f64,
        y: f64,
        text: String,
    },
}

impl Op {
    /// Append this op's operator form to `out`.
    fn encode(&self, out: &mut String) {
        use std::fmt::Write;
        match self {
            Op::FillColor(c) => {
                let _ = writeln!(out, "{:.3} {:.3} {:.3} rg", c.r, c.g, c.b);
            }
            Op::StrokeColor(c) => {
                let _ = writeln!(out, "{:.3} {:.3} {:.3} RG", c.r, c.g, c.b);
            }
            Op::LineWidth(w) => {
                let _ = writeln!(out, "{w:.2} w");
            }
            Op::Line { x1, y1, x2, y2 } => {
                let _ = writeln!(out, "{x1:.2} {y1:.2} m {x2:.2} {y2:.2} l S");
            }
            Op::Rect { x, y, w, h } => {
                let _ = writeln!(out, "{x:.2} {y:.2} {w:.2} {h:.2} re f");
            }
            Op::Text {
                font,
                size,
                x,
                y,
                text,
            } => {
                let _ = writeln!(
                    out,
                    "BT /{} {size:.2} Tf 1 0 0 1 {x:.2} {y:.2} Tm ({}) Tj ET",
                    font.resource_name(),
                    escape_string(text)
                );
            }
        }
    }
}

/// Encode an op sequence into its content-stream operator text.
pub fn encode_stream(ops: &[Op]) -> String {
    let mut out = String::new();
    for op in ops {
        op.encode(&mut out);
    }
    out
}

/// Escape text for a PDF literal string: backslash and parens escaped,
/// raw CR/LF stripped.
pub fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\r' | '\n' => {}
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("plain"), "plain");
        assert_eq!(escape_string("a(b)c"), "a\\(b\\)c");
        assert_eq!(escape_string("back\\slash"), "back\\\\slash");
        assert_eq!(escape_string("no\nnew\rlines"), "nonewlines");
    }

    #[test]
    fn test_fill_color_encoding() {
        let ops = [Op::FillColor(Color::new(0.1, 0.2, 0.3))];
        assert_eq!(encode_stream(&ops), "0.100 0.200 0.300 rg\n");
    }

    #[test]
    fn test_line_encoding() {
        let ops = [
            Op::StrokeColor(Color::new(0.5, 0.5, 0.5)),
            Op::LineWidth(0.8),
            Op::Line {
                x1: 54.0,
                y1: 700.0,
                x2: 558.0,
                y2: 700.0,
            },
        ];
        assert_eq!(
            encode_stream(&ops),
            "0.500 0.500 0.500 RG\n0.80 w\n54.00 700.00 m 558.00 700.00 l S\n"
        );
    }

    #[test]
    fn test_text_encoding() {
        let ops = [Op::Text {
            font: Font::Bold,
            size: 13.0,
            x: 54.0,
            y: 680.5,
            text: "Heading (v2)".to_string(),
        }];
        assert_eq!(
            encode_stream(&ops),
            "BT /F2 13.00 Tf 1 0 0 1 54.00 680.50 Tm (Heading \\(v2\\)) Tj ET\n"
        );
    }

    #[test]
    fn test_rect_encoding() {
        let ops = [Op::Rect {
            x: 0.0,
            y: 0.0,
            w: 612.0,
            h: 792.0,
        }];
        assert_eq!(encode_stream(&ops), "0.00 0.00 612.00 792.00 re f\n");
    }

    #[test]
    fn test_font_names() {
        assert_eq!(Font::Body.resource_name(), "F1");
        assert_eq!(Font::Bold.base_font(), "Helvetica-Bold");
        assert_eq!(Font::Mono.base_font(), "Courier");
    }
}
