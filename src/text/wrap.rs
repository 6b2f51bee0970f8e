//! Greedy word wrapping against the approximate width model.

use super::{estimate_width, sanitize};

/// Wrap `text` into lines whose estimated width stays within `max_width`.
///
/// The text is sanitized first, then whitespace-delimited words are packed
/// greedily: a word joins the current line if the space-joined candidate
/// still fits, otherwise it starts a new line. A single word wider than the
/// limit is still placed alone on its own line — words are never split or
/// dropped. Empty input yields an empty vec.
pub fn wrap_words(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
    let text = sanitize(text);
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut cur = String::new();

    for word in text.split_whitespace() {
        if cur.is_empty() {
            cur.push_str(word);
            continue;
        }
        let candidate_width =
            estimate_width(&cur, font_size) + estimate_width(" ", font_size) + estimate_width(word, font_size);
        if candidate_width <= max_width {
            cur.push(' ');
            cur.push_str(word);
        } else {
            lines.push(std::mem::take(&mut cur));
            cur.push_str(word);
        }
    }

    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}
