//! Text sanitization for PDF-safe output.

use unicode_normalization::UnicodeNormalization;

/// Typographic characters replaced with ASCII-safe equivalents.
///
/// The content stream is Latin-1 encoded, so anything outside that range has
/// to be mapped away before layout ever sees it.
const CHARMAP: &[(char, &str)] = &[
    ('\u{2192}', "->"),  // rightwards arrow
    ('\u{2248}', "~"),   // almost equal to
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "--"),  // em dash
    ('\u{2011}', "-"),   // non-breaking hyphen
    ('\u{201c}', "\""),  // left double quote
    ('\u{201d}', "\""),  // right double quote
    ('\u{2019}', "'"),   // right single quote
    ('\u{2018}', "'"),   // left single quote
    ('\u{2022}', "-"),   // bullet
    ('\u{00a0}', " "),   // no-break space
];

/// Normalize a line of markup text for measurement and placement.
///
/// Trims surrounding whitespace, applies NFC normalization, substitutes the
/// fixed typographic character set with ASCII equivalents, and strips
/// Markdown emphasis markers. Idempotent: sanitizing already-sanitized text
/// returns it unchanged.
pub fn sanitize(text: &str) -> String {
    let mut s: String = text.trim().nfc().collect();
    for (from, to) in CHARMAP {
        if s.contains(*from) {
            s = s.replace(*from, to);
        }
    }
    // Emphasis markers are dropped verbatim, `**` before `*`.
    s = s.replace("**", "").replace('*', "");
    s
}
