//! Text measuring, wrapping and truncation for card content.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap `text` to lines no wider than `max_width` display columns.
///
/// Explicit newlines start a new line. Words wider than the line are
/// broken at character boundaries. An empty input yields one empty line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            let word_width = word.width();

            if current_width > 0 && current_width + 1 + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }
            if current_width == 0 && word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                // Break an over-long word
                for c in word.chars() {
                    let c_width = c.width().unwrap_or(1);
                    if current_width + c_width > max_width && current_width > 0 {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += c_width;
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// Truncate to `max_width` display columns, ending in "..." if cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let c_width = c.width().unwrap_or(1);
        if width + c_width > target {
            break;
        }
        out.push(c);
        width += c_width;
    }
    out.push_str("...");
    out
}

/// Keep the last `max_width` columns of `s`, so the cursor end stays visible.
pub fn tail_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let c_width = c.width().unwrap_or(1);
        if width + c_width > max_width {
            break;
        }
        width += c_width;
        start = idx;
    }
    &s[start..]
}
