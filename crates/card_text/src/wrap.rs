//! Greedy word wrapping

use crate::measure::TextMeasurer;

/// Break `text` into lines no wider than `max_width`.
///
/// Explicit newlines are kept. Words wider than a whole line are split
/// between characters. Empty input yields no lines.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    font_size: f32,
    weight: u16,
    measurer: &dyn TextMeasurer,
) -> Vec<String> {
    let fits = |s: &str| measurer.text_width(s, font_size, weight) <= max_width;
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            if fits(&candidate) {
                line = candidate;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }

            if fits(word) {
                line = word.to_string();
            } else {
                for ch in word.chars() {
                    line.push(ch);
                    if !fits(&line) && line.chars().count() > 1 {
                        line.pop();
                        lines.push(std::mem::take(&mut line));
                        line.push(ch);
                    }
                }
            }
        }
        lines.push(line);
    }
    lines
}
