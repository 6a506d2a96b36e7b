//! Greedy word-wrap against an injected measurement oracle.

/// One positioned line of wrapped text.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Wrap `text` into lines no wider than `max_width` pixels.
///
/// Explicit newlines split paragraphs (each trimmed); words accumulate
/// greedily until adding one would overflow, keeping at least one word per
/// line even when that word alone exceeds `max_width`. Paragraph breaks add
/// an extra 0.3 line gap; an empty paragraph still advances a full line.
/// `measure` reports the pixel width of a candidate line in the target font.
pub fn wrap_text<F>(
    measure: F,
    text: &str,
    x: f32,
    y: f32,
    max_width: f32,
    line_height: f32,
) -> Vec<Line>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let paragraphs: Vec<&str> = text.split('\n').map(str::trim).collect();
    let last_paragraph = paragraphs.len() - 1;
    let mut cursor_y = y;

    for (index, paragraph) in paragraphs.iter().enumerate() {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        let mut line = String::new();

        for (word_index, word) in words.iter().enumerate() {
            let candidate = if line.is_empty() {
                (*word).to_string()
            } else {
                format!("{line} {word}")
            };
            if measure(&candidate) > max_width && !line.is_empty() {
                lines.push(Line {
                    text: std::mem::take(&mut line),
                    x,
                    y: cursor_y,
                });
                cursor_y += line_height;
                line = (*word).to_string();
            } else {
                line = candidate;
            }
            if word_index == words.len() - 1 && !line.is_empty() {
                lines.push(Line {
                    text: std::mem::take(&mut line),
                    x,
                    y: cursor_y,
                });
                cursor_y += line_height;
            }
        }

        if words.is_empty() {
            cursor_y += line_height;
        }
        if index != last_paragraph {
            cursor_y += line_height * 0.3;
        }
    }

    lines
}
