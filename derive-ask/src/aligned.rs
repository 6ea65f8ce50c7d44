//! Width-bound text alignment for prompt labels.

use std::fmt;

/// Horizontal alignment within the target width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Word-wraps text into lines of at most `width` characters and aligns each
/// line. Words longer than the width are chunked; a chunk shorter than 3
/// characters is not started at the end of a line.
///
/// The prompt engine renders labels right-aligned at the prompt width, so
/// long labels wrap into a block ending just before the input cursor.
pub struct AlignedText {
    width: usize,
    align: Align,
    rendered: String,
}

impl AlignedText {
    pub fn new(width: usize, align: Align, text: &str) -> Self {
        let mut this = Self {
            width,
            align,
            rendered: String::new(),
        };
        this.rendered = this.render(text);
        this
    }

    fn render(&self, text: &str) -> String {
        let cleaned = clean(text);
        let mut out = String::new();
        for line in cleaned.split('\n') {
            out.push_str(&self.paragraph(line));
        }
        out
    }

    fn paragraph(&self, line: &str) -> String {
        let mut lines: Vec<String> = vec![String::new()];
        for word in line.split(' ') {
            self.add_word(word, &mut lines);
        }

        let mut paragraph = String::new();
        for line in &lines {
            paragraph.push_str(&self.align_line(line));
            paragraph.push('\n');
        }
        paragraph
    }

    fn add_word(&self, word: &str, lines: &mut Vec<String>) {
        let word_len = word.chars().count();
        let last_len = lines.last().map_or(0, |line| line.chars().count());

        if word_len > self.width {
            // chunk an over-long word; the smallest starter chunk is 3 chars
            let mut at = self.width.saturating_sub(last_len + 1);
            if at < 3 {
                at = self.width;
            }
            let head: String = word.chars().take(at).collect();
            let tail: String = word.chars().skip(at).collect();
            self.add_word(&head, lines);
            self.add_word(&tail, lines);
        } else if last_len + 1 + word_len > self.width {
            lines.push(word.to_string());
        } else {
            let last = lines.last_mut().expect("lines starts non-empty");
            let joined = format!("{last} {word}").trim().to_string();
            *last = joined;
        }
    }

    fn align_line(&self, line: &str) -> String {
        let len = line.chars().count();
        match self.align {
            Align::Left => line.to_string(),
            Align::Center => {
                let w = self.width - (self.width.saturating_sub(len)) / 2;
                format!("{line:>w$}")
            }
            Align::Right => format!("{line:>w$}", w = self.width),
        }
    }
}

impl fmt::Display for AlignedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rendered)
    }
}

/// Collapse runs of blanks to one space, runs of newlines to paragraph
/// breaks, and trim the surroundings.
fn clean(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    let mut pending_newlines = 0usize;
    for ch in text.chars() {
        match ch {
            ' ' | '\t' | '\r' => pending_space = true,
            '\n' => {
                pending_newlines += 1;
                pending_space = false;
            }
            _ => {
                if pending_newlines > 0 && !out.is_empty() {
                    out.push_str(if pending_newlines > 1 { "\n\n" } else { "\n" });
                } else if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_newlines = 0;
                pending_space = false;
                out.push(ch);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_aligns_a_short_line() {
        let text = AlignedText::new(10, Align::Right, "hello");
        assert_eq!(text.to_string(), "     hello\n");
    }

    #[test]
    fn wraps_at_the_width() {
        let text = AlignedText::new(11, Align::Right, "hello world again");
        assert_eq!(text.to_string(), "hello world\n      again\n");
    }

    #[test]
    fn left_alignment_needs_no_padding() {
        let text = AlignedText::new(10, Align::Left, "hi there");
        assert_eq!(text.to_string(), "hi there\n");
    }

    #[test]
    fn centers_within_the_width() {
        // width 10, len 4: right-align in width 10 - 3 = 7
        let text = AlignedText::new(10, Align::Center, "ered");
        assert_eq!(text.to_string(), "   ered\n");
    }

    #[test]
    fn chunks_words_longer_than_the_width() {
        let text = AlignedText::new(10, Align::Left, "abcdefghijklm");
        assert_eq!(text.to_string(), "abcdefghi\njklm\n");
    }

    #[test]
    fn no_tiny_chunk_at_the_end_of_a_full_line() {
        let text = AlignedText::new(10, Align::Left, "abcdefgh xxxxxxxxxxx");
        assert_eq!(text.to_string(), "abcdefgh\nxxxxxxxxxx\nx\n");
    }

    #[test]
    fn collapses_whitespace_runs() {
        let text = AlignedText::new(20, Align::Left, "  a \t b\r\n\n\n\nc  ");
        assert_eq!(text.to_string(), "a b\n\nc\n");
    }
}
