use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Word-wrap text to the given width, breaking overlong words by character.
/// Whitespace runs collapse to single spaces; blank input lines are kept so
/// paragraph gaps retain their height. Returns no lines for a zero width.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        if input_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut width = 0;

        for word in input_line.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                // Word wider than the line: flush and hard-break it.
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    width = 0;
                }
                lines.extend(break_chars(word, max_width));
                continue;
            }

            let space = usize::from(!current.is_empty());
            if width + space + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                width = word_width;
            } else {
                if space == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                width += space + word_width;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Greedy per-character break for words wider than the available width.
fn break_chars(word: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut width = 0;

    for ch in word.chars() {
        let w = char_width(ch);

        // Zero-width characters (combining marks) ride along for free.
        if w == 0 {
            current.push(ch);
            continue;
        }

        if width + w > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            width = 0;
        }

        current.push(ch);
        width += w;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
