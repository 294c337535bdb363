use crate::{BLANK_LINE, COMMENT_PREFIX, MAX_WIDTH};

/// Word-wraps `text` into prefixed comment lines.
///
/// Breaks only at whitespace boundaries, against a budget of
/// `MAX_WIDTH - prefix - 1` text columns. A word wider than the budget gets
/// a line of its own rather than being split. Empty input still produces one
/// prefixed line.
pub fn wrap_paragraph(text: &str) -> String {
    let budget = MAX_WIDTH - COMMENT_PREFIX.len() - 1;
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            width = word_width;
        } else if width + 1 + word_width <= budget {
            current.push(' ');
            current.push_str(word);
            width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            width = word_width;
        }
    }
    lines.push(current);

    lines
        .iter()
        .map(|line| format!("{COMMENT_PREFIX}{line}\n"))
        .collect()
}

/// Wraps each text and joins the resulting paragraphs with a blank comment
/// line.
pub fn paragraphs<'a>(texts: impl IntoIterator<Item = &'a str>) -> String {
    texts
        .into_iter()
        .map(wrap_paragraph)
        .collect::<Vec<_>>()
        .join(BLANK_LINE)
}
