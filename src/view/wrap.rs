//! Word wrapping for tagged lines.
//!
//! Every renderer wraps markup to the area width before it windows or
//! scrolls, so scroll positions are measured in screen rows.

use crate::model::markup::{Line, Tag};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a line in terminal columns.
pub fn line_width(line: &Line) -> usize {
    line.spans.iter().map(|s| s.text.width()).sum()
}

/// Word-wrap one line to `max_width` columns, keeping each span's tag.
///
/// Breaks at spaces when possible and mid-word for words longer than a row.
/// Spaces at the start of a continuation row are dropped.
pub fn wrap_line(line: &Line, max_width: usize) -> Vec<Line> {
    if max_width == 0 || line_width(line) <= max_width {
        return vec![line.clone()];
    }

    let mut rows = Vec::new();
    let mut current = Line::new();
    let mut current_width = 0;

    for (segment, tag) in segments(line) {
        let segment_width = segment.width();
        if current_width + segment_width <= max_width {
            current.push(segment, tag);
            current_width += segment_width;
            continue;
        }
        let segment = if current_width == 0 {
            segment
        } else {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
            match segment.trim_start() {
                "" => continue,
                trimmed => trimmed,
            }
        };
        place(
            &mut rows,
            &mut current,
            &mut current_width,
            segment,
            tag,
            max_width,
        );
    }

    if !current.spans.is_empty() {
        rows.push(current);
    }
    rows
}

/// Wrap every line; blank lines stay one row.
pub fn wrap_lines(lines: &[Line], max_width: usize) -> Vec<Line> {
    lines
        .iter()
        .flat_map(|line| wrap_line(line, max_width))
        .collect()
}

/// Split spans into runs of leading spaces plus one word.
fn segments(line: &Line) -> Vec<(&str, Tag)> {
    let mut out = Vec::new();
    for span in &line.spans {
        let text = span.text.as_str();
        let mut start = 0;
        while start < text.len() {
            let rest = &text[start..];
            let spaces = rest.len() - rest.trim_start_matches(' ').len();
            let word = rest[spaces..].find(' ').unwrap_or(rest.len() - spaces);
            let end = start + spaces + word;
            out.push((&text[start..end], span.tag));
            start = end;
        }
    }
    out
}

/// Append `segment` to the current row, breaking it across rows as needed.
fn place(
    rows: &mut Vec<Line>,
    current: &mut Line,
    current_width: &mut usize,
    mut segment: &str,
    tag: Tag,
    max_width: usize,
) {
    while !segment.is_empty() {
        let available = max_width.saturating_sub(*current_width);
        let (split, taken_width) = fitting_prefix(segment, available);
        if split == 0 && *current_width > 0 {
            rows.push(std::mem::take(current));
            *current_width = 0;
            continue;
        }
        // A glyph wider than the whole row still has to go somewhere
        let split = if split == 0 {
            segment.chars().next().map_or(segment.len(), char::len_utf8)
        } else {
            split
        };
        let (head, rest) = segment.split_at(split);
        current.push(head, tag);
        *current_width += if taken_width == 0 {
            head.width()
        } else {
            taken_width
        };
        segment = rest;
    }
}

/// Byte length and width of the longest prefix of `text` within `available`
/// columns.
fn fitting_prefix(text: &str, available: usize) -> (usize, usize) {
    let mut width = 0;
    for (index, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(1);
        if width + w > available {
            return (index, width);
        }
        width += w;
    }
    (text.len(), width)
}
