//! Fixed-column field extraction for PDB-style records.
//!
//! Offsets are 0-based, inclusive at both ends, and counted in characters. Extraction
//! never fails: ranges running past the end of the line are clamped, and ranges that
//! start past the end or are inverted yield an empty field.

/// Returns the raw text of columns `start..=end` of `line`.
pub fn slice_columns(line: &str, start: usize, end: usize) -> &str {
    slice_with(line, &char_boundaries(line), start, end)
}

/// Returns columns `start..=end` of `line` with surrounding whitespace removed.
pub fn field(line: &str, start: usize, end: usize) -> &str {
    slice_columns(line, start, end).trim()
}

/// Splits the columns from `start` onwards into consecutive fields of `width` characters.
///
/// The last field may be shorter than `width`. Fields are trimmed but empty ones are kept,
/// so callers can tell a blank slot from a missing one.
pub fn fixed_width_fields(line: &str, start: usize, width: usize) -> Vec<&str> {
    if width == 0 {
        return Vec::new();
    }
    let boundaries = char_boundaries(line);
    let length = boundaries.len() - 1;
    (start..length)
        .step_by(width)
        .map(|from| slice_with(line, &boundaries, from, from + width - 1).trim())
        .collect()
}

/// Byte offset of every character in `line`, followed by `line.len()`.
fn char_boundaries(line: &str) -> Vec<usize> {
    line.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .collect()
}

fn slice_with<'a>(line: &'a str, boundaries: &[usize], start: usize, end: usize) -> &'a str {
    if end < start {
        return "";
    }
    let Some(&from) = boundaries.get(start) else {
        return "";
    };
    let to = boundaries
        .get(end.saturating_add(1))
        .copied()
        .unwrap_or(line.len());
    &line[from..to]
}
