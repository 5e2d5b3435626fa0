//! Line scanning and record classification.
//!
//! Classification is by substring containment, not by the record name in columns 1-6:
//! any line containing `ATOM` or `HETATM` is an atom record, otherwise any line containing
//! `CONECT` is a connectivity record. This is deliberately loose, so a `REMARK` that
//! mentions `ATOM` is still decoded as an atom.

const ATOM_TOKEN: &str = "ATOM";
// "HETATM" does not contain "ATOM", so it needs its own token.
const HETATM_TOKEN: &str = "HETATM";
const CONECT_TOKEN: &str = "CONECT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// An ATOM or HETATM style record.
    Atom,
    /// A CONECT style record.
    Connect,
    /// Anything else; never retained by [`scan`].
    Other,
}

impl RecordKind {
    /// Classifies a single line.
    pub fn classify(line: &str) -> Self {
        if line.contains(ATOM_TOKEN) || line.contains(HETATM_TOKEN) {
            RecordKind::Atom
        } else if line.contains(CONECT_TOKEN) {
            RecordKind::Connect
        } else {
            RecordKind::Other
        }
    }
}

/// A classified line, borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub kind: RecordKind,
    /// 1-based line number in the scanned text.
    pub line_number: usize,
    pub raw: &'a str,
}

/// Splits `text` on `\n` and keeps the atom and connectivity records, in order.
pub fn scan(text: &str) -> Vec<Record<'_>> {
    lines(text)
        .filter_map(|(line_number, raw)| match RecordKind::classify(raw) {
            RecordKind::Other => None,
            kind => Some(Record {
                kind,
                line_number,
                raw,
            }),
        })
        .collect()
}

/// Counts the lines `scan` looks at. Empty input has no lines.
pub fn line_count(text: &str) -> usize {
    lines(text).count()
}

fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut split = text.split('\n');
    if text.is_empty() {
        split.next();
    }
    split.enumerate().map(|(i, line)| (i + 1, line))
}
