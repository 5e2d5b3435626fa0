use std::fmt;

/// A data-quality observation made while parsing.
///
/// None of these stop a parse; they describe input the parser tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An atom record whose serial or name decoded empty.
    IncompleteAtomRecord { line: usize },
    /// An atom record reusing a serial already owned by an earlier atom.
    DuplicateSerial { line: usize, serial: String },
    /// A CONECT serial that matches no atom.
    UnresolvedBondReference { line: usize, serial: String },
    /// A CONECT record bonding an atom to itself.
    SelfBond { line: usize, serial: String },
    /// The input contained no atom records at all.
    EmptyStructure,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteAtomRecord { line } => {
                write!(f, "line {}: atom record is missing its serial or name", line)
            }
            Self::DuplicateSerial { line, serial } => write!(
                f,
                "line {}: serial '{}' is already used by an earlier atom",
                line, serial
            ),
            Self::UnresolvedBondReference { line, serial } => write!(
                f,
                "line {}: bond references unknown atom serial '{}'",
                line, serial
            ),
            Self::SelfBond { line, serial } => {
                write!(f, "line {}: atom '{}' bonded to itself", line, serial)
            }
            Self::EmptyStructure => write!(f, "no atom records found"),
        }
    }
}

/// Counters and diagnostics collected over one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub total_lines: usize,
    /// Lines classified as neither atom nor connectivity records.
    pub ignored_lines: usize,
    pub atom_records: usize,
    pub connect_records: usize,
    pub bonds_linked: usize,
    /// Bond pairs mentioned again after they were already linked.
    pub duplicate_bonds: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    /// Returns `true` if nothing noteworthy happened.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns `true` if the input had no atom records.
    pub fn is_empty_structure(&self) -> bool {
        self.atom_records == 0
    }

    pub fn unresolved_references(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::UnresolvedBondReference { .. }))
            .count()
    }

    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
