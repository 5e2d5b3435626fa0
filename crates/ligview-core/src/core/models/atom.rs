use super::ids::AtomId;
use nalgebra::Point3;
use std::collections::BTreeSet;

/// Represents a single atom decoded from an ATOM/HETATM record.
///
/// Every field follows the tolerant decoding policy of the PDB reader: a field whose
/// columns are missing or unreadable is left empty (or `None`) rather than rejected,
/// so a malformed record still yields an atom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Atom {
    /// The serial number exactly as written in the file (trimmed), e.g. `"1"`.
    ///
    /// Kept as text because it is the join key for CONECT records, which are
    /// matched by exact string comparison.
    pub serial: String,
    /// The atom name (e.g. "C1", "N"), trimmed.
    pub name: String,
    /// The residue (ligand component) name, trimmed.
    pub residue_name: String,
    /// The canonical element symbol (e.g. "C", "Cl"), if it could be determined.
    pub element: Option<String>,
    /// The 3D coordinates in Angstroms, if all three were readable.
    pub position: Option<Point3<f64>>,
    /// Whether the record was a HETATM record.
    pub hetero: bool,
    /// The atoms this atom is bonded to.
    pub bonds: BTreeSet<AtomId>,
}

impl Atom {
    /// Creates a new `Atom` with the given serial and name and no other data.
    ///
    /// # Arguments
    ///
    /// * `serial` - The serial number text.
    /// * `name` - The atom name.
    pub fn new(serial: &str, name: &str) -> Self {
        Self {
            serial: serial.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Returns `true` when either identifying field decoded empty.
    pub fn is_incomplete(&self) -> bool {
        self.serial.is_empty() || self.name.is_empty()
    }

    /// Returns `true` if this atom has a bond to `other`.
    pub fn is_bonded_to(&self, other: AtomId) -> bool {
        self.bonds.contains(&other)
    }
}
