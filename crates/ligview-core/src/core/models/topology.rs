use super::ids::AtomId;

/// An undirected bond between two atoms of a molecule.
///
/// `atom1_id` is the atom that was linked first (the CONECT source); the bond
/// itself carries no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1_id: AtomId,
    pub atom2_id: AtomId,
}

impl Bond {
    pub fn new(atom1_id: AtomId, atom2_id: AtomId) -> Self {
        Self { atom1_id, atom2_id }
    }
}
