use super::atom::Atom;
use super::ids::AtomId;
use super::molecule::Molecule;
use super::topology::Bond;

/// The result of asking the builder to bond two serials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// A new bond was created.
    Linked,
    /// The two atoms were already bonded; nothing changed.
    AlreadyLinked,
    /// Source and target were the same serial; self-bonds are never created.
    SelfBond,
    /// The contained serial does not belong to any atom.
    Unresolved(String),
}

/// Incrementally assembles a [`Molecule`].
///
/// Atoms are added in file order, then bonds are linked by serial text. Once
/// [`build`](Self::build) is called the molecule can no longer change.
#[derive(Debug, Default)]
pub struct MoleculeBuilder {
    molecule: Molecule,
}

impl MoleculeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a builder pre-populated with `atoms`, in iteration order.
    pub fn from_atoms(atoms: impl IntoIterator<Item = Atom>) -> Self {
        let mut builder = Self::new();
        for atom in atoms {
            builder.add_atom(atom);
        }
        builder
    }

    /// Returns `true` if an atom already owns `serial`.
    pub fn contains_serial(&self, serial: &str) -> bool {
        self.molecule.serial_map.contains_key(serial)
    }

    /// Adds an atom and registers its serial for bond lookup.
    ///
    /// Any bonds the atom carried are discarded, since their IDs belong to another
    /// molecule. The serial is only registered if it is non-empty and not yet taken.
    pub fn add_atom(&mut self, mut atom: Atom) -> AtomId {
        atom.bonds.clear();
        let serial = atom.serial.clone();
        let atom_id = self.molecule.atoms.insert(atom);
        self.molecule.order.push(atom_id);

        if !serial.is_empty() {
            self.molecule.serial_map.entry(serial).or_insert(atom_id);
        }
        atom_id
    }

    /// Bonds the atoms owning `source` and `target`.
    ///
    /// Linking is idempotent and symmetric: both atoms record each other and a
    /// repeated pair, in either direction, is a no-op.
    pub fn link(&mut self, source: &str, target: &str) -> LinkOutcome {
        if source == target {
            return LinkOutcome::SelfBond;
        }
        let Some(atom1_id) = self.molecule.find_atom_by_serial(source) else {
            return LinkOutcome::Unresolved(source.to_string());
        };
        let Some(atom2_id) = self.molecule.find_atom_by_serial(target) else {
            return LinkOutcome::Unresolved(target.to_string());
        };

        if self.molecule.atoms[atom1_id].is_bonded_to(atom2_id) {
            return LinkOutcome::AlreadyLinked;
        }

        self.molecule.atoms[atom1_id].bonds.insert(atom2_id);
        self.molecule.atoms[atom2_id].bonds.insert(atom1_id);
        self.molecule.bonds.push(Bond::new(atom1_id, atom2_id));
        LinkOutcome::Linked
    }

    pub fn build(self) -> Molecule {
        self.molecule
    }
}
