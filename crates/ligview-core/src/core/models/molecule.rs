use super::atom::Atom;
use super::ids::AtomId;
use super::topology::Bond;
use crate::core::utils::geometry;
use nalgebra::Point3;
use slotmap::{SecondaryMap, SlotMap};
use std::collections::{HashMap, VecDeque};

/// A parsed ligand: its atoms in file order and the undirected bond graph between them.
///
/// A `Molecule` is produced by [`MoleculeBuilder`](super::builder::MoleculeBuilder) and is
/// read-only afterwards. Bonds are stored twice on purpose: once as a flat list for
/// consumers that draw one connector per bond, and once as each atom's `bonds` set.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    /// Primary storage for atoms.
    pub(super) atoms: SlotMap<AtomId, Atom>,
    /// Atom IDs in the order the records were encountered.
    pub(super) order: Vec<AtomId>,
    /// One entry per undirected bond, in the order the bonds were first linked.
    pub(super) bonds: Vec<Bond>,
    /// Serial text to atom lookup. Holds the first atom seen for each non-empty serial.
    pub(super) serial_map: HashMap<String, AtomId>,
}

impl Molecule {
    /// Creates a new, empty molecule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an atom by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The atom ID to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the atom exists, otherwise `None`.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Returns an iterator over all atoms in file order.
    ///
    /// # Return
    ///
    /// An iterator yielding `(AtomId, &Atom)` pairs.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.order.iter().map(|&id| (id, &self.atoms[id]))
    }

    /// Returns a slice of all bonds in the molecule.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn atom_count(&self) -> usize {
        self.order.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Returns `true` if the molecule has no atoms.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Finds the atom that owns a serial number.
    ///
    /// Matching is by exact text. When several atoms share a serial, the first one
    /// in file order owns it.
    ///
    /// # Arguments
    ///
    /// * `serial` - The serial text to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` if an atom owns the serial, otherwise `None`.
    pub fn find_atom_by_serial(&self, serial: &str) -> Option<AtomId> {
        self.serial_map.get(serial).copied()
    }

    /// Retrieves the bonded neighbors of an atom.
    ///
    /// # Arguments
    ///
    /// * `atom_id` - The ID of the atom to query.
    ///
    /// # Return
    ///
    /// Returns the neighbor IDs, or `None` if the atom does not exist.
    pub fn neighbors(&self, atom_id: AtomId) -> Option<impl Iterator<Item = AtomId> + '_> {
        self.atoms
            .get(atom_id)
            .map(|atom| atom.bonds.iter().copied())
    }

    /// Computes the geometric center of all atoms with known coordinates.
    ///
    /// # Return
    ///
    /// Returns `None` if no atom has a position.
    pub fn centroid(&self) -> Option<Point3<f64>> {
        geometry::centroid(self.atoms_iter().filter_map(|(_, atom)| atom.position))
    }

    /// Returns the endpoint coordinates of every bond whose two atoms both have positions.
    ///
    /// This is the minimal input a renderer needs to draw one connector per bond.
    pub fn bond_segments(&self) -> impl Iterator<Item = (Point3<f64>, Point3<f64>)> + '_ {
        self.bonds.iter().filter_map(|bond| {
            let start = self.atoms.get(bond.atom1_id)?.position?;
            let end = self.atoms.get(bond.atom2_id)?.position?;
            Some((start, end))
        })
    }

    /// Returns the length of a bond in Angstroms, if both atoms have positions.
    pub fn bond_length(&self, bond: &Bond) -> Option<f64> {
        let start = self.atoms.get(bond.atom1_id)?.position?;
        let end = self.atoms.get(bond.atom2_id)?.position?;
        Some(geometry::distance(&start, &end))
    }

    /// Splits the atoms into connected components of the bond graph.
    ///
    /// Components are ordered by their first atom in file order, and atoms within a
    /// component are listed in breadth-first order from that atom.
    pub fn connected_components(&self) -> Vec<Vec<AtomId>> {
        let mut visited: SecondaryMap<AtomId, ()> = SecondaryMap::new();
        let mut components = Vec::new();

        for &start in &self.order {
            if visited.contains_key(start) {
                continue;
            }
            visited.insert(start, ());
            let mut component = Vec::new();
            let mut queue = VecDeque::from([start]);

            while let Some(current) = queue.pop_front() {
                component.push(current);
                for &next in &self.atoms[current].bonds {
                    if visited.insert(next, ()).is_none() {
                        queue.push_back(next);
                    }
                }
            }
            components.push(component);
        }

        components
    }
}
