use crate::core::models::molecule::Molecule;
use crate::core::utils::geometry;
use nalgebra::Point3;
use std::collections::BTreeMap;

/// Presentation-level facts about a molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeSummary {
    pub atom_count: usize,
    pub bond_count: usize,
    /// Atom counts per element symbol.
    pub composition: BTreeMap<String, usize>,
    /// Atoms whose element could not be determined.
    pub unknown_elements: usize,
    /// Atoms without any bond.
    pub isolated_atoms: usize,
    /// Connected components of the bond graph.
    pub components: usize,
    pub centroid: Option<Point3<f64>>,
    /// Axis-aligned bounding box of the known atom positions.
    pub extent: Option<(Point3<f64>, Point3<f64>)>,
}

impl MoleculeSummary {
    pub fn from_molecule(molecule: &Molecule) -> Self {
        let mut composition = BTreeMap::new();
        let mut unknown_elements = 0;
        let mut isolated_atoms = 0;

        for (_, atom) in molecule.atoms_iter() {
            match &atom.element {
                Some(symbol) => *composition.entry(symbol.clone()).or_insert(0) += 1,
                None => unknown_elements += 1,
            }
            if atom.bonds.is_empty() {
                isolated_atoms += 1;
            }
        }

        Self {
            atom_count: molecule.atom_count(),
            bond_count: molecule.bond_count(),
            composition,
            unknown_elements,
            isolated_atoms,
            components: molecule.connected_components().len(),
            centroid: molecule.centroid(),
            extent: geometry::bounding_box(molecule.atoms_iter().filter_map(|(_, a)| a.position)),
        }
    }

    /// Returns the molecular formula in Hill order.
    ///
    /// Carbon comes first and hydrogen second when carbon is present; every other
    /// element (and hydrogen, without carbon) follows alphabetically.
    pub fn formula(&self) -> String {
        let mut formula = String::new();
        let mut append = |symbol: &str, count: usize| {
            formula.push_str(symbol);
            if count > 1 {
                formula.push_str(&count.to_string());
            }
        };

        let has_carbon = self.composition.contains_key("C");
        if has_carbon {
            for symbol in ["C", "H"] {
                if let Some(&count) = self.composition.get(symbol) {
                    append(symbol, count);
                }
            }
        }
        for (symbol, &count) in &self.composition {
            if has_carbon && (symbol == "C" || symbol == "H") {
                continue;
            }
            append(symbol, count);
        }
        formula
    }
}
