//! # ligview Core Library
//!
//! Turns the text of a PDB ligand file into an in-memory graph of atoms and bonds that a
//! 3D viewer can draw: one sphere per atom, one connector per bond.
//!
//! Parsing is total. Malformed lines yield atoms with empty fields or are ignored, and
//! CONECT entries that reference unknown atoms are skipped, so [`parse`] always returns a
//! [`Molecule`]. Use [`parse_with_report`] to see what was tolerated.
//!
//! ## Layers
//!
//! - **[`core`]**: the data model (`Molecule`, `Atom`, `Bond`), the record scanner and
//!   the PDB reader/writer.
//! - **[`workflows`]**: application-facing helpers, such as a session that holds the
//!   ligand currently on display and a presentation summary.
//!
//! ```
//! let text = "\
//! ATOM      1  N   ALA A   1      11.104  13.207   8.123  1.00 20.00           N
//! ATOM      2  CA  ALA A   1      12.560  13.104   8.456  1.00 20.00           C
//! CONECT    1    2
//! ";
//! let molecule = ligview::parse(text);
//! assert_eq!(molecule.atom_count(), 2);
//! assert_eq!(molecule.bond_count(), 1);
//! ```

pub mod core;
pub mod workflows;

pub use crate::core::io::pdb::{PdbError, PdbFile, parse, parse_with_report};
pub use crate::core::models::molecule::Molecule;
