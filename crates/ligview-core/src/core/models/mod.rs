//! # Core Models Module
//!
//! Data structures describing a parsed ligand: atoms, the bonds between them, and the
//! molecule that owns both.
//!
//! ## Key Components
//!
//! - [`atom`] - A single decoded atom record
//! - [`topology`] - Undirected bonds between atoms
//! - [`molecule`] - The immutable atom/bond graph handed to consumers
//! - [`builder`] - Incremental construction of a molecule, including serial-based bond linking
//! - [`ids`] - Stable identifiers for atoms within a molecule
//!
//! ## Usage
//!
//! ```
//! use ligview::core::models::{atom::Atom, builder::MoleculeBuilder};
//!
//! let mut builder = MoleculeBuilder::new();
//! builder.add_atom(Atom::new("1", "N"));
//! builder.add_atom(Atom::new("2", "CA"));
//! builder.link("1", "2");
//!
//! let molecule = builder.build();
//! assert_eq!(molecule.bond_count(), 1);
//! ```

pub mod atom;
pub mod builder;
pub mod ids;
pub mod molecule;
pub mod topology;
