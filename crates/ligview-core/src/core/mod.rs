//! # Core Module
//!
//! The building blocks of ligview: the molecule data model, the PDB reader and writer,
//! and the small column, element and geometry helpers they share.
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bonds and the molecule graph
//! - **File I/O** ([`io`]) - Record scanning, tolerant PDB decoding and bond linking
//! - **Utilities** ([`utils`]) - Fixed-column extraction, element symbols, geometry

pub mod io;
pub mod models;
pub mod utils;
