//! # Workflows Module
//!
//! High-level entry points for applications that display ligands.
//!
//! - **Session** ([`session`]) - Keeps the ligand currently on display and replaces it
//!   wholesale on every load.
//! - **Summary** ([`summary`]) - Derives counts, formula and geometry for presentation.

pub mod session;
pub mod summary;
