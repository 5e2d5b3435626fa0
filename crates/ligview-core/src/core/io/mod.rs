//! Provides input/output functionality for molecular file formats.
//!
//! Reading is split into two passes over the text: [`record`] classifies lines, and
//! [`pdb`] decodes atoms and links CONECT bonds into a molecule. Data-quality problems
//! found along the way are collected in a [`report::ParseReport`] instead of failing.

pub mod pdb;
pub mod record;
pub mod report;
pub mod traits;
