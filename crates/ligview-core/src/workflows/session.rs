use crate::core::io::pdb::parse_with_report;
use crate::core::io::report::ParseReport;
use crate::core::models::molecule::Molecule;
use tracing::{info, instrument, warn};

/// Holds the ligand currently on display.
///
/// Every load replaces the previous molecule and report as a whole; nothing from an
/// earlier parse survives into the next one.
#[derive(Debug, Clone, Default)]
pub struct LigandSession {
    ligand_id: Option<String>,
    molecule: Molecule,
    report: ParseReport,
}

impl LigandSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `text` as the structure of `ligand_id` and makes it current.
    ///
    /// # Return
    ///
    /// The newly loaded molecule, which may be empty.
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    pub fn load(&mut self, ligand_id: &str, text: &str) -> &Molecule {
        let (molecule, report) = parse_with_report(text);

        if molecule.is_empty() {
            warn!("Ligand '{}' has no atoms to display.", ligand_id);
        } else {
            info!(
                "Loaded ligand '{}': {} atoms, {} bonds.",
                ligand_id,
                molecule.atom_count(),
                molecule.bond_count()
            );
        }

        self.ligand_id = Some(ligand_id.to_string());
        self.molecule = molecule;
        self.report = report;
        &self.molecule
    }

    pub fn ligand_id(&self) -> Option<&str> {
        self.ligand_id.as_deref()
    }

    pub fn molecule(&self) -> &Molecule {
        &self.molecule
    }

    pub fn report(&self) -> &ParseReport {
        &self.report
    }

    /// Returns `true` if the current molecule has at least one atom.
    pub fn has_structure(&self) -> bool {
        !self.molecule.is_empty()
    }

    /// Drops the current ligand.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
