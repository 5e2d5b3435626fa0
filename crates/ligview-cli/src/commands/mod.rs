pub mod fetch;
pub mod inspect;

use crate::config::ReportConfig;
use crate::display;
use crate::error::{CliError, Result};
use ligview::Molecule;
use ligview::core::io::report::ParseReport;
use std::io::Write;

/// Fails with [`CliError::EmptyStructure`] when there is nothing to draw.
pub fn ensure_structure(title: &str, molecule: &Molecule) -> Result<()> {
    if molecule.is_empty() {
        return Err(CliError::EmptyStructure(title.to_string()));
    }
    Ok(())
}

pub fn present(
    out: &mut impl Write,
    title: &str,
    molecule: &Molecule,
    report: &ParseReport,
    options: &ReportConfig,
) -> Result<()> {
    ensure_structure(title, molecule)?;
    display::render(out, title, molecule, report, options)?;
    out.flush()?;
    Ok(())
}
