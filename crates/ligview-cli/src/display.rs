use crate::config::ReportConfig;
use ligview::Molecule;
use ligview::core::io::report::ParseReport;
use ligview::workflows::summary::MoleculeSummary;
use std::io::{self, Write};

/// Writes the human-readable description of a parsed structure.
pub fn render(
    out: &mut impl Write,
    title: &str,
    molecule: &Molecule,
    report: &ParseReport,
    options: &ReportConfig,
) -> io::Result<()> {
    let summary = MoleculeSummary::from_molecule(molecule);
    write_summary(out, title, &summary, report)?;
    if options.list_atoms {
        write_atoms(out, molecule)?;
    }
    if options.list_bonds {
        write_bonds(out, molecule)?;
    }
    if options.show_diagnostics {
        write_diagnostics(out, report)?;
    }
    Ok(())
}

fn write_summary(
    out: &mut impl Write,
    title: &str,
    summary: &MoleculeSummary,
    report: &ParseReport,
) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    let formula = summary.formula();
    if !formula.is_empty() {
        writeln!(out, "  Formula:    {}", formula)?;
    }
    writeln!(out, "  Atoms:      {}", summary.atom_count)?;
    writeln!(
        out,
        "  Bonds:      {} ({} duplicate mentions)",
        summary.bond_count, report.duplicate_bonds
    )?;
    writeln!(out, "  Fragments:  {}", summary.components)?;
    if summary.isolated_atoms > 0 {
        writeln!(out, "  Isolated:   {}", summary.isolated_atoms)?;
    }
    if summary.unknown_elements > 0 {
        writeln!(out, "  Unknown elements: {}", summary.unknown_elements)?;
    }
    if let Some(c) = summary.centroid {
        writeln!(out, "  Centroid:   ({:.3}, {:.3}, {:.3})", c.x, c.y, c.z)?;
    }
    if let Some((min, max)) = summary.extent {
        let size = max - min;
        writeln!(
            out,
            "  Extent:     {:.3} x {:.3} x {:.3} Å",
            size.x, size.y, size.z
        )?;
    }
    writeln!(
        out,
        "  Records:    {} atom, {} CONECT, {} ignored of {} lines",
        report.atom_records, report.connect_records, report.ignored_lines, report.total_lines
    )
}

fn write_atoms(out: &mut impl Write, molecule: &Molecule) -> io::Result<()> {
    writeln!(out, "\nAtoms:")?;
    for (_, atom) in molecule.atoms_iter() {
        let position = atom
            .position
            .map(|p| format!("{:>9.3}{:>9.3}{:>9.3}", p.x, p.y, p.z))
            .unwrap_or_else(|| format!("{:>27}", "-"));
        writeln!(
            out,
            "  {:>5} {:<4} {:<3} {:<2} {} {}",
            atom.serial,
            atom.name,
            atom.residue_name,
            atom.element.as_deref().unwrap_or("?"),
            position,
            atom.bonds.len()
        )?;
    }
    Ok(())
}

fn write_bonds(out: &mut impl Write, molecule: &Molecule) -> io::Result<()> {
    writeln!(out, "\nBonds:")?;
    for bond in molecule.bonds() {
        let (Some(a), Some(b)) = (molecule.atom(bond.atom1_id), molecule.atom(bond.atom2_id))
        else {
            continue;
        };
        match molecule.bond_length(bond) {
            Some(length) => writeln!(
                out,
                "  {}({}) - {}({})  {:.3} Å",
                a.name, a.serial, b.name, b.serial, length
            )?,
            None => writeln!(out, "  {}({}) - {}({})", a.name, a.serial, b.name, b.serial)?,
        }
    }
    Ok(())
}

fn write_diagnostics(out: &mut impl Write, report: &ParseReport) -> io::Result<()> {
    if report.is_clean() {
        return Ok(());
    }
    writeln!(out, "\nDiagnostics ({}):", report.diagnostics.len())?;
    for diagnostic in &report.diagnostics {
        writeln!(out, "  - {}", diagnostic)?;
    }
    Ok(())
}
