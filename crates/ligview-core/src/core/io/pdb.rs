use crate::core::io::record::{self, Record, RecordKind};
use crate::core::io::report::{Diagnostic, ParseReport};
use crate::core::io::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::builder::{LinkOutcome, MoleculeBuilder};
use crate::core::models::ids::AtomId;
use crate::core::models::molecule::Molecule;
use crate::core::utils::{columns, elements};
use nalgebra::Point3;
use slotmap::SecondaryMap;
use std::io::{self, BufRead, Read, Write};
use thiserror::Error;
use tracing::{debug, instrument, trace, warn};

// 0-based, inclusive column ranges of the ATOM/HETATM layout.
const SERIAL_COLUMNS: (usize, usize) = (6, 10);
const NAME_COLUMNS: (usize, usize) = (12, 15);
const RESIDUE_NAME_COLUMNS: (usize, usize) = (17, 19);
const X_COLUMNS: (usize, usize) = (30, 37);
const Y_COLUMNS: (usize, usize) = (38, 45);
const Z_COLUMNS: (usize, usize) = (46, 53);
const ELEMENT_COLUMNS: (usize, usize) = (76, 77);

const CONECT_FIRST_COLUMN: usize = 6;
const CONECT_FIELD_WIDTH: usize = 5;
const CONECT_TARGETS_PER_LINE: usize = 4;
const COORDINATE_WIDTH: usize = 8;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Input is not valid UTF-8 text (invalid byte at offset {offset})")]
    InvalidEncoding { offset: usize },
}

/// Converts raw bytes to text, rejecting anything that is not UTF-8.
pub fn decode_text(bytes: Vec<u8>) -> Result<String, PdbError> {
    String::from_utf8(bytes).map_err(|e| PdbError::InvalidEncoding {
        offset: e.utf8_error().valid_up_to(),
    })
}

fn column_field(line: &str, (start, end): (usize, usize)) -> &str {
    columns::field(line, start, end)
}

/// Decodes one atom record. Never fails; unreadable fields are left empty.
pub fn decode_atom(record: &Record<'_>) -> Atom {
    let line = record.raw;
    let name = column_field(line, NAME_COLUMNS);

    let coordinate = |range| {
        column_field(line, range)
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    };
    let position = match (
        coordinate(X_COLUMNS),
        coordinate(Y_COLUMNS),
        coordinate(Z_COLUMNS),
    ) {
        (Some(x), Some(y), Some(z)) => Some(Point3::new(x, y, z)),
        _ => None,
    };

    Atom {
        serial: column_field(line, SERIAL_COLUMNS).to_string(),
        name: name.to_string(),
        residue_name: column_field(line, RESIDUE_NAME_COLUMNS).to_string(),
        element: elements::resolve_element(column_field(line, ELEMENT_COLUMNS), name),
        position,
        hetero: line.starts_with("HETATM"),
        bonds: Default::default(),
    }
}

/// Decodes every atom record in `records`, in scan order.
///
/// Each atom record produces exactly one atom; other records are skipped.
pub fn build_atoms(records: &[Record<'_>]) -> Vec<Atom> {
    records
        .iter()
        .filter(|r| r.kind == RecordKind::Atom)
        .map(decode_atom)
        .collect()
}

/// Links the CONECT records in `records` into a molecule made of `atoms`.
///
/// Pairs referencing unknown serials, and self-bonds, are skipped.
pub fn link_bonds(atoms: Vec<Atom>, records: &[Record<'_>]) -> Molecule {
    let mut builder = MoleculeBuilder::from_atoms(atoms);
    link_records(&mut builder, records, &mut ParseReport::default());
    builder.build()
}

/// Parses PDB text into a molecule.
///
/// This never fails: malformed lines produce atoms with empty fields or are ignored,
/// and unresolvable bonds are dropped. Input without atom records gives an empty molecule.
pub fn parse(text: &str) -> Molecule {
    parse_with_report(text).0
}

/// Parses PDB text and also reports what was tolerated along the way.
#[instrument(skip_all, fields(bytes = text.len()))]
pub fn parse_with_report(text: &str) -> (Molecule, ParseReport) {
    let records = record::scan(text);
    let mut report = ParseReport {
        total_lines: record::line_count(text),
        ..Default::default()
    };
    report.ignored_lines = report.total_lines - records.len();

    let atom_records = records.iter().filter(|r| r.kind == RecordKind::Atom);
    let atoms = build_atoms(&records);
    report.atom_records = atoms.len();

    let mut builder = MoleculeBuilder::new();
    for (record, atom) in atom_records.zip(atoms) {
        if atom.is_incomplete() {
            report.push(Diagnostic::IncompleteAtomRecord {
                line: record.line_number,
            });
        }
        if !atom.serial.is_empty() && builder.contains_serial(&atom.serial) {
            warn!(
                "Duplicate atom serial '{}' on line {}; keeping the first atom for bond lookup.",
                atom.serial, record.line_number
            );
            report.push(Diagnostic::DuplicateSerial {
                line: record.line_number,
                serial: atom.serial.clone(),
            });
        }
        builder.add_atom(atom);
    }

    link_records(&mut builder, &records, &mut report);

    if report.is_empty_structure() {
        report.push(Diagnostic::EmptyStructure);
    }

    debug!(
        "Parsed {} atom records and {} CONECT records into {} bonds ({} lines ignored, {} diagnostics).",
        report.atom_records,
        report.connect_records,
        report.bonds_linked,
        report.ignored_lines,
        report.diagnostics.len()
    );

    (builder.build(), report)
}

fn link_records(builder: &mut MoleculeBuilder, records: &[Record<'_>], report: &mut ParseReport) {
    for record in records.iter().filter(|r| r.kind == RecordKind::Connect) {
        report.connect_records += 1;

        let fields =
            columns::fixed_width_fields(record.raw, CONECT_FIRST_COLUMN, CONECT_FIELD_WIDTH);
        let Some((&source, targets)) = fields.split_first() else {
            trace!(line = record.line_number, "CONECT record has no serial fields.");
            continue;
        };
        if source.is_empty() {
            trace!(line = record.line_number, "CONECT record has no source serial.");
            continue;
        }

        for &target in targets.iter().filter(|t| !t.is_empty()) {
            match builder.link(source, target) {
                LinkOutcome::Linked => report.bonds_linked += 1,
                LinkOutcome::AlreadyLinked => report.duplicate_bonds += 1,
                LinkOutcome::SelfBond => {
                    trace!(line = record.line_number, serial = source, "Ignoring self-bond.");
                    report.push(Diagnostic::SelfBond {
                        line: record.line_number,
                        serial: source.to_string(),
                    });
                }
                LinkOutcome::Unresolved(serial) => {
                    trace!(
                        line = record.line_number,
                        serial = serial.as_str(),
                        "Skipping bond to unknown atom."
                    );
                    report.push(Diagnostic::UnresolvedBondReference {
                        line: record.line_number,
                        serial,
                    });
                }
            }
        }
    }
}

fn format_atom_name(atom: &Atom) -> String {
    let single_letter_element = atom.element.as_deref().is_none_or(|e| e.len() == 1);
    if atom.name.len() < 4 && single_letter_element {
        format!(" {:<3}", atom.name)
    } else {
        format!("{:<4}", atom.name)
    }
}

/// Formats a position into three 8-column fields, or `None` if any value does not fit.
fn format_coordinates(position: &Point3<f64>) -> Option<String> {
    let mut text = String::with_capacity(3 * COORDINATE_WIDTH);
    for value in [position.x, position.y, position.z] {
        let formatted = format!("{:>8.3}", value);
        if !value.is_finite() || formatted.len() > COORDINATE_WIDTH {
            return None;
        }
        text.push_str(&formatted);
    }
    Some(text)
}

pub struct PdbFile;

impl MolecularFile for PdbFile {
    type Metadata = ParseReport;
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<(Molecule, Self::Metadata), Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = decode_text(bytes)?;
        Ok(parse_with_report(&text))
    }

    fn write_to(molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut file_order: SecondaryMap<AtomId, usize> = SecondaryMap::new();

        for (index, (atom_id, atom)) in molecule.atoms_iter().enumerate() {
            file_order.insert(atom_id, index);

            let record_name = if atom.hetero { "HETATM" } else { "ATOM" };
            let coordinates = atom
                .position
                .and_then(|p| format_coordinates(&p))
                .unwrap_or_else(|| " ".repeat(3 * COORDINATE_WIDTH));
            writeln!(
                writer,
                "{:<6}{:>5} {} {:>3}  {:>4}    {}{:>6.2}{:>6.2}          {:>2}",
                record_name,
                atom.serial,
                format_atom_name(atom),
                atom.residue_name,
                "",
                coordinates,
                1.0,
                0.0,
                atom.element.as_deref().unwrap_or("").to_ascii_uppercase(),
            )?;
        }

        for (_, atom) in molecule.atoms_iter() {
            if atom.bonds.is_empty() {
                continue;
            }
            let mut partners: Vec<_> = atom.bonds.iter().copied().collect();
            partners.sort_by_key(|id| file_order.get(*id).copied().unwrap_or(usize::MAX));

            for chunk in partners.chunks(CONECT_TARGETS_PER_LINE) {
                write!(writer, "CONECT{:>5}", atom.serial)?;
                for &partner in chunk {
                    let serial = molecule.atom(partner).map_or("", |a| a.serial.as_str());
                    write!(writer, "{:>5}", serial)?;
                }
                writeln!(writer)?;
            }
        }

        writeln!(writer, "END")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TWO_ATOMS_ONE_BOND: &str = "ATOM      1  N   ALA A   1      11.104  13.207   8.123  1.00 20.00           N\nATOM      2  CA  ALA A   1      12.560  13.104   8.456  1.00 20.00           C\nCONECT    1    2\n";

    const LIGAND: &str = "\
HETATM    1  C1  EOH A   1      -0.956   0.139   0.000  1.00  0.00           C
HETATM    2  C2  EOH A   1       0.456  -0.354   0.000  1.00  0.00           C
HETATM    3  O   EOH A   1       1.284   0.806   0.000  1.00  0.00           O
HETATM    4  H11 EOH A   1      -1.506  -0.200   0.890  1.00  0.00           H
CONECT    1    2    4
CONECT    2    1    3
CONECT    3    2
CONECT    4    1
END
";

    fn serial_pairs(molecule: &Molecule) -> Vec<(String, String)> {
        molecule
            .bonds()
            .iter()
            .map(|b| {
                (
                    molecule.atom(b.atom1_id).unwrap().serial.clone(),
                    molecule.atom(b.atom2_id).unwrap().serial.clone(),
                )
            })
            .collect()
    }

    fn assert_bonds_symmetric(molecule: &Molecule) {
        for (id, atom) in molecule.atoms_iter() {
            assert!(!atom.bonds.contains(&id), "atom {} bonded to itself", atom.serial);
            for &partner in &atom.bonds {
                assert!(molecule.atom(partner).unwrap().bonds.contains(&id));
            }
        }
    }

    #[test]
    fn parse_builds_two_bonded_atoms() {
        let molecule = parse(TWO_ATOMS_ONE_BOND);

        let serials: Vec<_> = molecule
            .atoms_iter()
            .map(|(_, a)| a.serial.as_str())
            .collect();
        assert_eq!(serials, vec!["1", "2"]);

        let a1 = molecule.find_atom_by_serial("1").unwrap();
        let a2 = molecule.find_atom_by_serial("2").unwrap();
        assert!(molecule.atom(a1).unwrap().is_bonded_to(a2));
        assert!(molecule.atom(a2).unwrap().is_bonded_to(a1));
        assert_eq!(molecule.bond_count(), 1);
    }

    #[test]
    fn decode_atom_reads_all_standard_fields() {
        let records = record::scan(TWO_ATOMS_ONE_BOND);
        let atom = decode_atom(&records[1]);

        assert_eq!(atom.serial, "2");
        assert_eq!(atom.name, "CA");
        assert_eq!(atom.residue_name, "ALA");
        assert_eq!(atom.element.as_deref(), Some("C"));
        assert_eq!(atom.position, Some(Point3::new(12.560, 13.104, 8.456)));
        assert!(!atom.hetero);
        assert!(atom.bonds.is_empty());
    }

    #[test]
    fn decode_atom_marks_hetatm_records() {
        let records = record::scan(LIGAND);
        assert!(decode_atom(&records[0]).hetero);
    }

    #[test]
    fn parse_of_empty_input_is_empty_molecule() {
        let (molecule, report) = parse_with_report("");
        assert!(molecule.is_empty());
        assert_eq!(molecule.bond_count(), 0);
        assert_eq!(report.total_lines, 0);
        assert_eq!(report.diagnostics, vec![Diagnostic::EmptyStructure]);
    }

    #[test]
    fn parse_without_atom_records_is_empty_molecule() {
        let molecule = parse("HEADER    NOTHING HERE\nCONECT    1    2\nEND\n");
        assert!(molecule.is_empty());
        assert_eq!(molecule.bond_count(), 0);
    }

    #[test]
    fn unresolved_conect_reference_is_skipped_without_ghost_atoms() {
        let text = format!("{}CONECT    1   99\nCONECT   99    2\n", TWO_ATOMS_ONE_BOND);
        let (molecule, report) = parse_with_report(&text);

        assert_eq!(molecule.atom_count(), 2);
        assert_eq!(molecule.bond_count(), 1);
        assert!(molecule.find_atom_by_serial("99").is_none());
        assert_eq!(report.unresolved_references(), 2);
        assert_eq!(
            report.diagnostics[0],
            Diagnostic::UnresolvedBondReference {
                line: 4,
                serial: "99".into()
            }
        );
    }

    #[test]
    fn conect_to_missing_atom_leaves_bond_sets_empty() {
        let text = "ATOM      1  N   ALA A   1      11.104  13.207   8.123  1.00 20.00           N\nATOM      2  CA  ALA A   1      12.560  13.104   8.456  1.00 20.00           C\nCONECT    1   99\n";
        let molecule = parse(text);

        assert_eq!(molecule.atom_count(), 2);
        assert_eq!(molecule.bond_count(), 0);
        assert!(molecule.atoms_iter().all(|(_, a)| a.bonds.is_empty()));
    }

    #[test]
    fn self_bonds_are_never_created() {
        let text = format!("{}CONECT    1    1\n", TWO_ATOMS_ONE_BOND);
        let (molecule, report) = parse_with_report(&text);

        assert_bonds_symmetric(&molecule);
        assert_eq!(molecule.bond_count(), 1);
        assert!(report.diagnostics.contains(&Diagnostic::SelfBond {
            line: 4,
            serial: "1".into()
        }));
    }

    #[test]
    fn reciprocal_conect_records_create_one_bond() {
        let (molecule, report) = parse_with_report(LIGAND);

        assert_eq!(molecule.atom_count(), 4);
        assert_eq!(
            serial_pairs(&molecule),
            vec![
                ("1".to_string(), "2".to_string()),
                ("1".to_string(), "4".to_string()),
                ("2".to_string(), "3".to_string()),
            ]
        );
        assert_eq!(report.bonds_linked, 3);
        assert_eq!(report.duplicate_bonds, 3);
        assert_eq!(report.connect_records, 4);
        assert!(report.is_clean());
        assert_bonds_symmetric(&molecule);
    }

    #[test]
    fn conect_reads_all_fixed_width_target_fields() {
        let text = "\
HETATM    1  C1  LIG A   1       0.000   0.000   0.000  1.00  0.00           C
HETATM    2  H1  LIG A   1       1.000   0.000   0.000  1.00  0.00           H
HETATM    3  H2  LIG A   1       0.000   1.000   0.000  1.00  0.00           H
HETATM    4  H3  LIG A   1       0.000   0.000   1.000  1.00  0.00           H
HETATM    5  H4  LIG A   1      -1.000   0.000   0.000  1.00  0.00           H
CONECT    1    2    3    4    5
";
        let molecule = parse(text);
        let center = molecule.find_atom_by_serial("1").unwrap();
        assert_eq!(molecule.atom(center).unwrap().bonds.len(), 4);
    }

    #[test]
    fn conect_fields_are_fixed_width_not_whitespace_separated() {
        let text = "\
HETATM10001  C1  LIG A   1       0.000   0.000   0.000  1.00  0.00           C
HETATM10002  C2  LIG A   1       1.500   0.000   0.000  1.00  0.00           C
CONECT1000110002
";
        let molecule = parse(text);
        assert_eq!(
            serial_pairs(&molecule),
            vec![("10001".to_string(), "10002".to_string())]
        );
    }

    #[test]
    fn substring_atom_line_is_decoded_as_atom() {
        let text = "REMARK   ATOM counts are listed below\nATOM      1  N   ALA A   1      11.104  13.207   8.123  1.00 20.00           N\n";
        let (molecule, report) = parse_with_report(text);

        assert_eq!(molecule.atom_count(), 2);
        let (_, garbage) = molecule.atoms_iter().next().unwrap();
        assert_eq!(garbage.serial, "AT");
        assert_eq!(garbage.name, "M co");
        assert_eq!(garbage.position, None);
        assert_eq!(report.ignored_lines, 1);
    }

    #[test]
    fn short_atom_record_yields_atom_with_empty_fields() {
        let (molecule, report) = parse_with_report("ATOM   12\nATOM\n");

        let atoms: Vec<_> = molecule.atoms_iter().map(|(_, a)| a.clone()).collect();
        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[0].serial, "12");
        assert_eq!(atoms[0].name, "");
        assert_eq!(atoms[1].serial, "");
        assert_eq!(atoms[1].position, None);
        assert_eq!(
            report.diagnostics,
            vec![
                Diagnostic::IncompleteAtomRecord { line: 1 },
                Diagnostic::IncompleteAtomRecord { line: 2 },
            ]
        );
    }

    #[test]
    fn duplicate_serials_keep_first_atom_for_lookup() {
        let text = "\
HETATM    1  C1  LIG A   1       0.000   0.000   0.000  1.00  0.00           C
HETATM    1  C2  LIG A   1       1.500   0.000   0.000  1.00  0.00           C
HETATM    2  O1  LIG A   1       3.000   0.000   0.000  1.00  0.00           O
CONECT    1    2
";
        let (molecule, report) = parse_with_report(text);

        assert_eq!(molecule.atom_count(), 3);
        let owner = molecule.find_atom_by_serial("1").unwrap();
        assert_eq!(molecule.atom(owner).unwrap().name, "C1");
        assert_eq!(molecule.atom(owner).unwrap().bonds.len(), 1);
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::DuplicateSerial {
                line: 2,
                serial: "1".into()
            }]
        );
    }

    #[test]
    fn build_atoms_is_deterministic() {
        let records = record::scan(LIGAND);
        assert_eq!(build_atoms(&records), build_atoms(&records));
        assert_eq!(build_atoms(&records).len(), 4);
    }

    #[test]
    fn link_bonds_matches_full_parse() {
        let records = record::scan(LIGAND);
        let molecule = link_bonds(build_atoms(&records), &records);
        assert_eq!(serial_pairs(&molecule), serial_pairs(&parse(LIGAND)));
    }

    #[test]
    fn crlf_line_endings_parse_like_lf() {
        let crlf = LIGAND.replace('\n', "\r\n");
        assert_eq!(serial_pairs(&parse(&crlf)), serial_pairs(&parse(LIGAND)));
        let molecule = parse(&crlf);
        let (_, atom) = molecule.atoms_iter().next().unwrap();
        assert_eq!(atom.name, "C1");
        assert_eq!(atom.element.as_deref(), Some("C"));
    }

    #[test]
    fn read_from_rejects_non_utf8_input() {
        let mut reader = Cursor::new(vec![b'A', b'T', 0xff, 0xfe]);
        let result = PdbFile::read_from(&mut reader);
        assert!(matches!(result, Err(PdbError::InvalidEncoding { offset: 2 })));
    }

    #[test]
    fn read_from_path_returns_molecule_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ligand.pdb");
        std::fs::write(&path, LIGAND).unwrap();

        let (molecule, report) = PdbFile::read_from_path(&path).unwrap();
        assert_eq!(molecule.atom_count(), 4);
        assert_eq!(report.total_lines, 10);
        assert_eq!(report.ignored_lines, 2);
    }

    #[test]
    fn read_from_path_propagates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PdbFile::read_from_path(dir.path().join("missing.pdb"));
        assert!(matches!(result, Err(PdbError::Io(_))));
    }

    #[test]
    fn written_file_reads_back_to_same_graph() {
        let original = parse(LIGAND);
        let mut buffer = Vec::new();
        PdbFile::write_to(&original, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with(
            "HETATM    1  C1  EOH            -0.956   0.139   0.000  1.00  0.00           C\n"
        ));
        assert!(text.contains("CONECT    1    2    4\n"));
        assert!(text.ends_with("END\n"));

        let reread = parse(&text);
        assert_eq!(serial_pairs(&reread), serial_pairs(&original));
        let names: Vec<_> = reread.atoms_iter().map(|(_, a)| a.name.clone()).collect();
        assert_eq!(names, vec!["C1", "C2", "O", "H11"]);
    }

    #[test]
    fn writer_leaves_unknown_coordinates_blank() {
        let mut builder = MoleculeBuilder::new();
        builder.add_atom(Atom::new("1", "X"));
        let mut buffer = Vec::new();
        PdbFile::write_to(&builder.build(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let reread = parse(&text);
        let (_, atom) = reread.atoms_iter().next().unwrap();
        assert_eq!(atom.serial, "1");
        assert_eq!(atom.position, None);
    }

    #[test]
    fn writer_splits_long_conect_lists() {
        let mut builder = MoleculeBuilder::new();
        for serial in 1..=6 {
            builder.add_atom(Atom::new(&serial.to_string(), "C"));
        }
        for target in 2..=6 {
            builder.link("1", &target.to_string());
        }
        let mut buffer = Vec::new();
        PdbFile::write_to(&builder.build(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("CONECT    1    2    3    4    5\nCONECT    1    6\n"));
    }

    #[test]
    fn non_finite_coordinates_are_unreadable() {
        for x in ["   1e300", "     inf", "     NaN"] {
            let line = format!(
                "HETATM    1  C1  EOH A   1    {}   0.000   0.000  1.00  0.00           C",
                x
            );
            let molecule = parse(&line);
            let (_, atom) = molecule.atoms_iter().next().unwrap();
            assert_eq!(atom.position, None, "x = {}", x.trim());
            assert_eq!(atom.element.as_deref(), Some("C"));
        }
    }

    #[test]
    fn coordinates_too_wide_for_columns_are_written_blank() {
        let mut builder = MoleculeBuilder::new();
        let mut wide = Atom::new("1", "C1");
        wide.position = Some(Point3::new(123_456_789.0, 0.0, 0.0));
        wide.element = Some("C".to_string());
        builder.add_atom(wide);
        let mut normal = Atom::new("2", "C2");
        normal.position = Some(Point3::new(1.5, -2.25, 3.0));
        normal.element = Some("C".to_string());
        builder.add_atom(normal);
        builder.link("1", "2");

        let mut buffer = Vec::new();
        PdbFile::write_to(&builder.build(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        for line in text.lines().filter(|l| l.starts_with("ATOM")) {
            assert_eq!(line.chars().count(), 78, "misaligned record: {:?}", line);
        }

        let reread = parse(&text);
        let positions: Vec<_> = reread.atoms_iter().map(|(_, a)| a.position).collect();
        assert_eq!(positions, vec![None, Some(Point3::new(1.5, -2.25, 3.0))]);
        let elements: Vec<_> = reread
            .atoms_iter()
            .map(|(_, a)| a.element.clone())
            .collect();
        assert_eq!(elements, vec![Some("C".to_string()), Some("C".to_string())]);
        assert_eq!(reread.bond_count(), 1);
    }

    #[test]
    fn very_long_conect_record_links_every_target() {
        let atoms = 2_000;
        let mut text = String::new();
        for serial in 1..=atoms {
            text.push_str(&format!(
                "HETATM{:>5}  C   LIG A   1       0.000   0.000   0.000  1.00  0.00           C\n",
                serial
            ));
        }
        let mut conect = String::from("CONECT    1");
        for _ in 0..50 {
            for target in 2..=atoms {
                conect.push_str(&format!("{:>5}", target));
            }
        }
        text.push_str(&conect);
        text.push('\n');

        let (molecule, report) = parse_with_report(&text);

        assert_eq!(molecule.atom_count(), atoms);
        assert_eq!(molecule.bond_count(), atoms - 1);
        assert_eq!(report.bonds_linked, atoms - 1);
        assert_eq!(report.duplicate_bonds, 49 * (atoms - 1));
        assert_bonds_symmetric(&molecule);
    }
}
