use crate::core::models::molecule::Molecule;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing molecular file formats.
///
/// Implementors handle format-specific parsing and serialization; the path helpers
/// are provided in terms of the reader/writer methods.
pub trait MolecularFile {
    /// Side information produced while reading (for example a parse report).
    type Metadata;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a molecule from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the parsed molecule and associated metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read as text.
    fn read_from(reader: &mut impl BufRead) -> Result<(Molecule, Self::Metadata), Self::Error>;

    /// Writes a molecule to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(molecule: &Molecule, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a molecule from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<(Molecule, Self::Metadata), Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a molecule to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(molecule: &Molecule, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(molecule, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
