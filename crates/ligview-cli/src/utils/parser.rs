use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MAX_LIGAND_ID_LEN: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Ligand identifier cannot be empty.")]
    EmptyLigandId,

    #[error("Ligand identifier '{0}' is longer than {MAX_LIGAND_ID_LEN} characters.")]
    LigandIdTooLong(String),

    #[error("Ligand identifier '{0}' may only contain ASCII letters and digits.")]
    InvalidLigandIdCharacter(String),
}

/// A chemical component identifier as used by the RCSB ligand service, stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LigandId(String);

impl LigandId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LigandId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyLigandId);
        }
        if trimmed.chars().count() > MAX_LIGAND_ID_LEN {
            return Err(ParseError::LigandIdTooLong(trimmed.to_string()));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ParseError::InvalidLigandIdCharacter(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }
}

impl fmt::Display for LigandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
