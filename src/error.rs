//! Error types
//!
//! The only runtime-visible errors are bad construction input (unknown type
//! codes in level data) and settings/level files that cannot be read.

use std::fmt;

/// Errors raised while building entities, levels or settings
#[derive(Debug)]
pub enum Error {
    /// Enemy type code outside `0..=2`
    UnknownEnemyType(u8),
    /// Bullet type code outside `0..=3`
    UnknownBulletType(u8),
    /// Goody type code outside `0..=6`
    UnknownGoodyType(u8),
    /// A character in an enemy grid that is neither a type code nor `_`
    InvalidEnemyCell { row: usize, col: usize, cell: char },
    /// A level list with no levels in it
    NoLevels,
    /// Settings or level file could not be read
    Io(std::io::Error),
    /// Settings or level file is not valid JSON for the expected shape
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownEnemyType(code) => write!(f, "unknown enemy type {code}"),
            Error::UnknownBulletType(code) => write!(f, "unknown bullet type {code}"),
            Error::UnknownGoodyType(code) => write!(f, "unknown goody type {code}"),
            Error::InvalidEnemyCell { row, col, cell } => {
                write!(f, "invalid enemy cell {cell:?} at row {row}, column {col}")
            }
            Error::NoLevels => write!(f, "level list is empty"),
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

/// Convenience alias for crate results
pub type Result<T> = std::result::Result<T, Error>;
