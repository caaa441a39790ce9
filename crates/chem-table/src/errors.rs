//! Errores de la capa tabular (simples por ahora).

use chem_values::{ValueError, ValueKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    /// Error estructural de decodificación: contrato upstream violado.
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error("cell {row} of column '{column}' does not match declared type {expected}")]
    CellTypeMismatch { column: String, row: usize, expected: String },
    #[error("column '{0}' holds engine-internal values and cannot be decoded from raw cells")]
    NotDecodable(String),
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),
    #[error("column '{column}' has {actual} rows, table has {expected}")]
    LengthMismatch { column: String, expected: usize, actual: usize },
    #[error("unsupported molecule format: {0}")]
    UnsupportedFormat(ValueKind),
    #[error("chemistry engine unavailable: {0}")]
    MissingDependency(String),
}
