use chem_table::{Table, TableError, TableSchema};
use chemengine::ChemEngine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("column '{column}' does not hold a recognized molecule format (found {found})")]
    NotMoleculeColumn { column: String, found: String },
    #[error("column '{column}' must be a string or SMILES column (found {found})")]
    NotSmilesColumn { column: String, found: String },
    #[error("column '{column}' must be a string column (found {found})")]
    NotStringColumn { column: String, found: String },
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Etapa de pipeline: función pura de una tabla de entrada a la misma tabla
/// más una columna derivada, con su transformación de esquema declarada.
pub trait TableNode {
    /// Nombre estable de la etapa.
    fn name(&self) -> &str;

    /// Valida la entrada y declara el esquema de salida sin tocar datos.
    fn configure(&self, input: &TableSchema) -> Result<TableSchema, NodeError>;

    /// Produce la tabla de salida. Debe respetar el esquema de `configure`.
    fn execute(&self, input: &Table) -> Result<Table, NodeError>;
}

/// El motor es una dependencia fatal: si falta, se reporta en el primer uso
/// con mensaje accionable, no se reintenta ni se degrada.
pub(crate) fn engine() -> Result<ChemEngine, NodeError> {
    ChemEngine::init().map_err(|e| NodeError::Table(TableError::MissingDependency(e.to_string())))
}
