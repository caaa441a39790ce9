//! Extracción de moléculas canónicas desde cualquier formato reconocido.

use chem_table::{is_molecule_format, to_mol_column, ColumnType, ConvertOptions, Table, TableSchema};

use crate::node::{engine, NodeError, TableNode};

pub const OUTPUT_COLUMN: &str = "RDKitMol";

/// Agrega una columna de moléculas canónicas a partir de la columna química
/// seleccionada. Filas no convertibles quedan en null.
#[derive(Debug, Clone)]
pub struct RdkitMolNode {
    pub molecule_column: String,
}

impl RdkitMolNode {
    pub fn new(molecule_column: impl Into<String>) -> Self {
        Self { molecule_column: molecule_column.into() }
    }

    fn check_input(&self, input: &TableSchema) -> Result<(), NodeError> {
        let ty = input.column_type(&self.molecule_column)
                      .ok_or_else(|| NodeError::UnknownColumn(self.molecule_column.clone()))?;
        if !is_molecule_format(&ty)? {
            return Err(NodeError::NotMoleculeColumn { column: self.molecule_column.clone(),
                                                      found: ty.to_string() });
        }
        Ok(())
    }
}

impl TableNode for RdkitMolNode {
    fn name(&self) -> &str {
        "RDKitMol from any Mol Type"
    }

    fn configure(&self, input: &TableSchema) -> Result<TableSchema, NodeError> {
        self.check_input(input)?;
        Ok(input.append(OUTPUT_COLUMN, ColumnType::Molecule)?)
    }

    fn execute(&self, input: &Table) -> Result<Table, NodeError> {
        self.check_input(&input.schema())?;
        let engine = engine()?;
        let column = input.column(&self.molecule_column)?;
        let converted = to_mol_column(&engine, column, OUTPUT_COLUMN, &ConvertOptions::default())?;
        Ok(input.append_column(converted)?)
    }
}
