//! Conteo de carbonos por fila sobre cualquier columna de moléculas.

use chem_table::{is_molecule_format, to_mol_column, Cell, Column, ColumnType, ConvertOptions, Table,
                 TableSchema};

use crate::node::{engine, NodeError, TableNode};

pub const OUTPUT_COLUMN: &str = "NumCarbons";

/// Número atómico del carbono.
const CARBON: u8 = 6;

/// Agrega una columna int64 con el número de carbonos de cada molécula.
/// Filas null (o no parseables) producen null.
#[derive(Debug, Clone)]
pub struct CountCarbonsNode {
    pub molecule_column: String,
}

impl CountCarbonsNode {
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

impl TableNode for CountCarbonsNode {
    fn name(&self) -> &str {
        "Count Num Carbons"
    }

    fn configure(&self, input: &TableSchema) -> Result<TableSchema, NodeError> {
        self.check_input(input)?;
        Ok(input.append(OUTPUT_COLUMN, ColumnType::Int64)?)
    }

    fn execute(&self, input: &Table) -> Result<Table, NodeError> {
        self.check_input(&input.schema())?;
        let engine = engine()?;
        let column = input.column(&self.molecule_column)?;
        let mols = to_mol_column(&engine, column, column.name(), &ConvertOptions { sanitize: true })?;
        let cells: Vec<Cell> = mols.cells()
                                   .iter()
                                   .map(|cell| match cell {
                                       Cell::Mol(mol) => Cell::Int(mol.count_atomic_number(CARBON)),
                                       _ => Cell::Null,
                                   })
                                   .collect();
        let counts = Column::new(OUTPUT_COLUMN, ColumnType::Int64, cells)?;
        Ok(input.append_column(counts)?)
    }
}
