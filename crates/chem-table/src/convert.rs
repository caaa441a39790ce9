//! Conversión elemento a elemento de una columna a moléculas canónicas.
//!
//! La decisión central: el fallo de una celda queda en esa celda. Una
//! notación malformada en una columna de 10.000 filas produce un null en su
//! fila y nada más; la operación a nivel de columna siempre devuelve una
//! columna de la misma longitud.

use chemengine::ChemEngine;
use log::debug;

use crate::column::{Cell, Column, ColumnType};
use crate::errors::TableError;
use crate::registry::FormatRegistry;

/// Opciones reenviadas a los parsers que las respetan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    pub sanitize: bool,
}

/// Convierte una columna a una columna de moléculas canónicas del mismo
/// largo. El registro se consulta una vez por celda, pero como la columna es
/// homogénea el tag resuelto es efectivamente uno por columna.
pub fn to_mol_column(engine: &ChemEngine,
                     column: &Column,
                     name: &str,
                     options: &ConvertOptions)
                     -> Result<Column, TableError> {
    let registry = FormatRegistry::global(engine);
    let cells: Vec<Cell> = column.cells()
                                 .iter()
                                 .map(|cell| convert_cell(engine, registry, cell, options))
                                 .collect();
    Column::new(name, ColumnType::Molecule, cells)
}

fn convert_cell(engine: &ChemEngine,
                registry: &FormatRegistry,
                cell: &Cell,
                options: &ConvertOptions)
                -> Cell {
    match cell {
        // Moléculas ya convertidas pasan sin re-parsear
        Cell::Mol(mol) => Cell::Mol(mol.clone()),
        Cell::Chem(value) => {
            let parser = match registry.lookup(value.kind()) {
                Ok(parser) => parser,
                Err(err) => {
                    debug!("celda degradada a null: {err}");
                    return Cell::Null;
                }
            };
            match parser(engine, value.payload(), options) {
                Ok(mol) => Cell::Mol(mol),
                Err(err) => {
                    debug!("parseo {} fallido: {err}", value.kind());
                    Cell::Null
                }
            }
        }
        _ => Cell::Null,
    }
}
