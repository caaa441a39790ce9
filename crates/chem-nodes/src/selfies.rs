//! Codec SMILES ↔ SELFIES por celda y sus dos etapas de pipeline.
//!
//! Las dos funciones son simétricas y puras: una celda problemática produce
//! null, nunca aborta la columna. El round-trip es equivalencia química, no
//! igualdad sintáctica (la canonicalización puede cambiar el texto).

use chem_table::{Cell, Column, ColumnType, Table, TableSchema};
use chem_values::{ChemValue, ValueKind};
use chemengine::ChemEngine;
use log::debug;

use crate::node::{engine, NodeError, TableNode};

/// SMILES → SELFIES. Entrada vacía o estructura no codificable ⇒ `None`.
pub fn smiles_to_selfies(engine: &ChemEngine, smiles: &str) -> Option<String> {
    if smiles.is_empty() {
        return None;
    }
    match engine.selfies_encode(smiles) {
        Ok(selfies) => Some(selfies),
        Err(err) => {
            debug!("SELFIES encode fallido: {err}");
            None
        }
    }
}

/// SELFIES → SMILES. El resultado se re-envuelve como valor SMILES tipado
/// para que la columna de salida lleve valores químicos, no strings planos.
pub fn selfies_to_smiles(engine: &ChemEngine, selfies: &str) -> Option<ChemValue> {
    if selfies.is_empty() {
        return None;
    }
    match engine.selfies_decode(selfies) {
        Ok(smiles) => Some(ChemValue::Smiles(smiles)),
        Err(err) => {
            debug!("SELFIES decode fallido: {err}");
            None
        }
    }
}

/// Convierte una columna de SMILES (string plano o tipado) y agrega el
/// resultado como columna string, de nombre configurable.
#[derive(Debug, Clone)]
pub struct SmilesToSelfiesNode {
    pub smiles_column: String,
    pub output_column: String,
}

impl SmilesToSelfiesNode {
    pub fn new(smiles_column: impl Into<String>) -> Self {
        Self { smiles_column: smiles_column.into(),
               output_column: "SELFIES".to_string() }
    }

    pub fn with_output_column(mut self, name: impl Into<String>) -> Self {
        self.output_column = name.into();
        self
    }

    fn check_input(&self, input: &TableSchema) -> Result<(), NodeError> {
        let ty = input.column_type(&self.smiles_column)
                      .ok_or_else(|| NodeError::UnknownColumn(self.smiles_column.clone()))?;
        match ty {
            ColumnType::String | ColumnType::Chemical(ValueKind::Smiles) => Ok(()),
            other => Err(NodeError::NotSmilesColumn { column: self.smiles_column.clone(),
                                                      found: other.to_string() }),
        }
    }
}

impl TableNode for SmilesToSelfiesNode {
    fn name(&self) -> &str {
        "SMILES to SELFIES"
    }

    fn configure(&self, input: &TableSchema) -> Result<TableSchema, NodeError> {
        self.check_input(input)?;
        Ok(input.append(&self.output_column, ColumnType::String)?)
    }

    fn execute(&self, input: &Table) -> Result<Table, NodeError> {
        self.check_input(&input.schema())?;
        let engine = engine()?;
        let column = input.column(&self.smiles_column)?;
        let cells: Vec<Cell> = column.cells()
                                     .iter()
                                     .map(|cell| {
                                         let smiles = match cell {
                                             Cell::Str(s) => Some(s.as_str()),
                                             Cell::Chem(v) => Some(v.payload()),
                                             _ => None,
                                         };
                                         match smiles.and_then(|s| smiles_to_selfies(&engine, s)) {
                                             Some(selfies) => Cell::Str(selfies),
                                             None => Cell::Null,
                                         }
                                     })
                                     .collect();
        let out = Column::new(&self.output_column, ColumnType::String, cells)?;
        Ok(input.append_column(out)?)
    }
}

/// Convierte una columna string de SELFIES y agrega el resultado como
/// columna SMILES tipada, de nombre configurable.
#[derive(Debug, Clone)]
pub struct SelfiesToSmilesNode {
    pub selfies_column: String,
    pub output_column: String,
}

impl SelfiesToSmilesNode {
    pub fn new(selfies_column: impl Into<String>) -> Self {
        Self { selfies_column: selfies_column.into(),
               output_column: "SMILES".to_string() }
    }

    pub fn with_output_column(mut self, name: impl Into<String>) -> Self {
        self.output_column = name.into();
        self
    }

    fn check_input(&self, input: &TableSchema) -> Result<(), NodeError> {
        let ty = input.column_type(&self.selfies_column)
                      .ok_or_else(|| NodeError::UnknownColumn(self.selfies_column.clone()))?;
        match ty {
            ColumnType::String => Ok(()),
            other => Err(NodeError::NotStringColumn { column: self.selfies_column.clone(),
                                                      found: other.to_string() }),
        }
    }
}

impl TableNode for SelfiesToSmilesNode {
    fn name(&self) -> &str {
        "SELFIES to SMILES"
    }

    fn configure(&self, input: &TableSchema) -> Result<TableSchema, NodeError> {
        self.check_input(input)?;
        Ok(input.append(&self.output_column, ColumnType::Chemical(ValueKind::Smiles))?)
    }

    fn execute(&self, input: &Table) -> Result<Table, NodeError> {
        self.check_input(&input.schema())?;
        let engine = engine()?;
        let column = input.column(&self.selfies_column)?;
        let cells: Vec<Cell> = column.cells()
                                     .iter()
                                     .map(|cell| match cell {
                                         Cell::Str(s) => match selfies_to_smiles(&engine, s) {
                                             Some(value) => Cell::Chem(value),
                                             None => Cell::Null,
                                         },
                                         _ => Cell::Null,
                                     })
                                     .collect();
        let out = Column::new(&self.output_column, ColumnType::Chemical(ValueKind::Smiles), cells)?;
        Ok(input.append_column(out)?)
    }
}
