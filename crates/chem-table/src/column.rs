//! Columna homogénea en memoria y su contrato de (de)serialización.

use chem_values::{ChemValue, ValueKind};
use chemengine::Mol;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::errors::TableError;

/// Tipo declarado de los elementos de una columna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    String,
    Int64,
    /// Notación química textual, con su tag de tipo de valor.
    Chemical(ValueKind),
    /// Moléculas canónicas ya convertidas (producidas en proceso).
    Molecule,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::String => f.write_str("string"),
            ColumnType::Int64 => f.write_str("int64"),
            ColumnType::Chemical(kind) => f.write_str(kind.name()),
            ColumnType::Molecule => f.write_str("molecule"),
        }
    }
}

/// Celda de una columna. `Null` es válido bajo cualquier tipo declarado.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Str(String),
    Int(i64),
    Chem(ChemValue),
    Mol(Mol),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    fn matches(&self, ty: &ColumnType) -> bool {
        match (self, ty) {
            (Cell::Null, _) => true,
            (Cell::Str(_), ColumnType::String) => true,
            (Cell::Int(_), ColumnType::Int64) => true,
            (Cell::Chem(v), ColumnType::Chemical(kind)) => v.kind() == *kind,
            (Cell::Mol(_), ColumnType::Molecule) => true,
            _ => false,
        }
    }
}

/// Secuencia ordenada de celdas bajo un tipo declarado único.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    ty: ColumnType,
    cells: Vec<Cell>,
}

impl Column {
    /// Construye una columna validando cada celda contra el tipo declarado.
    pub fn new(name: impl Into<String>, ty: ColumnType, cells: Vec<Cell>) -> Result<Self, TableError> {
        let name = name.into();
        for (row, cell) in cells.iter().enumerate() {
            if !cell.matches(&ty) {
                return Err(TableError::CellTypeMismatch { column: name,
                                                          row,
                                                          expected: ty.to_string() });
            }
        }
        Ok(Self { name, ty, cells })
    }

    /// Decodifica celdas crudas (JSON) según el tipo declarado.
    ///
    /// Un error estructural (registro adapter malformado, tipo JSON
    /// equivocado) aborta la lectura completa: indica contrato upstream roto,
    /// no un problema químico por fila.
    pub fn from_raw(name: impl Into<String>, ty: ColumnType, raw: &[Value]) -> Result<Self, TableError> {
        let name = name.into();
        let mut cells = Vec::with_capacity(raw.len());
        for (row, value) in raw.iter().enumerate() {
            let cell = match ty {
                ColumnType::String => match value {
                    Value::Null => Cell::Null,
                    Value::String(s) => Cell::Str(s.clone()),
                    _ => {
                        return Err(TableError::CellTypeMismatch { column: name,
                                                                  row,
                                                                  expected: ty.to_string() })
                    }
                },
                ColumnType::Int64 => match value {
                    Value::Null => Cell::Null,
                    other => match other.as_i64() {
                        Some(i) => Cell::Int(i),
                        None => {
                            return Err(TableError::CellTypeMismatch { column: name,
                                                                      row,
                                                                      expected: ty.to_string() })
                        }
                    },
                },
                ColumnType::Chemical(kind) => match ChemValue::decode(kind, value)? {
                    Some(v) => Cell::Chem(v),
                    None => Cell::Null,
                },
                // Las moléculas canónicas nunca llegan por el wire
                ColumnType::Molecule => return Err(TableError::NotDecodable(name)),
            };
            cells.push(cell);
        }
        Ok(Self { name, ty, cells })
    }

    /// Forma on-the-wire de cada celda; inversa de `from_raw`.
    pub fn to_raw(&self) -> Result<Vec<Value>, TableError> {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Null => Ok(Value::Null),
                Cell::Str(s) => Ok(Value::String(s.clone())),
                Cell::Int(i) => Ok(Value::from(*i)),
                Cell::Chem(v) => Ok(v.encode()),
                Cell::Mol(_) => Err(TableError::NotDecodable(self.name.clone())),
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> ColumnType {
        self.ty
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, row: usize) -> Option<&Cell> {
        self.cells.get(row)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chem_values::ValueError;
    use serde_json::json;

    #[test]
    fn from_raw_string_column() {
        let raw = vec![json!("abc"), Value::Null, json!("def")];
        let col = Column::from_raw("s", ColumnType::String, &raw).unwrap();
        assert_eq!(col.len(), 3);
        assert!(col.get(1).unwrap().is_null());
        assert_eq!(col.to_raw().unwrap(), raw);
    }

    #[test]
    fn from_raw_chemical_plain_roundtrip() {
        let raw = vec![json!("CC"), Value::Null, json!("c1ccccc1")];
        let col = Column::from_raw("Smiles", ColumnType::Chemical(ValueKind::Smiles), &raw).unwrap();
        assert_eq!(col.ty(), ColumnType::Chemical(ValueKind::Smiles));
        match col.get(0).unwrap() {
            Cell::Chem(v) => assert_eq!(v.payload(), "CC"),
            other => panic!("celda inesperada: {other:?}"),
        }
        assert_eq!(col.to_raw().unwrap(), raw);
    }

    #[test]
    fn from_raw_chemical_adapter_roundtrip() {
        let raw = vec![json!({"0": "CC", "1": {"source": "upstream"}}), Value::Null];
        let col = Column::from_raw("Smiles", ColumnType::Chemical(ValueKind::SmilesAdapter), &raw).unwrap();
        assert_eq!(col.to_raw().unwrap(), raw);
    }

    #[test]
    fn from_raw_malformed_adapter_aborts() {
        let raw = vec![json!({"0": "CC", "1": {}}), json!({"0": "O"})];
        let err = Column::from_raw("Smiles", ColumnType::Chemical(ValueKind::SmilesAdapter), &raw).unwrap_err();
        assert!(matches!(err,
                         TableError::Value(ValueError::MissingAdapterKey { key: "1", .. })));
    }

    #[test]
    fn from_raw_int64_column() {
        let raw = vec![json!(7), Value::Null];
        let col = Column::from_raw("n", ColumnType::Int64, &raw).unwrap();
        assert_eq!(col.get(0), Some(&Cell::Int(7)));
        assert!(Column::from_raw("n", ColumnType::Int64, &[json!("x")]).is_err());
    }

    #[test]
    fn molecule_columns_are_not_wire_decodable() {
        let err = Column::from_raw("m", ColumnType::Molecule, &[json!("CC")]).unwrap_err();
        assert!(matches!(err, TableError::NotDecodable(_)));
    }

    #[test]
    fn new_rejects_cell_type_mismatch() {
        let err = Column::new("n", ColumnType::Int64, vec![Cell::Str("x".into())]).unwrap_err();
        assert!(matches!(err, TableError::CellTypeMismatch { row: 0, .. }));

        // valor químico con tag distinto al declarado
        let cells = vec![Cell::Chem(ChemValue::Smarts("[#6]".into()))];
        let err = Column::new("q", ColumnType::Chemical(ValueKind::Smiles), cells).unwrap_err();
        assert!(matches!(err, TableError::CellTypeMismatch { .. }));
    }
}
