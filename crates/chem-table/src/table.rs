//! Tabla en memoria: columnas ordenadas de igual longitud, y el esquema
//! declarado que las etapas transforman en configure.

use crate::column::{Column, ColumnType};
use crate::errors::TableError;

/// Esquema ordenado (nombre, tipo). Inmutable: `append` devuelve uno nuevo,
/// igual que las tablas.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableSchema {
    columns: Vec<(String, ColumnType)>,
}

impl TableSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, TableError>
        where I: IntoIterator<Item = (S, ColumnType)>,
              S: Into<String>
    {
        let mut schema = Self::new();
        for (name, ty) in pairs {
            schema = schema.append(name, ty)?;
        }
        Ok(schema)
    }

    /// Devuelve un esquema nuevo con la columna agregada al final.
    pub fn append(&self, name: impl Into<String>, ty: ColumnType) -> Result<Self, TableError> {
        let name = name.into();
        if self.column_type(&name).is_some() {
            return Err(TableError::DuplicateColumn(name));
        }
        let mut columns = self.columns.clone();
        columns.push((name, ty));
        Ok(Self { columns })
    }

    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, ty)| *ty)
    }

    pub fn columns(&self) -> &[(String, ColumnType)] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Tabla materializada. Todas las columnas comparten longitud.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(columns: Vec<Column>) -> Result<Self, TableError> {
        let mut table = Self::new();
        for column in columns {
            table = table.append_column(column)?;
        }
        Ok(table)
    }

    /// Devuelve una tabla nueva con la columna agregada al final.
    pub fn append_column(&self, column: Column) -> Result<Self, TableError> {
        if self.column(column.name()).is_ok() {
            return Err(TableError::DuplicateColumn(column.name().to_string()));
        }
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(TableError::LengthMismatch { column: column.name().to_string(),
                                                        expected: first.len(),
                                                        actual: column.len() });
            }
        }
        let mut columns = self.columns.clone();
        columns.push(column);
        Ok(Self { columns })
    }

    pub fn column(&self, name: &str) -> Result<&Column, TableError> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn schema(&self) -> TableSchema {
        TableSchema { columns: self.columns.iter().map(|c| (c.name().to_string(), c.ty())).collect() }
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Cell;

    #[test]
    fn schema_append_preserves_order_and_rejects_duplicates() {
        let schema = TableSchema::from_pairs([("a", ColumnType::String), ("b", ColumnType::Int64)]).unwrap();
        let appended = schema.append("c", ColumnType::Molecule).unwrap();
        assert_eq!(appended.len(), 3);
        assert_eq!(appended.columns()[2].0, "c");
        // el esquema original no cambia
        assert_eq!(schema.len(), 2);
        assert!(matches!(appended.append("a", ColumnType::String),
                         Err(TableError::DuplicateColumn(_))));
    }

    #[test]
    fn table_append_checks_length() {
        let a = Column::new("a", ColumnType::Int64, vec![Cell::Int(1), Cell::Int(2)]).unwrap();
        let b = Column::new("b", ColumnType::Int64, vec![Cell::Int(1)]).unwrap();
        let table = Table::from_columns(vec![a]).unwrap();
        assert!(matches!(table.append_column(b), Err(TableError::LengthMismatch { .. })));
    }

    #[test]
    fn table_schema_reflects_columns() {
        let a = Column::new("a", ColumnType::String, vec![Cell::Null]).unwrap();
        let table = Table::from_columns(vec![a]).unwrap();
        assert_eq!(table.num_rows(), 1);
        assert_eq!(table.schema().column_type("a"), Some(ColumnType::String));
        assert!(matches!(table.column("zz"), Err(TableError::UnknownColumn(_))));
    }
}
