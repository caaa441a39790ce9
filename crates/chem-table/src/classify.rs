//! Clasificador: ¿el tipo declarado de una columna contiene un formato de
//! molécula reconocido?

use chemengine::ChemEngine;

use crate::column::ColumnType;
use crate::errors::TableError;
use crate::registry;

/// Dos caminos de reconocimiento, combinados por OR: (1) el tag químico
/// pertenece al conjunto reconocido del registro; (2) la columna ya contiene
/// moléculas canónicas, que pasan sin re-parsear.
///
/// El camino (2) exige que el motor esté disponible. Si no lo está, el error
/// se propaga: devolver `false` en silencio haría invisibles las columnas de
/// moléculas para los selectores downstream, que es peor que fallar.
pub fn is_molecule_format(ty: &ColumnType) -> Result<bool, TableError> {
    match ty {
        ColumnType::Chemical(kind) => Ok(registry::is_recognized(*kind)),
        ColumnType::Molecule => {
            ChemEngine::init().map_err(|e| TableError::MissingDependency(e.to_string()))?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
