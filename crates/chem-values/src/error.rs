use thiserror::Error;

use crate::ValueKind;

/// Errores estructurales de decodificación de celdas.
///
/// Indican una violación de contrato del sistema productor (registro adapter
/// malformado, payload con el tipo JSON equivocado), no un problema químico
/// por fila; se propagan siempre.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("payload for {kind} must be a string, found {found}")]
    ExpectedString { kind: ValueKind, found: &'static str },
    #[error("adapter record for {kind} must be an object with keys \"0\" and \"1\", found {found}")]
    ExpectedRecord { kind: ValueKind, found: &'static str },
    #[error("adapter record for {kind} is missing key \"{key}\"")]
    MissingAdapterKey { kind: ValueKind, key: &'static str },
}
