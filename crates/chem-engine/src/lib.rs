//! chemengine: puente al motor químico canónico (RDKit) y al codec SELFIES.
//!
//! Los parsers se invocan como oráculos opacos: "parsea la notación X desde
//! el string S o falla". El único estado es el módulo Python cargado una vez.

use pyo3::PyErr;
use thiserror::Error;
pub mod core;
pub use core::Mol;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Error inicializando Python/RDKit: {0}")]
    Init(PyErr),
    #[error("Error parseando {notation}: {source}")]
    Parse { notation: &'static str, source: PyErr },
    #[error("Error en codec SELFIES: {0}")]
    Codec(PyErr),
    #[error("Error consultando soporte SLN: {0}")]
    Probe(PyErr),
}

/// Handle al motor. Construirlo garantiza que el puente Python quedó cargado;
/// el handle en sí no lleva estado.
#[derive(Debug, Clone, Copy)]
pub struct ChemEngine {
    _private: (),
}

impl ChemEngine {
    /// Inicializa el puente Python/RDKit. Idempotente; si RDKit o selfies no
    /// están instalados el error lo dice de forma accionable.
    pub fn init() -> Result<Self, EngineError> {
        core::init_python().map_err(EngineError::Init)?;
        Ok(Self { _private: () })
    }

    pub fn mol_from_smiles(&self, payload: &str, sanitize: bool) -> Result<Mol, EngineError> {
        core::call_parser("mol_from_smiles", payload, sanitize)
            .map_err(|e| EngineError::Parse { notation: "SMILES", source: e })
    }

    pub fn mol_from_smarts(&self, payload: &str) -> Result<Mol, EngineError> {
        core::call_parser("mol_from_smarts", payload, false)
            .map_err(|e| EngineError::Parse { notation: "SMARTS", source: e })
    }

    pub fn mol_from_inchi(&self, payload: &str, sanitize: bool) -> Result<Mol, EngineError> {
        core::call_parser("mol_from_inchi", payload, sanitize)
            .map_err(|e| EngineError::Parse { notation: "InChI", source: e })
    }

    /// Bloques Mol/Ctab comparten parser: un Ctab es el cuerpo de un Mol block.
    pub fn mol_from_molblock(&self, payload: &str, sanitize: bool) -> Result<Mol, EngineError> {
        core::call_parser("mol_from_molblock", payload, sanitize)
            .map_err(|e| EngineError::Parse { notation: "Mol", source: e })
    }

    pub fn mol_from_mol2(&self, payload: &str, sanitize: bool) -> Result<Mol, EngineError> {
        core::call_parser("mol_from_mol2", payload, sanitize)
            .map_err(|e| EngineError::Parse { notation: "Mol2", source: e })
    }

    pub fn mol_from_sdf(&self, payload: &str, sanitize: bool) -> Result<Mol, EngineError> {
        core::call_parser("mol_from_sdf", payload, sanitize)
            .map_err(|e| EngineError::Parse { notation: "SDF", source: e })
    }

    pub fn mol_from_helm(&self, payload: &str) -> Result<Mol, EngineError> {
        core::call_parser("mol_from_helm", payload, false)
            .map_err(|e| EngineError::Parse { notation: "HELM", source: e })
    }

    /// Disponible sólo si el build de RDKit incluye rdSLNParse; ver
    /// [`ChemEngine::sln_supported`].
    pub fn mol_from_sln(&self, payload: &str) -> Result<Mol, EngineError> {
        core::call_parser("mol_from_sln", payload, false)
            .map_err(|e| EngineError::Parse { notation: "SLN", source: e })
    }

    /// Detecta si el parser SLN existe en este build de RDKit.
    pub fn sln_supported(&self) -> Result<bool, EngineError> {
        core::probe_sln().map_err(EngineError::Probe)
    }

    pub fn selfies_encode(&self, smiles: &str) -> Result<String, EngineError> {
        core::call_codec("selfies_encode", smiles).map_err(EngineError::Codec)
    }

    pub fn selfies_decode(&self, selfies: &str) -> Result<String, EngineError> {
        core::call_codec("selfies_decode", selfies).map_err(EngineError::Codec)
    }
}
