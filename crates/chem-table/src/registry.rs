//! Registro de formatos: mapeo inmutable tag → parser del motor canónico.
//!
//! Se construye una sola vez (OnceLock) y después es de sólo lectura; el
//! orden de construcción es irrelevante porque es un mapa puro clave→función.
//! La búsqueda es por identidad exacta de tag, sin coerciones.

use std::sync::OnceLock;

use chem_values::ValueKind;
use chemengine::{ChemEngine, EngineError, Mol};
use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::convert::ConvertOptions;
use crate::errors::TableError;

/// Parser canónico por formato. Punteros a función: despacho O(1) sin
/// inspección de tipos en runtime.
pub type ParserFn = fn(&ChemEngine, &str, &ConvertOptions) -> Result<Mol, EngineError>;

/// Decisión explícita de configuración: tags del conjunto cerrado que quedan
/// SIN parser. Una variante adapter se excluye exactamente cuando su forma
/// plana lo está; nada entra al conjunto reconocido sólo por la vía adapter.
pub const UNSUPPORTED_KINDS: &[ValueKind] = &[ValueKind::Cml,
                                              ValueKind::CmlAdapter,
                                              ValueKind::Cdxml,
                                              ValueKind::Rxn,
                                              ValueKind::RxnAdapter];

// Conjunto memoizado de tags reconocidos: función pura de datos estáticos,
// no necesita el motor y jamás se invalida.
static RECOGNIZED: Lazy<IndexSet<ValueKind>> = Lazy::new(|| {
    ValueKind::ALL.iter().copied().filter(|kind| !UNSUPPORTED_KINDS.contains(kind)).collect()
});

/// Pertenencia al conjunto de formatos de molécula reconocidos.
pub fn is_recognized(kind: ValueKind) -> bool {
    RECOGNIZED.contains(&kind)
}

pub fn recognized_kinds() -> &'static IndexSet<ValueKind> {
    &RECOGNIZED
}

fn parse_smiles(engine: &ChemEngine, payload: &str, options: &ConvertOptions) -> Result<Mol, EngineError> {
    engine.mol_from_smiles(payload, options.sanitize)
}

fn parse_smarts(engine: &ChemEngine, payload: &str, _options: &ConvertOptions) -> Result<Mol, EngineError> {
    engine.mol_from_smarts(payload)
}

fn parse_inchi(engine: &ChemEngine, payload: &str, options: &ConvertOptions) -> Result<Mol, EngineError> {
    engine.mol_from_inchi(payload, options.sanitize)
}

fn parse_molblock(engine: &ChemEngine, payload: &str, options: &ConvertOptions) -> Result<Mol, EngineError> {
    engine.mol_from_molblock(payload, options.sanitize)
}

fn parse_mol2(engine: &ChemEngine, payload: &str, options: &ConvertOptions) -> Result<Mol, EngineError> {
    engine.mol_from_mol2(payload, options.sanitize)
}

fn parse_sdf(engine: &ChemEngine, payload: &str, options: &ConvertOptions) -> Result<Mol, EngineError> {
    engine.mol_from_sdf(payload, options.sanitize)
}

fn parse_helm(engine: &ChemEngine, payload: &str, _options: &ConvertOptions) -> Result<Mol, EngineError> {
    engine.mol_from_helm(payload)
}

fn parse_sln(engine: &ChemEngine, payload: &str, _options: &ConvertOptions) -> Result<Mol, EngineError> {
    engine.mol_from_sln(payload)
}

enum Entry {
    Available(ParserFn),
    /// Formato reconocido cuyo parser falta en este build del motor (SLN).
    Unavailable(&'static str),
}

/// Mapeo inmutable tag → parser, construido una vez por proceso.
pub struct FormatRegistry {
    entries: IndexMap<ValueKind, Entry>,
}

impl FormatRegistry {
    fn build(engine: &ChemEngine) -> Self {
        let sln_ok = engine.sln_supported().unwrap_or(false);
        if !sln_ok {
            warn!("RDKit sin rdSLNParse: las celdas SLN se convertirán a null");
        }
        let mut entries: IndexMap<ValueKind, Entry> = IndexMap::new();
        for kind in ValueKind::ALL {
            let entry = match kind {
                ValueKind::Smiles | ValueKind::SmilesAdapter => Entry::Available(parse_smiles),
                ValueKind::Smarts | ValueKind::SmartsAdapter => Entry::Available(parse_smarts),
                ValueKind::Inchi | ValueKind::InchiAdapter => Entry::Available(parse_inchi),
                ValueKind::Mol | ValueKind::MolAdapter | ValueKind::Ctab => Entry::Available(parse_molblock),
                ValueKind::Mol2 | ValueKind::Mol2Adapter => Entry::Available(parse_mol2),
                ValueKind::Sdf | ValueKind::SdfAdapter => Entry::Available(parse_sdf),
                ValueKind::Helm | ValueKind::HelmAdapter => Entry::Available(parse_helm),
                ValueKind::Sln => {
                    if sln_ok {
                        Entry::Available(parse_sln)
                    } else {
                        Entry::Unavailable("rdSLNParse no disponible")
                    }
                }
                // Fuera de soporte: sin entrada en el registro
                ValueKind::Cml | ValueKind::CmlAdapter | ValueKind::Cdxml | ValueKind::Rxn
                | ValueKind::RxnAdapter => continue,
            };
            entries.insert(*kind, entry);
        }
        Self { entries }
    }

    /// Instancia global. La primera llamada construye (y sondea el soporte
    /// SLN); las siguientes reutilizan. Construir dos veces sería redundante
    /// pero no inseguro: el registro es función pura de datos estáticos.
    pub fn global(engine: &ChemEngine) -> &'static FormatRegistry {
        static REGISTRY: OnceLock<FormatRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| FormatRegistry::build(engine))
    }

    /// Búsqueda por identidad exacta de tag. Un tag excluido (o SLN sin
    /// parser en este build) produce `UnsupportedFormat`; un tag fuera del
    /// conjunto cerrado es irrepresentable.
    pub fn lookup(&self, kind: ValueKind) -> Result<ParserFn, TableError> {
        match self.entries.get(&kind) {
            Some(Entry::Available(parser)) => Ok(*parser),
            Some(Entry::Unavailable(reason)) => {
                debug!("{kind}: {reason}");
                Err(TableError::UnsupportedFormat(kind))
            }
            None => Err(TableError::UnsupportedFormat(kind)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
