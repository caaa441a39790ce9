//! chem-nodes: etapas de pipeline sobre tablas químicas.
//!
//! Cada etapa declara su columna de salida en `configure` (transformación de
//! esquema) y la produce en `execute` (misma tabla más una columna). Etapas:
//! - extracción de moléculas canónicas desde cualquier formato reconocido,
//! - conteo de carbonos por fila,
//! - SMILES → SELFIES y SELFIES → SMILES, con aislamiento de fallos por celda.

pub mod node;
pub mod num_carbons;
pub mod rdkit_mol;
pub mod selfies;

pub use node::{NodeError, TableNode};
pub use num_carbons::CountCarbonsNode;
pub use rdkit_mol::RdkitMolNode;
pub use selfies::{selfies_to_smiles, smiles_to_selfies, SelfiesToSmilesNode, SmilesToSelfiesNode};
