//! chem-values: tipos de valor químico serializados.
//!
//! Este crate define el conjunto cerrado de notaciones químicas textuales que
//! una tabla puede transportar (SMILES, InChI, Mol, …), cada una como un tipo
//! de dominio distinguible que envuelve un string, y el contrato
//! decode/encode entre la celda cruda (JSON) y el valor tipado.
//!
//! Las variantes *adapter* llevan además un payload de metadata opaco que el
//! sistema productor adjunta; se preserva pero nunca se interpreta.

pub mod error;
pub mod macros;
pub mod value;

pub use error::ValueError;
pub use value::{AdapterPayload, ChemValue, ValueKind};
