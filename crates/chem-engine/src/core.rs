use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};
use serde::{Deserialize, Serialize};
use std::ffi::CString;
use std::sync::OnceLock;

static BRIDGE_MODULE: OnceLock<Py<PyModule>> = OnceLock::new();

/// Carga el módulo puente (RDKit + SELFIES) en el intérprete embebido.
/// Idempotente: el módulo se guarda en un OnceLock y las cargas posteriores
/// reutilizan la misma instancia.
pub fn init_python() -> PyResult<()> {
    if BRIDGE_MODULE.get().is_some() {
        return Ok(());
    }
    // .env puede definir CHEM_BRIDGE_PYTHONPATH para localizar site-packages
    let _ = dotenvy::dotenv();
    Python::attach(|py| {
        if let Ok(extra) = std::env::var("CHEM_BRIDGE_PYTHONPATH") {
            let sys = py.import("sys")?;
            sys.getattr("path")?.call_method1("append", (extra,))?;
        }
        let code = CString::new(include_str!("../python/chem_bridge.py"))?;
        let module = PyModule::from_code(py, code.as_c_str(), c_str!("chem_bridge.py"), c_str!("chem_bridge"))?;
        BRIDGE_MODULE.set(module.unbind()).ok();
        Ok(())
    })
}

fn get_module(py: Python<'_>) -> PyResult<Py<PyModule>> {
    BRIDGE_MODULE.get().map(|module| module.clone_ref(py)).ok_or_else(|| {
                                                               PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
            "init_python() debe llamarse antes de usar el puente"
        )
                                                           })
}

/// Molécula canónica producida por el motor químico. Esta capa sólo la
/// transporta; nunca inspecciona su semántica más allá de los conteos que
/// las etapas derivadas necesitan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mol {
    pub smiles: String,
    pub inchikey: String,
    pub num_atoms: u32,
    pub atomic_numbers: Vec<u8>,
}

impl Mol {
    /// Cuenta los átomos con el número atómico dado.
    pub fn count_atomic_number(&self, z: u8) -> i64 {
        self.atomic_numbers.iter().filter(|&&n| n == z).count() as i64
    }
}

pub(crate) fn call_parser(name: &str, payload: &str, sanitize: bool) -> PyResult<Mol> {
    Python::attach(|py| {
        let bridge_py = get_module(py)?;
        let bridge = bridge_py.bind(py);
        let binding = bridge.getattr(name)?.call1((payload, sanitize))?;
        let info = binding.downcast::<PyDict>()?;
        let json_str: String = py.import("json")?.call_method1("dumps", (info,))?.extract()?;
        let mol: Mol = serde_json::from_str(&json_str).map_err(|e| {
                           PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Deserialization error: {}", e))
                       })?;
        Ok(mol)
    })
}

pub(crate) fn call_codec(name: &str, value: &str) -> PyResult<String> {
    Python::attach(|py| {
        let bridge_py = get_module(py)?;
        let bridge = bridge_py.bind(py);
        bridge.getattr(name)?.call1((value,))?.extract()
    })
}

pub(crate) fn probe_sln() -> PyResult<bool> {
    Python::attach(|py| {
        let bridge_py = get_module(py)?;
        bridge_py.bind(py).getattr("sln_supported")?.call0()?.extract()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mol_count_atomic_number() {
        let m = Mol { smiles: "CCO".to_string(),
                      inchikey: String::new(),
                      num_atoms: 3,
                      atomic_numbers: vec![6, 6, 8] };
        assert_eq!(m.count_atomic_number(6), 2);
        assert_eq!(m.count_atomic_number(8), 1);
        assert_eq!(m.count_atomic_number(7), 0);
    }

    #[test]
    fn test_parse_smiles() {
        init_python().expect("Fallo al inicializar Python/RDKit");
        let mol = call_parser("mol_from_smiles", "CCO", true).expect("Fallo al parsear SMILES");
        assert_eq!(mol.num_atoms, 3);
        assert_eq!(mol.count_atomic_number(6), 2);
    }

    #[test]
    fn test_parse_smiles_invalido() {
        init_python().expect("Fallo al inicializar Python/RDKit");
        assert!(call_parser("mol_from_smiles", "not-a-smiles!!", true).is_err());
    }
}
