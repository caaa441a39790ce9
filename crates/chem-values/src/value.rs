//! Conjunto cerrado de tipos de valor químico y su codec de celda.

use serde_json::Value;

use crate::ValueError;

/// Metadata adapter opaca: se preserva tal cual llegó, no se interpreta.
pub type AdapterPayload = serde_json::Value;

crate::chem_value_kinds! {
    plain {
        Ctab => "Ctab",
        Helm => "HELM",
        Inchi => "InChI",
        Mol => "Mol",
        Mol2 => "Mol2",
        Sdf => "SDF",
        Sln => "SLN",
        Smarts => "SMARTS",
        Smiles => "SMILES",
        Cml => "CML",
        Cdxml => "CDXML",
        Rxn => "Rxn",
    }
    adapter {
        HelmAdapter => "HELM-Adapter",
        InchiAdapter => "InChI-Adapter",
        MolAdapter => "Mol-Adapter",
        Mol2Adapter => "Mol2-Adapter",
        SdfAdapter => "SDF-Adapter",
        SmartsAdapter => "SMARTS-Adapter",
        SmilesAdapter => "SMILES-Adapter",
        CmlAdapter => "CML-Adapter",
        RxnAdapter => "Rxn-Adapter",
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[doc(hidden)]
pub fn expect_plain(kind: ValueKind, raw: &Value) -> Result<String, ValueError> {
    match raw.as_str() {
        Some(s) => Ok(s.to_owned()),
        None => Err(ValueError::ExpectedString { kind, found: json_type_name(raw) }),
    }
}

#[doc(hidden)]
pub fn expect_adapter(kind: ValueKind, raw: &Value) -> Result<(String, AdapterPayload), ValueError> {
    let record = raw.as_object()
                    .ok_or(ValueError::ExpectedRecord { kind, found: json_type_name(raw) })?;
    let payload = record.get("0").ok_or(ValueError::MissingAdapterKey { kind, key: "0" })?;
    let payload = payload.as_str()
                         .ok_or(ValueError::ExpectedString { kind, found: json_type_name(payload) })?;
    let adapters = record.get("1").ok_or(ValueError::MissingAdapterKey { kind, key: "1" })?;
    Ok((payload.to_owned(), adapters.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_roundtrip_decode_encode() {
        for kind in ValueKind::ALL.iter().copied().filter(|k| !k.is_adapter()) {
            let value = ChemValue::decode(kind, &json!("CCO")).unwrap().unwrap();
            assert_eq!(value.kind(), kind);
            assert_eq!(value.payload(), "CCO");
            assert!(value.adapters().is_none());
            // encode ∘ decode = identidad sobre la celda cruda
            assert_eq!(value.encode(), json!("CCO"));
            assert_eq!(ChemValue::decode(kind, &value.encode()).unwrap().unwrap(), value);
        }
    }

    #[test]
    fn adapter_roundtrip_decode_encode() {
        let meta = json!({"factory": "org.knime.chem.types", "cells": [1, 2]});
        for kind in ValueKind::ALL.iter().copied().filter(|k| k.is_adapter()) {
            let raw = json!({"0": "c1ccccc1", "1": meta});
            let value = ChemValue::decode(kind, &raw).unwrap().unwrap();
            assert_eq!(value.kind(), kind);
            assert_eq!(value.payload(), "c1ccccc1");
            assert_eq!(value.adapters(), Some(&meta));
            assert_eq!(value.encode(), raw);
            assert_eq!(ChemValue::decode(kind, &value.encode()).unwrap().unwrap(), value);
        }
    }

    #[test]
    fn null_cell_decodes_to_none() {
        assert_eq!(ChemValue::decode(ValueKind::Smiles, &Value::Null).unwrap(), None);
        assert_eq!(ChemValue::decode(ValueKind::SmilesAdapter, &Value::Null).unwrap(), None);
    }

    #[test]
    fn adapter_record_missing_key_is_structural_error() {
        let err = ChemValue::decode(ValueKind::SmilesAdapter, &json!({"0": "CC"})).unwrap_err();
        assert_eq!(err, ValueError::MissingAdapterKey { kind: ValueKind::SmilesAdapter, key: "1" });

        let err = ChemValue::decode(ValueKind::MolAdapter, &json!({"1": {}})).unwrap_err();
        assert_eq!(err, ValueError::MissingAdapterKey { kind: ValueKind::MolAdapter, key: "0" });
    }

    #[test]
    fn adapter_record_wrong_shape_is_structural_error() {
        let err = ChemValue::decode(ValueKind::InchiAdapter, &json!("InChI=1S/CH4/h1H4")).unwrap_err();
        assert_eq!(err,
                   ValueError::ExpectedRecord { kind: ValueKind::InchiAdapter, found: "string" });

        // payload no-string dentro del registro
        let err = ChemValue::decode(ValueKind::InchiAdapter, &json!({"0": 7, "1": {}})).unwrap_err();
        assert_eq!(err, ValueError::ExpectedString { kind: ValueKind::InchiAdapter, found: "number" });
    }

    #[test]
    fn plain_rejects_non_string_payload() {
        let err = ChemValue::decode(ValueKind::Smiles, &json!(["CC"])).unwrap_err();
        assert_eq!(err, ValueError::ExpectedString { kind: ValueKind::Smiles, found: "array" });
    }

    #[test]
    fn closed_set_has_twenty_one_tags() {
        assert_eq!(ValueKind::ALL.len(), 21);
        assert!(ValueKind::Sln.name() == "SLN" && !ValueKind::Sln.is_adapter());
        assert!(ValueKind::SmilesAdapter.is_adapter());
        assert_eq!(ValueKind::SmilesAdapter.to_string(), "SMILES-Adapter");
    }
}
