//! Demo ejecutable: corre las etapas de conversión sobre una tabla en
//! memoria y muestra el resultado por fila.

use chem_nodes::{CountCarbonsNode, RdkitMolNode, SmilesToSelfiesNode, TableNode};
use chem_table::{Cell, Column, ColumnType, Table};
use chem_values::ValueKind;
use chemengine::ChemEngine;
use serde_json::Value;

fn main() {
    // Cargar .env si existe (CHEM_BRIDGE_PYTHONPATH, etc.)
    let _ = dotenvy::dotenv();
    if let Err(e) = run_demo() {
        eprintln!("[chemio] {e}");
        std::process::exit(1);
    }
}

fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let engine = ChemEngine::init()?;
    println!("SLN soportado por este build de RDKit: {}", engine.sln_supported()?);

    // Una celda malformada a propósito: debe quedar en null sin abortar nada
    let raw: Vec<Value> = ["CC", "O", "c1ccccc1", "CCO", "not-a-smiles!!"].iter()
                                                                         .map(|s| Value::from(*s))
                                                                         .collect();
    let smiles = Column::from_raw("Smiles", ColumnType::Chemical(ValueKind::Smiles), &raw)?;
    let table = Table::from_columns(vec![smiles])?;

    let table = RdkitMolNode::new("Smiles").execute(&table)?;
    let table = CountCarbonsNode::new("Smiles").execute(&table)?;
    let table = SmilesToSelfiesNode::new("Smiles").execute(&table)?;

    let smiles = table.column("Smiles")?;
    let mols = table.column("RDKitMol")?;
    let carbons = table.column("NumCarbons")?;
    let selfies = table.column("SELFIES")?;

    println!("{:<16} {:<28} {:<12} SELFIES", "Smiles", "InChIKey", "NumCarbons");
    for row in 0..table.num_rows() {
        let payload = match smiles.get(row) {
            Some(Cell::Chem(v)) => v.payload(),
            _ => "<null>",
        };
        let inchikey = match mols.get(row) {
            Some(Cell::Mol(m)) => m.inchikey.as_str(),
            _ => "<null>",
        };
        let count = match carbons.get(row) {
            Some(Cell::Int(n)) => n.to_string(),
            _ => "<null>".to_string(),
        };
        let tokens = match selfies.get(row) {
            Some(Cell::Str(s)) => s.as_str(),
            _ => "<null>",
        };
        println!("{payload:<16} {inchikey:<28} {count:<12} {tokens}");
    }
    Ok(())
}
