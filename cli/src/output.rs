// Output formatting helpers

use anyhow::Context;
use classical_crypto::CipherKey;
use classical_crypto::ring::Matrix;
use serde::Serialize;
use std::fmt::Display;
use std::fs;

pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}

pub fn print_success(message: impl Display) {
    println!("✓ {message}");
}

pub fn print_info(message: impl Display) {
    println!("ℹ {message}");
}

pub fn print_matrix(name: &str, matrix: &Matrix) {
    println!("{name} =");
    for row in matrix {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>3}")).collect();
        println!("  [{}]", cells.join(""));
    }
}

/// Prints the key in the selected format and optionally saves it as a key file.
pub fn emit_key(key: &CipherKey, out: Option<&str>, json_output: bool) -> anyhow::Result<()> {
    if let Some(path) = out {
        fs::write(path, key.to_json()?).with_context(|| format!("Failed to write {path}"))?;
        log::info!("saved {} key to {}", key.family(), path);
    }

    if json_output {
        return print_json(key);
    }

    match key {
        CipherKey::Hill { matrix, padding } => {
            print_matrix("K", matrix);
            println!("padding = {padding}");
        }
        CipherKey::AffineHill { l, b } => {
            print_matrix("L", l);
            println!("b = {b:?}");
        }
        other => println!("{}", other.to_json()?),
    }
    if let Some(path) = out {
        print_success(format!("Key written to {path}"));
    }
    Ok(())
}
