//! Prints the config file JSON schema, or writes it to the path given as the
//! first argument.

use anyhow::{Context, Result};
use std::env;
use std::fs;

fn main() -> Result<()> {
    let schema = serde_json::to_string_pretty(&shapepick::Config::json_schema())?;

    match env::args_os().nth(1) {
        Some(path) => fs::write(&path, schema + "\n")
            .with_context(|| format!("Failed to write schema to {}", path.to_string_lossy()))?,
        None => println!("{schema}"),
    }
    Ok(())
}
