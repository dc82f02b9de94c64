//! CLI command implementations

pub mod bars;
pub mod ideas;
pub mod roadmaps;
pub mod status;

use anyhow::Result;
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
