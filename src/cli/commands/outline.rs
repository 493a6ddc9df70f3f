//! Outline command.

use anyhow::Result;

use super::emit;
use crate::io::{EntityType, Envelope, ExitStatus};
use crate::outline::model_outline;

/// Print every public symbol of the model, one per line.
pub fn run_outline(json: bool) -> Result<ExitStatus> {
    let symbols = model_outline();
    let count = symbols.len();

    let lines: Vec<String> = symbols
        .iter()
        .map(|symbol| {
            let mut line = format!("{:<9} {:<40}", symbol.kind, symbol.qualified_name());
            if let Some(target) = symbol.overrides {
                line.push_str(&format!(" overrides {target}"));
            }
            if !symbol.implements.is_empty() {
                line.push_str(&format!(" implements {}", symbol.implements.join(", ")));
            }
            line.trim_end().to_string()
        })
        .collect();

    let envelope = Envelope::success(symbols)
        .with_entity_type(EntityType::Outline)
        .with_count(count);
    emit(envelope, json, || {
        for line in &lines {
            println!("{line}");
        }
    })
}
