use crate::cli::GenerateArgs;
use crate::codegen;
use crate::compiler;
use crate::config::Config;
use crate::output;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn run(args: GenerateArgs) -> Result<()> {
    let config = Config::load()?;

    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(&config.generate.input_path));
    let json_out = args
        .json_out
        .unwrap_or_else(|| PathBuf::from(&config.generate.json_path));
    let tsx_out = args
        .tsx_out
        .unwrap_or_else(|| PathBuf::from(&config.generate.tsx_path));
    let screen_name = args
        .screen_name
        .unwrap_or_else(|| config.generate.screen_name.clone());

    let raw = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let document: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", input.display()))?;

    let tree = compiler::build(&document)?;
    output::print_verbose(&format!("Parsed {} semantic nodes", tree.node_count()));

    let tree_json = serde_json::to_string_pretty(&tree)?;
    fs::write(&json_out, format!("{}\n", tree_json))
        .with_context(|| format!("Failed to write {}", json_out.display()))?;

    let source = codegen::emit_named(&tree, &screen_name);
    fs::write(&tsx_out, &source)
        .with_context(|| format!("Failed to write {}", tsx_out.display()))?;

    output::print_success(&format!(
        "wrote {} ({} nodes) and {} ({} lines)",
        json_out.display(),
        tree.node_count(),
        tsx_out.display(),
        source.lines().count()
    ));

    Ok(())
}
