use crate::cli::TreeArgs;
use crate::compiler::{self, UiNode};
use crate::config::Config;
use crate::output;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

pub fn run(args: TreeArgs) -> Result<()> {
    let config = Config::load()?;
    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(&config.generate.input_path));

    let raw = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let document: serde_json::Value = serde_json::from_str(&raw)?;
    let tree = compiler::build(&document)?;

    output::print_info(&format!("semantic tree from {}", input.display()));
    print_node(&tree, 0, args.depth);
    Ok(())
}

fn print_node(node: &UiNode, current_depth: u32, max_depth: u32) {
    let indent = "  ".repeat(current_depth as usize);
    let mut line = format!("{}{}", indent, node.component_type.as_str().cyan());
    if let Some(name) = &node.component_name {
        line.push_str(&format!(" {}", name));
    }
    if let Some(text) = node.text.as_deref().or(node.title.as_deref()) {
        line.push_str(&format!(" {}", format!("\"{}\"", text).dimmed()));
    }
    println!("{} [{}]", line, node.id.dimmed());

    if current_depth < max_depth {
        for child in node.children_slice() {
            print_node(child, current_depth + 1, max_depth);
        }
    }
}
