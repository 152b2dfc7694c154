use crate::cli::StatsArgs;
use crate::codegen;
use crate::compiler::{self, UiNode};
use crate::config::Config;
use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Tabled)]
struct ComponentUsage {
    #[tabled(rename = "Component")]
    component: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Serialize)]
struct StatsReport {
    total_nodes: usize,
    components: Vec<ComponentUsage>,
    imports: Vec<String>,
}

pub fn run(args: StatsArgs, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(&config.generate.input_path));

    let raw = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let document: serde_json::Value = serde_json::from_str(&raw)?;
    let tree = compiler::build(&document)?;

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    count_components(&tree, &mut counts);
    let total: usize = counts.values().sum();

    let components: Vec<ComponentUsage> = counts
        .into_iter()
        .map(|(component, count)| ComponentUsage {
            component: component.to_string(),
            count,
            share: format!("{:.0}%", (count as f64 / total as f64) * 100.0),
        })
        .collect();

    let imports = collect_imports(&tree);

    let report = StatsReport {
        total_nodes: total,
        components,
        imports,
    };

    match format {
        OutputFormat::Json => output::print_json(&report)?,
        OutputFormat::Table => {
            println!("{}", format!("Component usage: {}", input.display()).bold());
            println!();
            output::print_table(&report.components);
            println!();
            println!("  Total nodes: {}", report.total_nodes);
            if report.imports.is_empty() {
                println!("  Imports: {}", "none".dimmed());
            } else {
                println!("  Imports: {}", report.imports.join(", "));
            }
        }
    }

    Ok(())
}

fn count_components(node: &UiNode, counts: &mut BTreeMap<&'static str, usize>) {
    *counts.entry(node.component_type.as_str()).or_insert(0) += 1;
    for child in node.children_slice() {
        count_components(child, counts);
    }
}

/// The import names the emitter would synthesize, read back off the
/// generated source.
fn collect_imports(tree: &UiNode) -> Vec<String> {
    let source = codegen::emit(tree);
    let mut imports = Vec::new();
    for line in source.lines() {
        let Some(rest) = line.strip_prefix("import { ") else {
            continue;
        };
        let Some(names) = rest.split(" }").next() else {
            continue;
        };
        for name in names.split(", ") {
            imports.push(name.to_string());
        }
    }
    imports
}
