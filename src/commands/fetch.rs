use crate::api::{FigmaClient, FigmaLocator};
use crate::auth::get_token;
use crate::cli::FetchArgs;
use crate::output;
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::env;
use std::fs;
use std::time::Duration;

/// Sidecar metadata written next to the downloaded document
#[derive(Serialize)]
struct FetchMeta {
    file_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    node_id: Option<String>,
    fetched_at: String,
}

pub async fn run(args: FetchArgs) -> Result<()> {
    let source = args
        .file_key_or_url
        .or_else(|| env::var("FIGMA_FILE_KEY").ok())
        .ok_or_else(|| {
            anyhow!("No file key given. Pass one as an argument or set FIGMA_FILE_KEY.")
        })?;
    let locator = FigmaLocator::parse(&source)?;
    let node_id = args.node.or(locator.node_id);

    let token = get_token()?;
    let client = FigmaClient::new(token)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(format!("Fetching {}...", locator.file_key));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let document = match &node_id {
        Some(id) => client.get_node_raw(&locator.file_key, id).await?,
        None => client.get_file_raw(&locator.file_key).await?,
    };

    spinner.finish_and_clear();

    let file_name = document
        .get("name")
        .and_then(|n| n.as_str())
        .map(str::to_string)
        .or(locator.file_name);

    let json = serde_json::to_string_pretty(&document)?;
    fs::write(&args.output, format!("{}\n", json))
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let meta = FetchMeta {
        file_key: locator.file_key.clone(),
        file_name: file_name.clone(),
        node_id,
        fetched_at: chrono::Utc::now().to_rfc3339(),
    };
    let meta_path = args.output.with_extension("meta.toml");
    fs::write(&meta_path, toml::to_string_pretty(&meta)?)
        .with_context(|| format!("Failed to write {}", meta_path.display()))?;

    match &file_name {
        Some(name) => output::print_success(&format!(
            "fetched {} ({}) to {}",
            name,
            locator.file_key,
            args.output.display()
        )),
        None => output::print_success(&format!(
            "fetched {} to {}",
            locator.file_key,
            args.output.display()
        )),
    }
    output::print_info(&format!("metadata sidecar: {}", meta_path.display()));
    if !output::is_quiet() {
        println!();
        println!("Next: {}", "figx generate".bold());
    }

    Ok(())
}
