use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::output;
use anyhow::Result;
use colored::Colorize;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Path => path(),
        ConfigCommands::Get { key } => get(&key),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;
    println!("{}", "Effective configuration:".bold());
    for key in Config::known_keys() {
        let value = config.get_value(key).unwrap_or_default();
        println!("  {} = {}", key.cyan(), value);
    }
    println!(
        "  {} = {}",
        "figma_token".cyan(),
        if config.has_token() { "(set)" } else { "(not set)" }
    );
    Ok(())
}

fn path() -> Result<()> {
    match Config::config_path() {
        Some(p) => println!("{}", p.display()),
        None => output::print_warning("could not determine config directory"),
    }
    Ok(())
}

fn get(key: &str) -> Result<()> {
    let config = Config::load()?;
    match config.get_value(key) {
        Some(value) => println!("{}", value),
        None => anyhow::bail!(
            "Unknown config key: {}. Known keys: {}",
            key,
            Config::known_keys().join(", ")
        ),
    }
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set_value(key, value)?;
    config.save()?;
    output::print_success(&format!("set {} = {}", key, value));
    Ok(())
}
