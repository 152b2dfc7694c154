use anyhow::{anyhow, Context, Result};
use keyring::Entry;
use std::env;

use crate::config::Config;
use crate::output;

const SERVICE_NAME: &str = "figx";
const USERNAME: &str = "figma_token";

/// Where a token was found, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenSource {
    Environment,
    ConfigFile,
    Keychain,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Environment => write!(f, "environment variable (FIGMA_ACCESS_TOKEN)"),
            TokenSource::ConfigFile => write!(f, "config file"),
            TokenSource::Keychain => write!(f, "system keychain"),
        }
    }
}

pub struct TokenResult {
    pub token: String,
    pub source: TokenSource,
}

/// Resolve the Figma access token.
pub fn get_token() -> Result<String> {
    get_token_with_source().map(|r| r.token)
}

/// Resolve the token and report where it came from. Lookup order:
/// env var, then config file, then OS keychain.
pub fn get_token_with_source() -> Result<TokenResult> {
    let lookups: [(TokenSource, fn() -> Result<String>); 3] = [
        (TokenSource::Environment, token_from_env),
        (TokenSource::ConfigFile, get_token_from_config),
        (TokenSource::Keychain, get_token_from_keychain),
    ];

    for (source, lookup) in lookups {
        match lookup() {
            Ok(token) => return Ok(TokenResult { token, source }),
            Err(e) => output::print_verbose(&format!("token lookup failed ({}): {}", source, e)),
        }
    }

    Err(anyhow!(
        "No Figma token found. Set FIGMA_ACCESS_TOKEN or run 'figx auth login'"
    ))
}

fn token_from_env() -> Result<String> {
    match env::var("FIGMA_ACCESS_TOKEN") {
        Ok(token) if !token.is_empty() => Ok(token),
        _ => Err(anyhow!("FIGMA_ACCESS_TOKEN is not set")),
    }
}

pub fn get_token_from_config() -> Result<String> {
    let config = Config::load().context("failed to load config file")?;
    config
        .get_token()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("no token stored in config file"))
}

pub fn get_token_from_keychain() -> Result<String> {
    let entry = keychain_entry()?;
    match entry.get_password() {
        Ok(token) => Ok(token),
        Err(keyring::Error::NoEntry) => Err(anyhow!("no token stored in keychain")),
        Err(keyring::Error::NoStorageAccess(msg)) => Err(anyhow!("keychain access denied: {}", msg)),
        Err(e) => Err(anyhow!("keychain error: {}", e)),
    }
}

/// Store the token in the config file (default storage).
pub fn store_token_in_config(token: &str) -> Result<()> {
    let mut config = Config::load().context("failed to load config")?;
    config.set_token(token);
    config.save().context("failed to save config file")
}

/// Store the token in the OS keychain.
pub fn store_token_in_keychain(token: &str) -> Result<()> {
    keychain_entry()?
        .set_password(token)
        .context("failed to store token in keychain; run 'figx auth login' without --keychain to use the config file")
}

/// Remove the token from every storage location.
pub fn remove_token() -> Result<()> {
    let from_keychain = keychain_entry().and_then(|entry| {
        entry
            .delete_credential()
            .map_err(|e| anyhow!("keychain: {}", e))
    });
    let from_config = remove_token_from_config();

    if from_keychain.is_ok() || from_config.is_ok() {
        return Ok(());
    }
    Err(anyhow!(
        "failed to remove token: {}, {}",
        from_keychain.unwrap_err(),
        from_config.unwrap_err()
    ))
}

fn remove_token_from_config() -> Result<()> {
    let mut config = Config::load().context("failed to load config")?;
    if !config.has_token() {
        return Err(anyhow!("no token in config file"));
    }
    config.remove_token();
    config.save().context("failed to save config")
}

fn keychain_entry() -> Result<Entry> {
    Entry::new(SERVICE_NAME, USERNAME).context("keychain is not available on this system")
}
