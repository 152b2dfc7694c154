use crate::api::FigmaClient;
use crate::auth::{
    get_token_with_source, remove_token, store_token_in_config, store_token_in_keychain,
};
use crate::cli::AuthCommands;
use crate::output;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

const TOKEN_PAGE: &str = "https://www.figma.com/developers/api#access-tokens";

pub async fn run(command: AuthCommands) -> Result<()> {
    match command {
        AuthCommands::Login { keychain } => login(keychain).await,
        AuthCommands::Logout => logout(),
        AuthCommands::Status => status().await,
    }
}

async fn login(keychain: bool) -> Result<()> {
    println!("{}", "Figma Personal Access Token Setup".bold());
    println!();
    println!("Create a token at {} with the", TOKEN_PAGE);
    println!("file_content:read scope, then paste it below.");
    println!();

    if open::that(TOKEN_PAGE).is_err() {
        output::print_warning("could not open browser automatically");
    }

    let token = prompt("Paste your token: ")?;
    if token.is_empty() {
        output::print_error("no token provided");
        return Ok(());
    }

    print!("Validating token... ");
    io::stdout().flush()?;
    let client = FigmaClient::new(token.clone())?;
    let valid = client.validate_token().await?;
    println!("{}", if valid { "ok".green() } else { "failed".red() });
    if !valid {
        output::print_error("token rejected by Figma; check it and try again");
        return Ok(());
    }

    if keychain {
        store_token_in_keychain(&token)?;
        output::print_success("token stored in keychain");
    } else {
        store_token_in_config(&token)?;
        output::print_success("token stored in config file");
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn logout() -> Result<()> {
    match remove_token() {
        Ok(_) => output::print_success("token removed"),
        Err(e) => output::print_error(&format!("failed to remove token: {}", e)),
    }
    Ok(())
}

async fn status() -> Result<()> {
    let result = match get_token_with_source() {
        Ok(result) => result,
        Err(e) => {
            output::print_error(&format!("not authenticated: {}", e));
            return Ok(());
        }
    };

    println!("{}", "Authenticated".green().bold());
    println!("  Source: {}", result.source);

    let client = FigmaClient::new(result.token)?;
    if client.validate_token().await? {
        output::print_success("token accepted by Figma");
    } else {
        output::print_warning("token rejected by Figma");
    }
    Ok(())
}
