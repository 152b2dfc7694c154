use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "figx")]
#[command(author, version)]
#[command(about = "Figma to React Native - generate JSX screens from design files")]
#[command(long_about = "A deterministic transpiler from Figma design documents to React Native
JSX screens composed from a fixed component library.

Semantic meaning is recovered from the Name_TYPE naming convention
(Sign_BUTTON, Home_SAFEAREAVIEW, Billing_TOUCHABLE_CARD, ...), never from
visual heuristics. Identical input always produces identical output.

Requires a Figma Personal Access Token for fetching. Get one at:
https://www.figma.com/developers/api#access-tokens

Set via FIGMA_ACCESS_TOKEN environment variable or run 'figx auth login'.")]
#[command(after_help = "GETTING STARTED:
    figx auth login                             Store your Figma token
    figx fetch <URL>                            Download a document to input.json
    figx generate                               Compile input.json to output.tsx

COMMON WORKFLOWS:
    figx fetch <URL> && figx generate           Fetch and compile in one go
    figx tree                                   Inspect the semantic tree
    figx stats --json                           Component usage as JSON

Learn more: https://github.com/figx-dev/figx")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (table or json)
    #[arg(long, global = true, value_enum, help = "Output format")]
    pub format: Option<OutputFormat>,
    /// Output JSON (alias for --format json)
    #[arg(long, global = true, conflicts_with = "format", help = "Output JSON")]
    pub json: bool,
    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose", help = "Quiet mode")]
    pub quiet: bool,
    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet", help = "Verbose mode")]
    pub verbose: bool,
    /// Disable colored output
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a Figma document into a JSX screen
    #[command(long_about = "Compile a Figma document JSON file into a JSX screen.

Reads the document (a Figma REST file response or a bare node tree),
builds the semantic tree, and writes two artefacts: the tree as JSON and
the generated screen source.

Exit code is 1 when no component node (Name_TYPE) exists in the document.")]
    #[command(after_help = "EXAMPLES:
    figx generate
    figx generate --input design.json --tsx-out src/screens/Home.tsx
    figx generate --screen-name HomeScreen")]
    Generate(GenerateArgs),

    /// Download a Figma document to a local JSON file
    #[command(long_about = "Download a Figma document via the REST API.

Writes the raw document JSON (ready for 'figx generate') plus a small
metadata sidecar recording the file key, name, and fetch time.

The file key can also come from the FIGMA_FILE_KEY environment variable.")]
    #[command(after_help = "EXAMPLES:
    figx fetch abc123
    figx fetch \"https://www.figma.com/design/abc123/App?node-id=1-2\"
    FIGMA_FILE_KEY=abc123 figx fetch")]
    Fetch(FetchArgs),

    /// Print the semantic component tree
    #[command(long_about = "Build the semantic tree from a document JSON file and print it.

Shows component types, names, and collapsed text content as an indented
tree. Useful for checking how the naming convention was interpreted
before generating code.")]
    #[command(after_help = "EXAMPLES:
    figx tree
    figx tree --input design.json --depth 5")]
    Tree(TreeArgs),

    /// Summarize component usage in a document
    #[command(long_about = "Build the semantic tree and summarize component usage.

Shows each component type with its occurrence count and share, plus the
imports the generated screen would carry.")]
    #[command(after_help = "EXAMPLES:
    figx stats
    figx stats --input design.json --json")]
    Stats(StatsArgs),

    /// Manage authentication (login, logout, status)
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Input document JSON (defaults to input.json)
    #[arg(short, long, help = "Path to the Figma document JSON")]
    pub input: Option<PathBuf>,
    /// Semantic tree output path (defaults to output.json)
    #[arg(long, help = "Where to write the semantic tree JSON")]
    pub json_out: Option<PathBuf>,
    /// Screen source output path (defaults to output.tsx)
    #[arg(long, help = "Where to write the generated screen")]
    pub tsx_out: Option<PathBuf>,
    /// Name of the exported screen function
    #[arg(long, help = "Screen function name (default GeneratedScreen)")]
    pub screen_name: Option<String>,
}

#[derive(clap::Args)]
pub struct FetchArgs {
    /// Figma file key or URL (falls back to FIGMA_FILE_KEY)
    #[arg(help = "File key (abc123) or full Figma URL")]
    pub file_key_or_url: Option<String>,
    /// Fetch a specific node instead of the whole document
    #[arg(short, long, help = "Node ID to fetch (e.g. \"1:2\")")]
    pub node: Option<String>,
    /// Output path for the document JSON
    #[arg(short, long, default_value = "input.json", help = "Where to save the document")]
    pub output: PathBuf,
}

#[derive(clap::Args)]
pub struct TreeArgs {
    /// Input document JSON (defaults to input.json)
    #[arg(short, long, help = "Path to the Figma document JSON")]
    pub input: Option<PathBuf>,
    /// Maximum depth to display
    #[arg(short, long, default_value = "10", help = "How many levels deep to show")]
    pub depth: u32,
}

#[derive(clap::Args)]
pub struct StatsArgs {
    /// Input document JSON (defaults to input.json)
    #[arg(short, long, help = "Path to the Figma document JSON")]
    pub input: Option<PathBuf>,
}

// Auth subcommands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Store your Figma Personal Access Token
    #[command(long_about = "Store your Figma Personal Access Token.

Opens your browser to the Figma token creation page, then prompts you to
paste your token. By default the token is stored in the config file;
use --keychain for the OS keychain.

Token priority: FIGMA_ACCESS_TOKEN env var > config file > keychain")]
    Login {
        /// Store token in the OS keychain instead of the config file
        #[arg(long, help = "Store token in keychain (secure)")]
        keychain: bool,
    },

    /// Remove stored authentication token
    Logout,

    /// Check current authentication status
    #[command(long_about = "Verify your Figma authentication is working.

Checks for a valid token, tests it against the Figma API, and shows
which token source is being used.")]
    Status,
}

// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,

    /// Print config file path
    Path,

    /// Get a specific configuration value
    Get {
        /// Config key (e.g. generate.screen_name)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Config key (e.g. generate.screen_name)
        key: String,
        /// Value to set
        value: String,
    },
}
