use anyhow::Result;
use catalog_core::query::RowFilter;
use clap::{ArgAction, Parser, Subcommand};
use service_catalog::commands::{
    convert_command, flatten_command, init_config_command, list_providers_command, query_command,
    summary_command,
};

/// Cloud service catalog CLI.
///
/// This CLI is a thin wrapper around `catalog-core` (exposed in code as `catalog_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "service-catalog",
    version,
    about = "Build a Tier/Domain/Category catalog of equivalent cloud services",
    long_about = None
)]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Catalog root directory. Defaults to the current working directory.
    #[arg(long, default_value = ".", global = true)]
    root: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert the source spreadsheet into the hierarchy document (default).
    ///
    /// Reads `data.csv` and writes `data.yaml` unless the config or flags
    /// say otherwise.
    Convert {
        /// Source file; overrides the configured input.
        #[arg(long)]
        input: Option<String>,

        /// Destination document; overrides the configured output.
        #[arg(long)]
        output: Option<String>,
    },

    /// Write the default converter config to `.catalog/config.json`.
    InitConfig {
        /// Overwrite an existing config.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Flatten the hierarchy document back into delimited rows.
    Flatten {
        /// Hierarchy document; defaults to the configured output.
        #[arg(long)]
        input: Option<String>,

        /// Destination file. Rows go to stdout when omitted.
        #[arg(long)]
        output: Option<String>,
    },

    /// Search the hierarchy document.
    Query {
        /// Hierarchy document; defaults to the configured output.
        #[arg(long)]
        input: Option<String>,

        /// Case-insensitive text matched against names, ids, and services.
        #[arg(long, default_value = "")]
        search: String,

        /// Only categories under this tier (exact name).
        #[arg(long)]
        tier: Option<String>,

        /// Only categories under this domain (exact name).
        #[arg(long)]
        domain: Option<String>,

        /// Emit JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print node counts and provider coverage.
    Summary {
        /// Hierarchy document; defaults to the configured output.
        #[arg(long)]
        input: Option<String>,

        /// Emit JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List the provider columns recognised in the source.
    ListProviders {
        /// Emit JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let root = cli.root.as_str();

    // Default to a plain conversion if no command is provided.
    match cli.command.unwrap_or(Command::Convert { input: None, output: None }) {
        Command::Convert { input, output } => {
            convert_command(root, input.as_deref(), output.as_deref())?
        }
        Command::InitConfig { force } => init_config_command(root, force)?,
        Command::Flatten { input, output } => {
            flatten_command(root, input.as_deref(), output.as_deref())?
        }
        Command::Query { input, search, tier, domain, json } => {
            query_command(root, input.as_deref(), RowFilter { search, tier, domain }, json)?
        }
        Command::Summary { input, json } => summary_command(root, input.as_deref(), json)?,
        Command::ListProviders { json } => list_providers_command(root, json)?,
    }

    Ok(())
}
