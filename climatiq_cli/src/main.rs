mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use climatiq_api::{Client, DEFAULT_BASE_URL};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "climatiq")]
#[command(about = "Search emission factors in the Climatiq database")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Climatiq API key
    #[arg(long, env = "CLIMATIQ_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// API root, including the trailing slash
    #[arg(long, default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search emission factors
    Search(commands::search::SearchArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("climatiq=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = Client::builder()
        .base_url(&cli.base_url)
        .auth_token(cli.api_key.as_deref().unwrap_or_default())
        .build()?;

    match &cli.command {
        Commands::Search(args) => commands::search::run(args, &client, &format).await?,
    }

    Ok(())
}
