mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use github_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "ghapi")]
#[command(about = "Probe GitHub REST API paths and report classified errors")]
struct Cli {
    /// Output format: text or json
    #[arg(long, default_value = "text", global = true)]
    output: String,

    /// API base URL
    #[arg(
        long,
        env = "GITHUB_API_URL",
        default_value = "https://api.github.com",
        global = true
    )]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// GET a path and print the JSON payload
    Get(commands::get::GetArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("github_api=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    };

    let client = Client::with_base_url(&cli.base_url);

    let code = match &cli.command {
        Commands::Get(args) => commands::get::run(args, &client, &format).await?,
    };
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
