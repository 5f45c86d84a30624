pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "posts")]
#[command(about = "Posts CLI - database maintenance and development tokens")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Apply pending database migrations")]
    Migrate,

    #[command(about = "Insert randomly generated posts")]
    Seed {
        #[arg(long, help = "Number of posts to create", default_value = "10")]
        count: usize,
    },

    #[command(about = "Print a signed bearer token for the protected endpoints")]
    Token {
        #[arg(long, help = "Token subject", default_value = "admin")]
        subject: String,
        #[arg(long, help = "Lifetime in hours (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
        hours: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = crate::config::config();

    match cli.command {
        Commands::Migrate => commands::migrate::handle(config, output_format).await,
        Commands::Seed { count } => commands::seed::handle(config, count, output_format).await,
        Commands::Token { subject, hours } => commands::token::handle(config, &subject, hours, output_format),
    }
}
