use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use company_catalog::{config, server};
use std::env;
use tracing_subscriber::EnvFilter;

/// Company catalog service.
#[derive(Parser)]
#[command(name = "company-catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply migrations and serve HTTP (default)
    Serve,
    /// Apply database migrations and exit
    Migrate,
}

fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = config::load_from_env()?;
            init_tracing(&config.log_level, &config.log_format);
            config.print_summary();

            server::run(config).await
        }
        Command::Migrate => {
            init_tracing(
                &env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
                &env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            );

            let url = config::Config::load_database_url()
                .context("Failed to load database configuration")?;
            let pool = sqlx::PgPool::connect(&url)
                .await
                .context("Failed to connect to database")?;

            server::migrate(&pool).await?;
            pool.close().await;
            Ok(())
        }
    }
}
