//! Catalog CLI - product batch intake
//!
//! ```bash
//! catalog serve                    # Start HTTP server (port 8080)
//! catalog validate batch.json      # Check a batch file offline
//! ```

use clap::{Parser, Subcommand};
use catalog::{load_batch_file, process_batch, BatchError};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Receive and check product batches from the admin page", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Validate a JSON file holding an array of products
    Validate {
        /// Input JSON file
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port } => cmd_serve(port).await,
        Commands::Validate { input } => cmd_validate(&input),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    catalog::server::start_server(port).await
}

fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Validating: {}", input.display());

    let body = load_batch_file(input)?;

    match process_batch(&body) {
        Ok(products) => {
            eprintln!("✅ All {} products valid!", products.len());
            println!("{}", serde_json::to_string_pretty(&products)?);
            Ok(())
        }
        Err(BatchError::InvalidRecords(failures)) => {
            for failure in &failures {
                eprintln!("\n   Record {}:", failure.record_index);
                for err in &failure.errors {
                    eprintln!("     - {}", err);
                }
            }
            Err(BatchError::InvalidRecords(failures).into())
        }
        Err(e) => Err(e.into()),
    }
}
