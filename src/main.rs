mod error;
mod fetch;
mod model;
mod parser;
mod scrape;
mod server;

use clap::{Parser, Subcommand};

use crate::model::PriceReport;

#[derive(Parser)]
#[command(name = "mandi_scraper", about = "Agri commodity price API over napanta.com")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP price API
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(short, long, default_value = "5000")]
        port: u16,
    },
    /// Fetch one state/commodity report and print it as JSON
    Fetch {
        state: String,
        commodity: String,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Run the pipeline on a saved HTML file (offline debugging)
    Parse {
        file: std::path::PathBuf,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => server::run(&host, port).await,
        Commands::Fetch {
            state,
            commodity,
            pretty,
        } => {
            let report = match scrape::scrape(&state, &commodity).await {
                Ok(report) => report,
                Err(e) => PriceReport::failure(&e),
            };
            print_report(&report, pretty)
        }
        Commands::Parse { file, pretty } => {
            let html = std::fs::read_to_string(&file)?;
            let tables = parser::parse_document(&html);
            // Offline runs have no request identifiers; label them as such.
            let report = PriceReport::success(
                "local".into(),
                file.display().to_string(),
                tables.summary,
                tables.market_prices,
            );
            print_report(&report, pretty)
        }
    }
}

fn print_report(report: &PriceReport, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{}", json);
    Ok(())
}
