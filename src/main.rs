use anyhow::Result;
use clap::Parser;
use tracing::warn;

#[derive(Parser)]
#[command(
    name = "two-numbers",
    version,
    about = "Multiply five by nine and print the product"
)]
struct Cli {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("two_numbers=warn")),
        )
        .init();

    let _cli = Cli::parse();

    // exit status stays 0 even when stdout is gone
    if let Err(e) = two_numbers::program::run() {
        warn!("failed to print result: {e}");
    }
    Ok(())
}
