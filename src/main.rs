mod cli;
mod client;
mod config;
mod error;
mod output;
mod types;

use std::error::Error;
use std::io::{self, Write};

use clap::Parser;

use cli::Cli;
use client::UserClient;
use config::Config;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");

        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let base_url = config.resolve_base_url(cli.base_url.as_deref());
    let client = UserClient::new(&base_url, cli.monitor)?;

    // Fetch completes before anything is written to stdout, so a failed
    // request produces no partial output.
    let users = client.get_users().await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    output::write_users(&mut out, &users)?;
    output::write_json(&mut out, &users)?;
    out.flush()?;

    Ok(())
}
