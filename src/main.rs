#[macro_use]
extern crate rocket;

mod backend;
mod catchers;
mod cli;
mod config;
mod error;
mod fairings;
mod frontend;
mod routes;
mod telemetry;
mod types;

#[cfg(test)]
mod test_helpers;

use clap::Parser;
use cli::{Cli, Command};
use config::{BackendConfig, FrontendConfig};

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    telemetry::init();

    match cli.command {
        Some(Command::Backend { port }) => {
            let config = BackendConfig {
                port,
                ..BackendConfig::default()
            };
            let _ = backend::rocket(&config)?.launch().await?;
        }
        Some(Command::Frontend { port, api_url }) => {
            let config = FrontendConfig::resolve(port, api_url);
            let _ = frontend::rocket(&config).launch().await?;
        }
        None => cli::print_usage(),
    }

    Ok(())
}
