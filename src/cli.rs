use crate::config::DEFAULT_BACKEND_PORT;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "echo_service")]
#[command(about = "Message backend and the frontend that renders it")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    #[command(about = "Start the JSON backend API")]
    Backend {
        #[arg(long, default_value_t = DEFAULT_BACKEND_PORT)]
        port: u16,
    },
    #[command(about = "Start the frontend that renders the backend message")]
    Frontend {
        #[arg(long)]
        port: Option<u16>,
        #[arg(long, help = "Backend base URL, overrides API_URL")]
        api_url: Option<String>,
    },
}

pub fn print_usage() {
    println!("Usage: echo_service <command>");
    println!();
    println!("Commands:");
    println!("  backend   Start the JSON backend API");
    println!("  frontend  Start the frontend");
    println!();
    println!("Run 'echo_service <command> --help' for more information on a command.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_without_subcommand() {
        let cli = Cli::try_parse_from(["app"]).expect("parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_backend_default_port() {
        let cli = Cli::try_parse_from(["app", "backend"]).expect("parse");
        assert_eq!(cli.command, Some(Command::Backend { port: 5001 }));
    }

    #[test]
    fn test_frontend_flags() {
        let cli = Cli::try_parse_from([
            "app",
            "frontend",
            "--port",
            "8080",
            "--api-url",
            "http://backend:5001",
        ])
        .expect("parse");
        assert_eq!(
            cli.command,
            Some(Command::Frontend {
                port: Some(8080),
                api_url: Some("http://backend:5001".into()),
            })
        );
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["app", "backend", "--port", "notaport"]).is_err());
    }
}
