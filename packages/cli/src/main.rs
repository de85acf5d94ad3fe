mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{ast, check, AstArgs, CheckArgs};
use tracing_subscriber::EnvFilter;

/// Sall CLI - parse and inspect Sall stylesheets
#[derive(Parser, Debug)]
#[command(name = "sall")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log parser activity (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse every stylesheet under a path and report errors
    Check(CheckArgs),

    /// Print the syntax tree of one stylesheet
    Ast(AstArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Check(args) => check(args, &cwd),
            Command::Ast(args) => ast(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
