//! soundseek - find phonetically similar words in a text file

use clap::Parser;
use colored::Colorize;
use std::process;

use soundseek::cli::commands;
use soundseek::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::execute(cli.command, cli.config.as_deref()) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
