use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use focal::cli::args::{Cli, Commands};
use focal::cli::commands;
use focal::config::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.output;

    let output = match cli.command {
        Commands::Timer(args) => commands::timer(&config, &args)?,
        Commands::Report => commands::report(format)?,
        Commands::Categories => commands::categories(format)?,
        Commands::Clear { force } => commands::clear(force)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
