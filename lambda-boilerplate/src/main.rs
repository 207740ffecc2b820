//! `generate` CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use console::style;
use lambda_boilerplate::{observability, GenerateCommand, GeneratorOptions, TerminalPrompter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "generate")]
#[command(version)]
#[command(about = "Generate a Lambda boilerplate from template", long_about = None)]
struct Cli {
    /// Directory to generate the project in (default: current directory)
    lambda_path: Option<PathBuf>,
    /// Project name, offered as the default answer
    lambda_name: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = observability::init() {
        eprintln!("{}", style(format!("Failed to initialize logging: {err}")).yellow());
    }

    let options = GeneratorOptions::from_env(cli.lambda_path, cli.lambda_name);
    let command = GenerateCommand::new(options);

    match command.execute(&mut TerminalPrompter::default()) {
        Ok(project_path) => {
            println!(
                "{} {}",
                style("✓ Lambda generated").green().bold(),
                style(project_path.display()).cyan()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
