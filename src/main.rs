//! Conference standings CLI
//!
//! Reads a team listing and prints the conference(s) with the best average
//! win ratio as `name : ratio` lines.

use clap::Parser;
use conference_core::constants::DEFAULT_CONFIG_PATH;
use conference_core::pipeline::{failure_output, run, FailureOutput};
use conference_core::{Config, Result};
use std::io::BufRead;

#[derive(Parser)]
#[command(name = "conference_core")]
#[command(about = "Find the conference with the best average win ratio", long_about = None)]
struct Cli {
    /// Team listing file (read from stdin when omitted)
    path: Option<String>,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Also list every conference, best average first
    #[arg(long)]
    all: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let mut config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };
    if cli.all {
        config.report.show_all = true;
    }

    let path = match cli.path {
        Some(p) => p,
        None => match read_path_from_stdin() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    };

    match run(&path, &config) {
        Ok(report) => print!("{}", report.render(config.report.precision)),
        Err(e) => {
            match failure_output(&e) {
                FailureOutput::Stdout(msg) => println!("{}", msg),
                FailureOutput::Stderr(msg) => eprintln!("{}", msg),
            }
            std::process::exit(1);
        }
    }
}

fn read_path_from_stdin() -> Result<String> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
