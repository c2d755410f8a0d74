use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::Write;
use std::process::ExitCode;

use appwipe::apps::{self, UninstallOptions, UninstallOutcome};
use appwipe::cli::args::{Cli, OutputFormat};
use appwipe::common::config::Config;
use appwipe::common::errors::AppWipeError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("appwipe=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    // Settled once the config is read; errors before that use the flag alone
    let mut format = cli.format.unwrap_or_default();

    match run(&cli, &mut format) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            // Fatal errors go to stdout alongside the rest of the run output
            match format {
                OutputFormat::Human => println!("{}", format!("Error: {}", e).red()),
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "error": e.to_string() }))
                }
            }
            let _ = std::io::stdout().flush();
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli, format: &mut OutputFormat) -> Result<u8> {
    let app_path = cli.app.clone().ok_or(AppWipeError::NoAppPath)?;

    let home = cli
        .home
        .clone()
        .or_else(dirs::home_dir)
        .ok_or(AppWipeError::HomeNotFound)?;

    let config = Config::load(&home)?;
    *format = cli.format.unwrap_or(config.output_format);

    let opts = UninstallOptions {
        app_path,
        home,
        non_interactive: cli.yes,
        dry_run: cli.dry_run,
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    let outcome = match *format {
        OutputFormat::Human => {
            let mut out = std::io::stdout().lock();
            apps::run_uninstall(&opts, &config, &mut input, &mut out)?
        }
        // Keep stdout for the JSON document; the summary and prompt go to stderr
        OutputFormat::Json => {
            let mut out = std::io::stderr().lock();
            let outcome = apps::run_uninstall(&opts, &config, &mut input, &mut out)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            outcome
        }
    };

    if let UninstallOutcome::Completed(ref report) = outcome {
        tracing::debug!(
            removed = report.removed_count(),
            failed = report.failed_count(),
            "uninstall finished"
        );
    }

    Ok(outcome.exit_code())
}
