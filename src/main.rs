use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use tpomo::cli::{resolve_countdown, Cli, Prompter};
use tpomo::config::{Config, Paths};
use tpomo::error::TpomoError;
use tpomo::features::quotes::{BuiltinQuotes, NoQuote, QuoteSource};
use tpomo::{logging, output, tui};

fn main() {
    let cli = Cli::parse();
    let paths = Paths::default();

    if let Err(e) = run(&cli, &paths) {
        if e.downcast_ref::<TpomoError>().is_some_and(TpomoError::is_config) {
            eprintln!("{}: {}", "error".red().bold(), e);
        } else {
            tracing::error!("session failed: {e:#}");
            let crash_log = &paths.crash_log;
            match logging::write_crash_report(crash_log, &format!("{e:?}")) {
                Ok(()) => eprintln!(
                    "{}: {e:#}\n(details written to {})",
                    "error".red().bold(),
                    crash_log.display()
                ),
                Err(_) => eprintln!("{}: {e:#}", "error".red().bold()),
            }
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli, paths: &Paths) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());
    let config = Config::load_from_path(&config_path)?;
    logging::init(paths);
    tracing::info!(config = %config_path.display(), "starting tpomo");

    let countdown = {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        resolve_countdown(cli, &config, &mut prompter)?
    };

    let quotes: Box<dyn QuoteSource> = if cli.no_quote || !config.display.show_quote {
        Box::new(NoQuote)
    } else {
        Box::new(BuiltinQuotes::new(config.display.quotes.clone()))
    };

    let mut options = config.session_options();
    if let Some(style) = cli.progress {
        options.progress_style = style;
    }

    let report = tui::run(&countdown, options, quotes).context("countdown session failed")?;
    println!("{}", output::session_summary(&report));
    Ok(())
}
