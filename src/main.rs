mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command};
use cliui::{Config, Ui};
use std::io;
use std::time::Duration;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    let env = Config::from_env();
    let config = Config {
        verbose: env.verbose || cli.verbose > 0,
        quiet: cli.quiet,
        color: cli.color.into(),
        title: cli.title.into(),
        timestamp: cli.timestamp,
    };

    let mut ui = Ui::new(config);

    match cli.command {
        Command::Demo { delay_ms } => commands::demo::run(&mut ui, Duration::from_millis(delay_ms)),
        Command::TestColors => {
            commands::colors::run(&mut ui);
            Ok(())
        }
        Command::Threads { count } => {
            commands::threads::run(ui, count, commands::threads::STEP);
            Ok(())
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "cli-ui", &mut io::stdout());
            Ok(())
        }
    }
}
