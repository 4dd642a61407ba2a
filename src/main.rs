use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{Cli, Commands, TimerArgs};
use pomo::cli::commands;
use pomo::config::{Config, Paths};
use pomo::error::PomoError;
use pomo::logging::{self, LogTarget};
use pomo::pomodoro::{Alerts, Pomodoro};
use pomo::tui::{self, App};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::default();
    let format = cli.output;
    let verbose = cli.verbose;
    let command = cli.into_command();

    if matches!(command, Commands::Tui(_)) {
        paths.ensure_dirs()?;
        logging::init(LogTarget::File(&paths.log_file), verbose)?;
    } else {
        logging::init(LogTarget::Stderr, verbose)?;
    }

    let config = Config::load_from_path(&paths.config_file).context("loading configuration")?;
    config.general.color.apply();

    let output = match command {
        Commands::Tui(args) => open_timer(args, &config)?,
        Commands::Run(args) => commands::run(args, &config, format)?,
        Commands::Config(args) => commands::config(args.command, &config, &paths, format)?,
        Commands::Completions { shell } => commands::generate_completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn open_timer(args: TimerArgs, config: &Config) -> Result<String, PomoError> {
    let defaults = config.timer.durations()?;
    let durations = commands::resolve_durations(args, defaults)?;
    let app = App::new(
        Pomodoro::with_durations(durations, defaults),
        Alerts::from_config(&config.alert),
    );
    tui::run(app)?;
    Ok(String::new())
}
