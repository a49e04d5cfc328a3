use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taskline::cli::args::{Cli, Commands};
use taskline::cli::commands;
use taskline::config::Config;
use taskline::error::TasklineError;
use taskline::storage::Database;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        let code = e
            .downcast_ref::<TasklineError>()
            .map_or(1, TasklineError::exit_code);
        std::process::exit(code);
    }
}

/// Send logs to stderr. `RUST_LOG` wins over `-v`.
///
/// The TUI owns the terminal, so it only gets a subscriber when the user
/// asked for one through `RUST_LOG`.
fn init_tracing(verbose: u8, is_tui: bool) {
    let from_env = std::env::var("RUST_LOG").is_ok();
    if is_tui && !from_env {
        return;
    }

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = if from_env {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    } else {
        EnvFilter::new(format!("taskline={default_level}"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, matches!(cli.command, Commands::Tui));

    let config = Config::load().context("failed to load configuration")?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);
    let now = Local::now().naive_local();
    let today = now.date();

    // Commands that never touch the database.
    match &cli.command {
        Commands::Parse(args) => {
            let output = commands::parse(config.parser.parser(), args, now, format)?;
            println!("{output}");
            return Ok(());
        },
        Commands::Completions { shell } => {
            print!("{}", commands::completions(*shell));
            return Ok(());
        },
        _ => {},
    }

    let db = match &cli.db {
        Some(path) => Database::open_at(path),
        None => Database::open(),
    }
    .context("failed to open task database")?;

    let output = match cli.command {
        Commands::Add(args) => commands::quick_add(&db, args, &config, now, format)?,
        Commands::List(args) => commands::list(&db, &args, today, format)?,
        Commands::Done { id } => commands::done(&db, id, today, format)?,
        Commands::Reopen { id } => commands::reopen(&db, id, today, format)?,
        Commands::Delete { id } => commands::delete(&db, id, format)?,
        Commands::Project(args) => commands::project(&db, args.command, format)?,
        Commands::Tui => {
            taskline::tui::run(&db, &config)?;
            String::new()
        },
        Commands::Parse(_) | Commands::Completions { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
