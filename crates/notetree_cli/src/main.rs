//! `note` command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, resolve configuration and dispatch one subcommand.
//! - Map failures to a one-line message and exit status 1.

mod cli;
mod commands;
mod console;
mod error;

use clap::{CommandFactory, Parser};
use cli::{Cli, NoteCommand};
use commands::{run_command, CommandContext};
use console::Console;
use error::CliError;
use log::{error, info, warn};
use notetree_core::logging::{LOG_DIR_ENV, LOG_LEVEL_ENV};
use notetree_core::{
    default_log_dir, default_log_level, init_logging, EditorCommand, FsNotesRepository,
    NoteService, NotesConfig,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            error!("event=command_run module=cli status=error error={err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    start_logging();

    let config = NotesConfig::from_env()?;
    let Some(command) = startup(cli, &config, &mut io::stdout(), &mut io::stderr())? else {
        return Ok(ExitCode::FAILURE);
    };

    let service = NoteService::new(FsNotesRepository::new(&config), config.display_limit);
    let editor = EditorCommand::from_env();
    let ctx = CommandContext {
        service: &service,
        editor: &editor,
        today: chrono::Local::now().date_naive(),
    };
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    run_command(&command, &ctx, &mut console)?;

    info!("event=command_run module=cli status=ok");
    Ok(ExitCode::SUCCESS)
}

/// Warns about a missing notes root and extracts the subcommand.
///
/// Returns `None` after printing usage when no subcommand was given; the
/// caller exits with status 1.
fn startup<O: Write, E: Write>(
    cli: Cli,
    config: &NotesConfig,
    out: &mut O,
    err: &mut E,
) -> Result<Option<NoteCommand>, CliError> {
    if !config.root_exists() {
        warn!(
            "event=startup module=cli status=root_missing root={}",
            config.root.display()
        );
        writeln!(
            err,
            "Warning: expected notes path {} does not exist",
            config.root.display()
        )?;
    }

    let Some(command) = cli.command else {
        writeln!(out, "positional argument is required")?;
        Cli::command().write_help(out)?;
        return Ok(None);
    };
    Ok(Some(command))
}

fn start_logging() {
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    let Some(log_dir) = std::env::var_os(LOG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(default_log_dir)
    else {
        return;
    };

    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("Warning: logging disabled: {err}");
    }
}
