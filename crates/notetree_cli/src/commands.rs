//! Subcommand handlers.
//!
//! # Invariants
//! - Every handler computes its selection list once and resolves the user's
//!   choice against that same list.
//! - The editor is the only thing that creates note files.

use crate::cli::NoteCommand;
use crate::console::Console;
use crate::error::CliError;
use chrono::NaiveDate;
use log::info;
use notetree_core::{
    CategoryCreateOutcome, Editor, Note, NoteService, NotesRepository, SelectionList,
};
use std::io::{BufRead, Write};
use std::path::Path;

/// Dependencies shared by every subcommand.
pub struct CommandContext<'a, R: NotesRepository, E: Editor> {
    pub service: &'a NoteService<R>,
    pub editor: &'a E,
    /// Date stamped on new note file names.
    pub today: NaiveDate,
}

pub fn run_command<R, E, I, O>(
    command: &NoteCommand,
    ctx: &CommandContext<'_, R, E>,
    console: &mut Console<I, O>,
) -> Result<(), CliError>
where
    R: NotesRepository,
    E: Editor,
    I: BufRead,
    O: Write,
{
    info!("event=command_run module=cli status=start command={command:?}");
    match command {
        NoteCommand::New => do_new(ctx, console),
        NoteCommand::List { pattern } => {
            list_notes(ctx, console, pattern.as_deref())?;
            Ok(())
        }
        NoteCommand::Edit { pattern } => do_edit(ctx, console, pattern.as_deref()),
        NoteCommand::Lcat => do_list_categories(ctx, console),
        NoteCommand::Ncat => do_new_category(ctx, console),
    }
}

fn do_new<R, E, I, O>(
    ctx: &CommandContext<'_, R, E>,
    console: &mut Console<I, O>,
) -> Result<(), CliError>
where
    R: NotesRepository,
    E: Editor,
    I: BufRead,
    O: Write,
{
    let categories = ctx.service.category_selection()?;
    for line in categories.lines() {
        console.say(line)?;
    }
    let choice = console.ask("Creating new notes file, select category folder\n")?;
    let category = categories.resolve(&choice)?;

    let description = console.ask("Enter note file name or space-separated tags\n")?;
    let note_path = ctx.service.new_note_path(category, &description, ctx.today);
    console.ask(&format!(
        "Creating new note with name {}, <Enter> to continue...",
        note_path.display()
    ))?;
    open_in_editor(ctx.editor, console, &note_path)
}

fn do_edit<R, E, I, O>(
    ctx: &CommandContext<'_, R, E>,
    console: &mut Console<I, O>,
    pattern: Option<&str>,
) -> Result<(), CliError>
where
    R: NotesRepository,
    E: Editor,
    I: BufRead,
    O: Write,
{
    let notes = list_notes(ctx, console, pattern)?;
    let choice = console.ask("Select notes file for editing\n")?;
    let note = notes.resolve(&choice)?;
    open_in_editor(ctx.editor, console, &note.path)
}

fn list_notes<R, E, I, O>(
    ctx: &CommandContext<'_, R, E>,
    console: &mut Console<I, O>,
    pattern: Option<&str>,
) -> Result<SelectionList<Note>, CliError>
where
    R: NotesRepository,
    E: Editor,
    I: BufRead,
    O: Write,
{
    let notes = ctx.service.note_selection(pattern)?;
    console.say(format_args!(
        "Listing {} notes. Recently modified first",
        ctx.service.display_limit()
    ))?;
    for line in notes.lines() {
        console.say(line)?;
    }
    Ok(notes)
}

fn do_list_categories<R, E, I, O>(
    ctx: &CommandContext<'_, R, E>,
    console: &mut Console<I, O>,
) -> Result<(), CliError>
where
    R: NotesRepository,
    E: Editor,
    I: BufRead,
    O: Write,
{
    let categories = ctx.service.category_selection()?;
    console.say(format_args!(
        "Listing {} categories in alphabetical order",
        categories.len()
    ))?;
    for line in categories.lines() {
        console.say(line)?;
    }
    Ok(())
}

fn do_new_category<R, E, I, O>(
    ctx: &CommandContext<'_, R, E>,
    console: &mut Console<I, O>,
) -> Result<(), CliError>
where
    R: NotesRepository,
    E: Editor,
    I: BufRead,
    O: Write,
{
    console.say("Enter path to new category in format: parent/new-category")?;
    let input = console.ask("")?;
    let relative = input.trim();
    match ctx.service.create_category(relative)? {
        CategoryCreateOutcome::Created(_) => {
            console.say(format_args!("Created category: {relative}"))
        }
        CategoryCreateOutcome::AlreadyExists(_) => {
            console.say(format_args!("Category {relative} already exists"))
        }
        CategoryCreateOutcome::ParentMissing(path) => console.say(format_args!(
            "Failed to create {}, make sure parent category exists",
            path.display()
        )),
    }
}

fn open_in_editor<E, I, O>(
    editor: &E,
    console: &mut Console<I, O>,
    path: &Path,
) -> Result<(), CliError>
where
    E: Editor,
    I: BufRead,
    O: Write,
{
    if let Some(warning) = editor.fallback_warning() {
        console.say(warning)?;
    }
    editor.edit(path)?;
    Ok(())
}
