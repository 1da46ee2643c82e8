//! Command-line surface.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "note", version, about = "Organize Markdown notes in category folders")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<NoteCommand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum NoteCommand {
    /// Create a new note
    New,
    /// List existing notes
    List {
        /// Pattern to match against note name or category or categories
        pattern: Option<String>,
    },
    /// Edit an existing note
    Edit {
        /// Pattern to match against note name or category or categories
        pattern: Option<String>,
    },
    /// List existing categories
    Lcat,
    /// Create a category
    Ncat,
}

#[cfg(test)]
mod tests {
    use super::{Cli, NoteCommand};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn pattern_is_optional_positional() {
        let cli = Cli::try_parse_from(["note", "list", "work"]).unwrap();
        assert_eq!(
            cli.command,
            Some(NoteCommand::List {
                pattern: Some("work".to_string())
            })
        );

        let cli = Cli::try_parse_from(["note", "edit"]).unwrap();
        assert_eq!(cli.command, Some(NoteCommand::Edit { pattern: None }));
    }

    #[test]
    fn subcommand_may_be_absent() {
        let cli = Cli::try_parse_from(["note"]).unwrap();
        assert!(cli.command.is_none());
        assert!(Cli::try_parse_from(["note", "lcat", "extra"]).is_err());
    }
}
