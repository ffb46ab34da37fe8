//! Command-line grammar for the interactive loop.
//!
//! Each input line is split on whitespace and parsed with clap, so malformed
//! input yields a diagnostic instead of a state change.

use clap::{Parser, Subcommand};
use staff_attributes::{Department, Rating};

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  search <text...>          set the search text (no text clears it)
  dept <name>               toggle a department filter
  rating <1-5>              toggle a rating filter
  clear                     clear search and all filters
  reload                    load the users again
  view|bookmark|promote <id> run a card action
  help                      show this help
  quit | exit               leave the dashboard";

/// One parsed command.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Replace the search text with the given words.
    Search {
        /// Words joined by single spaces.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        words: Vec<String>,
    },
    /// Toggle a department filter.
    #[command(alias = "department")]
    Dept {
        /// Department label, case-insensitive.
        department: Department,
    },
    /// Toggle a rating filter.
    Rating {
        /// Rating between 1 and 5.
        rating: Rating,
    },
    /// Reset every filter.
    Clear,
    /// Start a new load.
    Reload,
    /// Open a record.
    View {
        /// Record identifier.
        id: u64,
    },
    /// Bookmark a record.
    Bookmark {
        /// Record identifier.
        id: u64,
    },
    /// Promote a record.
    Promote {
        /// Record identifier.
        id: u64,
    },
    /// Print command help.
    Help,
    /// End the session.
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Parser)]
#[command(
    name = "dashboard",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

/// Raised when an input line is not a valid command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CommandError {
    message: String,
}

impl CommandError {
    /// Diagnostic shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<clap::Error> for CommandError {
    fn from(error: clap::Error) -> Self {
        let rendered = error.render().to_string();
        let first_line = rendered
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("invalid command");
        Self {
            message: first_line
                .strip_prefix("error: ")
                .unwrap_or(first_line)
                .to_owned(),
        }
    }
}

/// Parse one input line.
///
/// Blank lines yield `Ok(None)`.
///
/// ```
/// use dashboard::inbound::cli::{Command, parse_command};
///
/// let command = parse_command("search ann smith").expect("valid command");
/// assert_eq!(
///     command,
///     Some(Command::Search {
///         words: vec!["ann".to_owned(), "smith".to_owned()],
///     })
/// );
/// assert_eq!(parse_command("   ").expect("blank line"), None);
/// ```
///
/// # Errors
///
/// Returns a [`CommandError`] when the line names no command or its
/// arguments do not parse.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut tokens = line.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let parsed = CommandLine::try_parse_from(tokens)?;
    Ok(Some(parsed.command))
}
