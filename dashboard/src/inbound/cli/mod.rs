//! Terminal front end.
//!
//! [`DashboardApp`] owns the session for one run and maps typed commands
//! onto session operations, re-rendering after every state change. Frames
//! and command feedback go to the injected writer; logs stay on stderr.

mod command;
mod render;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::CardActions;
use crate::domain::{CardAction, DashboardSession, UserLoader};

pub use command::{Command, CommandError, HELP, parse_command};
pub use render::{LOADING, SEARCH_PLACEHOLDER, TITLE, render_frame, stars, write_frame};

/// Whether the command loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// End the session.
    Quit,
}

/// Interactive dashboard bound to one output stream.
pub struct DashboardApp<W> {
    session: DashboardSession,
    loader: UserLoader,
    actions: Arc<dyn CardActions>,
    out: W,
}

impl<W: Write> DashboardApp<W> {
    /// Assemble an app around an existing session.
    pub fn new(
        session: DashboardSession,
        loader: UserLoader,
        actions: Arc<dyn CardActions>,
        out: W,
    ) -> Self {
        Self {
            session,
            loader,
            actions,
            out,
        }
    }

    /// Current session state.
    pub fn session(&self) -> &DashboardSession {
        &self.session
    }

    /// Consume the app and return its writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run one load without rendering.
    pub async fn load(&mut self) {
        let ticket = self.session.begin_load();
        let result = self.loader.load().await;
        self.session.finish_load(ticket, result);
    }

    /// Show the loading frame, load, then show the result.
    ///
    /// # Errors
    ///
    /// Returns an error when the output cannot be written.
    pub async fn activate(&mut self) -> io::Result<()> {
        let ticket = self.session.begin_load();
        self.render()?;
        let result = self.loader.load().await;
        self.session.finish_load(ticket, result);
        self.render()
    }

    /// Write the current frame.
    ///
    /// # Errors
    ///
    /// Returns an error when the output cannot be written.
    pub fn render(&mut self) -> io::Result<()> {
        self.out.write_all(render_frame(&self.session).as_bytes())?;
        self.out.flush()
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error when input cannot be read or output cannot be
    /// written. Malformed commands, including lines that are not valid
    /// UTF-8, are reported on the output instead.
    pub async fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }
            let flow = match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_line(line.trim_end_matches(['\r', '\n'])).await?,
                Err(error) => {
                    debug!(error = %error, "rejected undecodable input line");
                    writeln!(self.out, "error: input line is not valid UTF-8")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Apply one input line.
    ///
    /// # Errors
    ///
    /// Returns an error when the output cannot be written.
    pub async fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(error) => {
                debug!(error = %error, "rejected command");
                writeln!(self.out, "error: {error}")?;
                return Ok(Flow::Continue);
            }
        };
        self.apply(command).await
    }

    async fn apply(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Search { words } => self.session.set_search(words.join(" ")),
            Command::Dept { department } => {
                self.session.toggle_department(department);
            }
            Command::Rating { rating } => {
                self.session.toggle_rating(rating);
            }
            Command::Clear => self.session.clear_filters(),
            Command::Reload => {
                self.activate().await?;
                return Ok(Flow::Continue);
            }
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::View { id } => return self.invoke(CardAction::View, id),
            Command::Bookmark { id } => return self.invoke(CardAction::Bookmark, id),
            Command::Promote { id } => return self.invoke(CardAction::Promote, id),
        }
        self.render()?;
        Ok(Flow::Continue)
    }

    fn invoke(&mut self, action: CardAction, id: u64) -> io::Result<Flow> {
        match self.session.find(id) {
            Some(user) => {
                action.invoke(self.actions.as_ref(), user);
                writeln!(self.out, "{action} requested for {}", user.full_name())?;
            }
            None => writeln!(self.out, "error: no user with id {id}")?,
        }
        Ok(Flow::Continue)
    }
}
