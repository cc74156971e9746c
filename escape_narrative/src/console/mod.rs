//! Console - the interactive menu loop.
//!
//! Each turn the console:
//! 1. **Renders** the status block and the numbered action menu
//! 2. **Reads** one line of input and validates it as a menu choice
//! 3. **Applies** the chosen action to the session
//! 4. **Narrates** the result, and the ending once the session is over
//!
//! Invalid input and rejected actions are reported and the loop continues
//! without touching session state. End of input counts as exiting.

mod render;
mod selection;

pub use render::*;
pub use selection::*;

use std::io::{self, BufRead, Write};
use thiserror::Error;

use escape_rules::{ActionKind, Session, SessionEnd, WorldError, WorldGraph};

use crate::lore::Lore;

/// Errors that stop the console loop.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    World(#[from] WorldError),
}

/// Console front end over any line-based input and text output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play one session to the end.
    pub fn play(&mut self, world: &WorldGraph, lore: &Lore) -> Result<SessionEnd, ConsoleError> {
        let mut session = Session::new(world)?;
        let span = tracing::info_span!("session", id = %session.id());
        let _guard = span.enter();

        for line in &lore.intro {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output, "{}", "-".repeat(40))?;

        loop {
            writeln!(self.output)?;
            self.write_lines(&status_lines(&session, lore))?;

            let actions = session.list_available_actions();
            writeln!(self.output, "\nChoose an option:")?;
            self.write_lines(&menu_lines(&actions))?;

            write!(self.output, "\nEnter your choice number: ")?;
            self.output.flush()?;

            let kind = match self.read_line()? {
                Some(raw) => match parse_selection(&raw, actions.len()) {
                    Ok(index) => actions[index].kind.clone(),
                    Err(err) => {
                        tracing::debug!(input = raw.trim(), %err, "Rejected selection");
                        writeln!(self.output, "{}", err)?;
                        continue;
                    }
                },
                None => {
                    tracing::debug!("Input closed, exiting");
                    writeln!(self.output)?;
                    ActionKind::Exit
                }
            };

            match session.apply(&kind) {
                Ok(turn) => {
                    writeln!(self.output, "{}", turn_message(&turn, lore))?;
                    log_snapshot(&session);

                    if let Some(ending) = turn.ending() {
                        self.write_lines(&ending_lines(ending, lore))?;
                        self.output.flush()?;
                        return Ok(ending);
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "Action rejected");
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }
}

fn log_snapshot(session: &Session<'_>) {
    match serde_json::to_string(&session.snapshot()) {
        Ok(snapshot) => tracing::debug!(%snapshot, "Turn applied"),
        Err(err) => tracing::warn!(%err, "Failed to serialize session snapshot"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape_rules::Outcome;
    use std::io::Cursor;

    fn play(script: &str) -> (SessionEnd, String) {
        let world = WorldGraph::standard().unwrap();
        let lore = Lore::standard().unwrap();
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());

        let ending = console.play(&world, &lore).unwrap();
        let transcript = String::from_utf8(console.into_output()).unwrap();
        (ending, transcript)
    }

    #[test]
    fn test_exit_from_menu() {
        // Dorm Room menu: 1. South, 2. East, 3. Exit
        let (ending, transcript) = play("3\n");
        assert_eq!(ending, SessionEnd::Quit);
        assert!(transcript.starts_with("Escape the Rogue AI\n"));
        assert!(transcript.contains("Thanks for playing! Goodbye."));
        assert!(transcript.trim_end().ends_with("Game ended."));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (ending, transcript) = play("");
        assert_eq!(ending, SessionEnd::Quit);
        assert!(transcript.contains("Thanks for playing! Goodbye."));
    }

    #[test]
    fn test_bad_input_is_rejected_without_state_change() {
        let (ending, transcript) = play("abc\n9\n0\n3\n");
        assert_eq!(ending, SessionEnd::Quit);
        assert_eq!(transcript.matches("Please enter a number.").count(), 1);
        assert_eq!(transcript.matches("Please pick a valid option number.").count(), 2);
        assert_eq!(transcript.matches("Location: Dorm Room").count(), 4);
    }

    #[test]
    fn test_rushing_the_core_loses() {
        // South, East, East, East: menus list exits North, South, East, West.
        let (ending, transcript) = play("1\n2\n1\n2\n");
        assert_eq!(ending, SessionEnd::Encounter(Outcome::Lose));
        assert!(transcript.contains("You head east into the Mainframe Core."));
        assert!(transcript.contains("GAME OVER."));
        assert!(!transcript.contains("YOU WIN!"));
    }
}
