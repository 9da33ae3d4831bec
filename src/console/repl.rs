//! Read-eval-print loop
//!
//! Reads one command per line, runs it on the player and prints the rendered
//! result. After a search with matches exactly one more line is read and used
//! as the selection.

use crate::catalog::VideoCatalog;
use crate::console::command::{parse, ConsoleCommand};
use crate::console::render::{help_lines, Renderer};
use crate::player::{Command, CommandOutcome, MediaPlayer};
use crate::utils::error::{Result, VidPlayerError};

use std::io::{BufRead, Write};
use std::sync::Arc;
use log::{debug, warn};

/// Interactive console bound to one player
pub struct Repl<R, W> {
    player: MediaPlayer,
    catalog: Arc<VideoCatalog>,
    input: R,
    output: W,
    prompt: String,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(player: MediaPlayer, input: R, output: W) -> Self {
        let catalog = player.catalog();

        Self {
            player,
            catalog,
            input,
            output,
            prompt: String::new(),
        }
    }

    /// Text printed before each command
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Welcome message
    pub fn banner(&mut self) -> Result<()> {
        writeln!(self.output, "Hello and welcome to vidplayer, what would you like to do?")?;
        writeln!(self.output, "Enter HELP for list of available commands or EXIT to terminate.")?;
        Ok(())
    }

    /// Run until EXIT or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("End of input");
                break;
            };

            match parse(&line) {
                Ok(None) => continue,
                Ok(Some(ConsoleCommand::Exit)) => break,
                Ok(Some(ConsoleCommand::Help)) => self.print(help_lines())?,
                Ok(Some(ConsoleCommand::Player(command))) => self.run_command(&command)?,
                Err(VidPlayerError::InvalidInput(message)) => {
                    warn!("Rejected input '{}': {}", line.trim(), message);
                    writeln!(self.output, "{}", message)?;
                }
                Err(err) => return Err(err),
            }
        }

        writeln!(
            self.output,
            "vidplayer has now terminated its execution. Thank you and goodbye!"
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn run_command(&mut self, command: &Command) -> Result<()> {
        let result = self.player.execute(command);
        let lines = Renderer::new(&self.catalog).render(command, &result);
        self.print(lines)?;

        if let Ok(CommandOutcome::Search(results)) = result {
            if results.is_empty() {
                return Ok(());
            }

            let answer = self.read_line()?.unwrap_or_default();
            match self.player.select(&results, &answer) {
                Ok(Some(events)) => {
                    let lines = Renderer::new(&self.catalog).render_events(&events);
                    self.print(lines)?;
                }
                Ok(None) => {}
                Err(err) => writeln!(self.output, "Cannot play video: {}", err)?,
            }
        }

        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn print(&mut self, lines: Vec<String>) -> Result<()> {
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
