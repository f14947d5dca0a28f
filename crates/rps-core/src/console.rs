//! Console abstraction
//!
//! The game never touches stdin/stdout directly. The binary provides a
//! terminal implementation; tests drive the game with [`ScriptedConsole`]
//! and [`ScriptedTactic`].

use std::collections::VecDeque;
use std::io;

use crate::combat::{Move, Tactic};
use crate::error::GameError;

/// Line-oriented user interaction
pub trait Console {
    /// Show `prompt` and read one line, without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Show one line of text
    fn display(&mut self, line: &str);

    /// Read a line, treating end of input or an interrupted read as the user
    /// leaving the game
    fn ask(&mut self, prompt: &str) -> Result<String, GameError> {
        match self.read_line(prompt) {
            Ok(Some(line)) => Ok(line),
            Ok(None) => Err(GameError::UserQuit),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Err(GameError::UserQuit),
            Err(e) => Err(e.into()),
        }
    }
}

/// Console fed from a fixed list of input lines
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
    interrupt_at_end: bool,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
            interrupt_at_end: false,
        }
    }

    /// Once the input runs out, fail reads as interrupted (Ctrl-C) instead
    /// of reporting end of input
    pub fn interrupted(mut self) -> Self {
        self.interrupt_at_end = true;
        self
    }

    /// Lines shown with [`Console::display`]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Prompts shown with [`Console::read_line`]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Input lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// Number of displayed lines equal to `line`
    pub fn count(&self, line: &str) -> usize {
        self.output.iter().filter(|l| l.as_str() == line).count()
    }

    /// Whether any displayed line contains `needle`
    pub fn shows(&self, needle: &str) -> bool {
        self.output.iter().any(|l| l.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        match self.input.pop_front() {
            None if self.interrupt_at_end => Err(io::ErrorKind::Interrupted.into()),
            line => Ok(line),
        }
    }

    fn display(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}

/// Enemy that plays a fixed sequence of moves, cycling when it runs out.
/// An empty script always plays Paper.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTactic {
    moves: Vec<Move>,
    played: usize,
}

impl ScriptedTactic {
    pub fn new(moves: impl Into<Vec<Move>>) -> Self {
        Self {
            moves: moves.into(),
            played: 0,
        }
    }

    /// Moves handed out so far
    pub fn played(&self) -> usize {
        self.played
    }
}

impl Tactic for ScriptedTactic {
    fn next_move(&mut self) -> Move {
        let next = if self.moves.is_empty() {
            Move::Paper
        } else {
            self.moves[self.played % self.moves.len()]
        };
        self.played += 1;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_replays_input() {
        let mut console = ScriptedConsole::new(["a", "b"]);
        assert_eq!(console.read_line("> ").unwrap(), Some("a".to_string()));
        assert_eq!(console.ask("> ").unwrap(), "b");
        assert_eq!(console.read_line("> ").unwrap(), None);
        assert_eq!(console.prompts().len(), 3);
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn test_ask_at_end_of_input_quits() {
        let mut console = ScriptedConsole::default();
        assert!(matches!(console.ask("> "), Err(GameError::UserQuit)));
    }

    #[test]
    fn test_interrupted_read_quits() {
        let mut console = ScriptedConsole::new(["a"]).interrupted();
        assert_eq!(console.ask("> ").unwrap(), "a");
        assert_eq!(
            console.read_line("> ").unwrap_err().kind(),
            io::ErrorKind::Interrupted
        );
        assert!(matches!(console.ask("> "), Err(GameError::UserQuit)));
    }

    #[test]
    fn test_other_read_errors_propagate() {
        struct Broken;
        impl Console for Broken {
            fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
                Err(io::ErrorKind::BrokenPipe.into())
            }
            fn display(&mut self, _line: &str) {}
        }
        assert!(matches!(Broken.ask("> "), Err(GameError::Io(_))));
    }

    #[test]
    fn test_scripted_console_records_output() {
        let mut console = ScriptedConsole::default();
        console.display("hello");
        console.display("hello world");
        assert_eq!(console.count("hello"), 1);
        assert!(console.shows("world"));
        assert!(!console.shows("bye"));
    }

    #[test]
    fn test_scripted_tactic_cycles() {
        let mut tactic = ScriptedTactic::new([Move::Stone, Move::Paper]);
        assert_eq!(tactic.next_move(), Move::Stone);
        assert_eq!(tactic.next_move(), Move::Paper);
        assert_eq!(tactic.next_move(), Move::Stone);
        assert_eq!(tactic.played(), 3);

        let mut empty = ScriptedTactic::default();
        assert_eq!(empty.next_move(), Move::Paper);
    }
}
