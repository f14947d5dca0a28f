//! Console backed by the process's stdin and stdout
//!
//! Stdin is read on a background thread so a Ctrl-C can cut a pending read
//! short. The signal handler and the reader post to the same channel.

use std::io::{self, BufRead, Stdout, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use rps_core::Console;
use tracing::{debug, warn};

enum InputEvent {
    Line(String),
    Eof,
    Interrupt,
}

pub struct StdConsole {
    events: Receiver<InputEvent>,
    stdout: Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        install_interrupt_handler(tx.clone());
        spawn_reader(tx);
        Self {
            events: rx,
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.stdout.write_all(prompt.as_bytes())?;
        self.stdout.flush()?;

        match self.events.recv() {
            Ok(InputEvent::Line(line)) => Ok(Some(line)),
            Ok(InputEvent::Interrupt) => {
                // Finish the prompt line before the closing output
                writeln!(self.stdout)?;
                Err(io::ErrorKind::Interrupted.into())
            }
            Ok(InputEvent::Eof) | Err(_) => Ok(None),
        }
    }

    fn display(&mut self, line: &str) {
        // A closed stdout will surface on the next prompt
        let _ = writeln!(self.stdout, "{}", line);
    }
}

fn install_interrupt_handler(tx: Sender<InputEvent>) {
    let handler = move || {
        debug!("interrupt received");
        let _ = tx.send(InputEvent::Interrupt);
    };
    if let Err(e) = ctrlc::set_handler(handler) {
        warn!(error = %e, "could not install Ctrl-C handler");
    }
}

fn spawn_reader(tx: Sender<InputEvent>) {
    thread::spawn(move || {
        let mut stdin = io::stdin().lock();
        loop {
            let mut line = String::new();
            let event = match stdin.read_line(&mut line) {
                Ok(0) => InputEvent::Eof,
                Ok(_) => InputEvent::Line(line.trim_end_matches(['\r', '\n']).to_string()),
                Err(e) => {
                    warn!(error = %e, "stdin read failed");
                    InputEvent::Eof
                }
            };
            let done = matches!(event, InputEvent::Eof);
            if tx.send(event).is_err() || done {
                break;
            }
        }
    });
}
