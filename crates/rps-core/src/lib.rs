//! rps-core: Core game logic for the rock-paper-scissors duel
//!
//! This crate contains the session state machine, the combat rules and the
//! leaderboard. All user interaction goes through the [`Console`] trait so
//! the whole game can be driven from scripted input in tests.

pub mod app;
pub mod combat;
pub mod combatant;
pub mod console;
pub mod error;
pub mod menu;
pub mod scores;
pub mod session;

mod config;
mod rng;

pub use combat::{Mode, Move, Outcome, Tactic, resolve};
pub use combatant::{Enemy, Player, Vitality};
pub use config::*;
pub use console::{Console, ScriptedConsole, ScriptedTactic};
pub use error::{GameError, InputError, ScoreError, ValidationError};
pub use rng::GameRng;
pub use scores::{Leaderboard, RecordChange, ScoreRecord, ScoreStore};
pub use session::{Round, Session, SessionEnd};
