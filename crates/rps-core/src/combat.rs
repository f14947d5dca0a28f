//! Combat rules
//!
//! Moves, game modes and the outcome table. [`resolve`] is the only place
//! that decides who wins a round.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::config::GameConfig;
use crate::error::ValidationError;
use crate::rng::GameRng;

/// An attack either side can play
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Move {
    Paper,
    Stone,
    Scissors,
}

impl Move {
    /// All attack moves, in menu order
    pub const ALL: [Move; 3] = [Move::Paper, Move::Stone, Move::Scissors];

    /// The move this one beats
    pub const fn beats(&self) -> Move {
        match self {
            Move::Paper => Move::Stone,
            Move::Stone => Move::Scissors,
            Move::Scissors => Move::Paper,
        }
    }
}

/// Result of a round, from the player's side
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Numeric result code: 1 win, 0 draw, -1 lose
    pub const fn code(&self) -> i8 {
        match self {
            Outcome::Win => 1,
            Outcome::Draw => 0,
            Outcome::Lose => -1,
        }
    }
}

impl TryFrom<i8> for Outcome {
    type Error = ValidationError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Outcome::Win),
            0 => Ok(Outcome::Draw),
            -1 => Ok(Outcome::Lose),
            other => Err(ValidationError::InvalidOutcome(other)),
        }
    }
}

/// Difficulty, fixed for the whole session
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Mode {
    #[default]
    Normal,
    Hard,
}

impl Mode {
    /// Factor applied to enemy lives and point awards
    pub fn multiplier(&self, config: &GameConfig) -> u32 {
        match self {
            Mode::Normal => 1,
            Mode::Hard => config.hard_mode_multiplier,
        }
    }

    /// Scale a base value for this mode
    pub fn scale(&self, base: u32, config: &GameConfig) -> u32 {
        base * self.multiplier(config)
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    /// Only the exact names written to the score file are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Normal" => Ok(Mode::Normal),
            "Hard" => Ok(Mode::Hard),
            other => Err(ValidationError::InvalidMode(other.to_string())),
        }
    }
}

/// Resolve a round. Every pair is listed; there is no fallback arm.
pub const fn resolve(player: Move, enemy: Move) -> Outcome {
    match (player, enemy) {
        (Move::Paper, Move::Paper) => Outcome::Draw,
        (Move::Paper, Move::Stone) => Outcome::Win,
        (Move::Paper, Move::Scissors) => Outcome::Lose,
        (Move::Stone, Move::Paper) => Outcome::Lose,
        (Move::Stone, Move::Stone) => Outcome::Draw,
        (Move::Stone, Move::Scissors) => Outcome::Win,
        (Move::Scissors, Move::Paper) => Outcome::Win,
        (Move::Scissors, Move::Stone) => Outcome::Lose,
        (Move::Scissors, Move::Scissors) => Outcome::Draw,
    }
}

/// Source of enemy moves
pub trait Tactic {
    fn next_move(&mut self) -> Move;
}

impl Tactic for GameRng {
    /// Uniform over the three attacks
    fn next_move(&mut self) -> Move {
        self.choose(&Move::ALL).copied().unwrap_or(Move::Paper)
    }
}
