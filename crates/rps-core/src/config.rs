//! Game tuning constants
//!
//! Every number the rules depend on lives in [`GameConfig`], which is built
//! once at startup and passed by reference to the session and score code.

use std::path::PathBuf;

/// Lives a new player starts with
pub const PLAYER_LIVES: u32 = 2;

/// Points for each won round
pub const POINTS_FOR_FIGHT: u32 = 1;

/// Bonus points for defeating an enemy
pub const POINTS_FOR_KILLING: u32 = 5;

/// Factor applied to enemy lives and all awards in hard mode
pub const HARD_MODE_MULTIPLIER: u32 = 2;

/// Leaderboard capacity
pub const MAX_RECORDS: usize = 5;

/// Default score file, relative to the working directory
pub const SCORES_FILENAME: &str = "scores.txt";

/// Immutable game settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub player_lives: u32,
    pub points_for_fight: u32,
    pub points_for_killing: u32,
    pub hard_mode_multiplier: u32,
    pub max_records: usize,
    pub scores_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_lives: PLAYER_LIVES,
            points_for_fight: POINTS_FOR_FIGHT,
            points_for_killing: POINTS_FOR_KILLING,
            hard_mode_multiplier: HARD_MODE_MULTIPLIER,
            max_records: MAX_RECORDS,
            scores_path: PathBuf::from(SCORES_FILENAME),
        }
    }
}

impl GameConfig {
    /// Default settings with a different score file
    pub fn with_scores_path(path: impl Into<PathBuf>) -> Self {
        Self {
            scores_path: path.into(),
            ..Self::default()
        }
    }
}
