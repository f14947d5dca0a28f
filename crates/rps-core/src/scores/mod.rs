//! High score system
//!
//! [`Leaderboard`] ranks finished sessions; [`ScoreStore`] keeps it in a
//! fixed-width text file between runs.

mod store;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::combat::Mode;
use crate::error::ScoreError;

pub use store::ScoreStore;

/// Narrowest name column in the score table
pub const MIN_NAME_WIDTH: usize = 5;

/// Width of the mode column
pub const MODE_WIDTH: usize = 10;

/// Width of the score column
pub const SCORE_WIDTH: usize = 5;

/// Result of one finished session.
///
/// Two records are equal when they share name and mode; the score is not
/// part of the identity. Use [`ScoreRecord::rank_cmp`] for ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub mode: Mode,
    pub score: u32,
}

impl PartialEq for ScoreRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.mode == other.mode
    }
}

impl Eq for ScoreRecord {}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, mode: Mode, score: u32) -> Self {
        Self {
            name: name.into(),
            mode,
            score,
        }
    }

    /// Higher scores rank first
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other.score.cmp(&self.score)
    }

    /// Fixed-width table row, newline-terminated
    pub fn as_file_row(&self, name_width: usize) -> String {
        format!(
            "{:<nw$}{:<mw$}{:<sw$}\n",
            self.name,
            self.mode.to_string(),
            self.score.to_string(),
            nw = name_width,
            mw = MODE_WIDTH,
            sw = SCORE_WIDTH,
        )
    }
}

/// Header row of the score table
pub fn title_row(name_width: usize) -> String {
    format!(
        "{:<nw$}{:<mw$}SCORE\n",
        "NAME",
        "MODE",
        nw = name_width,
        mw = MODE_WIDTH
    )
}

/// What [`Leaderboard::add_record`] did with a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordChange {
    /// New identity, now at this 1-indexed rank
    Inserted { rank: usize },
    /// Replaced a lower score of the same identity
    Improved { rank: usize },
    /// An equal or better score was already stored
    Kept,
    /// New identity, but below the cutoff
    Unranked,
}

impl RecordChange {
    /// Line to show the player, if any
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            RecordChange::Improved { .. } => Some("Your record updated!"),
            RecordChange::Kept => Some("You had a better result previously!"),
            RecordChange::Inserted { .. } | RecordChange::Unranked => None,
        }
    }
}

/// Bounded high score table, best first, one entry per (name, mode)
#[derive(Debug, Clone)]
pub struct Leaderboard {
    capacity: usize,
    records: Vec<ScoreRecord>,
}

impl Leaderboard {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stored record with the same name and mode
    pub fn find(&self, record: &ScoreRecord) -> Option<&ScoreRecord> {
        self.records.iter().find(|r| *r == record)
    }

    /// Merge a record, keeping the better score for its identity
    pub fn add_record(&mut self, record: ScoreRecord) -> RecordChange {
        match self.records.iter().position(|r| *r == record) {
            None => {
                self.records.push(record.clone());
                self.normalize();
                match self.rank_of(&record) {
                    Some(rank) => RecordChange::Inserted { rank },
                    None => RecordChange::Unranked,
                }
            }
            Some(idx) if self.records[idx].score < record.score => {
                self.records[idx] = record.clone();
                self.normalize();
                match self.rank_of(&record) {
                    Some(rank) => RecordChange::Improved { rank },
                    None => RecordChange::Unranked,
                }
            }
            Some(_) => RecordChange::Kept,
        }
    }

    /// Parse `name mode score` lines, header already removed.
    ///
    /// Nothing is added unless every line parses. Blank lines are skipped;
    /// line numbers in errors count from 1 within `lines`.
    pub fn load_from_lines<I, S>(&mut self, lines: I) -> Result<(), ScoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            let malformed = || ScoreError::MalformedLine {
                line: idx + 1,
                content: line.to_string(),
            };
            let [name, mode, score] = fields[..] else {
                return Err(malformed());
            };
            let mode: Mode = mode.parse()?;
            let score: u32 = score.parse().map_err(|_| malformed())?;
            parsed.push(ScoreRecord::new(name, mode, score));
        }

        self.records.extend(parsed);
        self.normalize();
        Ok(())
    }

    /// Longest name plus one, or 0 when empty
    pub fn biggest_name_length(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.name.chars().count() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Width of the name column for the current records
    pub fn name_width(&self) -> usize {
        self.biggest_name_length().max(MIN_NAME_WIDTH)
    }

    /// Full score table: header then one row per record
    pub fn render_table(&self) -> String {
        let width = self.name_width();
        let mut table = title_row(width);
        for record in &self.records {
            table.push_str(&record.as_file_row(width));
        }
        table
    }

    fn rank_of(&self, record: &ScoreRecord) -> Option<usize> {
        self.records.iter().position(|r| r == record).map(|p| p + 1)
    }

    /// Sort best first, keep the best entry per identity, trim to capacity
    fn normalize(&mut self) {
        self.records.sort_by(ScoreRecord::rank_cmp);
        let mut kept: Vec<ScoreRecord> = Vec::with_capacity(self.records.len());
        for record in self.records.drain(..) {
            if !kept.contains(&record) {
                kept.push(record);
            }
        }
        kept.truncate(self.capacity);
        self.records = kept;
    }
}
