//! Score file reading and writing

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{Leaderboard, MIN_NAME_WIDTH, RecordChange, ScoreRecord, title_row};
use crate::config::GameConfig;
use crate::error::ScoreError;

/// A leaderboard bound to the file it was read from
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
    board: Leaderboard,
}

impl ScoreStore {
    /// Open the score file named in `config`
    pub fn open(config: &GameConfig) -> Result<Self, ScoreError> {
        Self::load(&config.scores_path, config.max_records)
    }

    /// Read the score file, or create it with just a header if missing
    pub fn load(path: impl AsRef<Path>, capacity: usize) -> Result<Self, ScoreError> {
        let path = path.as_ref().to_path_buf();
        let mut board = Leaderboard::new(capacity);

        match File::open(&path) {
            Ok(file) => {
                let lines = BufReader::new(file)
                    .lines()
                    .collect::<Result<Vec<_>, _>>()?;
                board.load_from_lines(lines.iter().skip(1))?;
                debug!(path = %path.display(), records = board.len(), "loaded scores");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                ensure_parent(&path)?;
                fs::write(&path, title_row(MIN_NAME_WIDTH))?;
                info!(path = %path.display(), "created empty score file");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Self { path, board })
    }

    /// Rewrite the whole file from the in-memory leaderboard
    pub fn save(&self) -> Result<(), ScoreError> {
        ensure_parent(&self.path)?;
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.board.render_table().as_bytes())?;
        writer.flush()?;
        debug!(path = %self.path.display(), records = self.board.len(), "saved scores");
        Ok(())
    }

    pub fn add_record(&mut self, record: ScoreRecord) -> RecordChange {
        let change = self.board.add_record(record);
        info!(?change, "leaderboard merged a record");
        change
    }

    pub fn board(&self) -> &Leaderboard {
        &self.board
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
