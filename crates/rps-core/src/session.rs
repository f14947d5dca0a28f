//! One game, from the first enemy to the player's defeat
//!
//! A session owns the player, the mode and the current enemy. Rounds are
//! played until the player runs out of lives; the final score is then merged
//! into the leaderboard and written to disk.

use tracing::{debug, info};

use crate::combat::{Mode, Outcome, Tactic, resolve};
use crate::combatant::{Enemy, Player, Vitality};
use crate::config::GameConfig;
use crate::console::Console;
use crate::error::{GameError, ValidationError};
use crate::menu;
use crate::scores::{RecordChange, ScoreRecord, ScoreStore};

/// How a single round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    /// Keep fighting the same enemy
    Continue,
    /// The enemy fell and a stronger one took its place
    EnemyDefeated,
    /// The player has no lives left
    PlayerDefeated,
}

/// Summary of a session that ended in defeat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEnd {
    pub record: ScoreRecord,
    pub change: RecordChange,
}

/// Game state for one session
#[derive(Debug, Clone)]
pub struct Session<'a> {
    config: &'a GameConfig,
    mode: Mode,
    player: Player,
    enemy: Option<Enemy>,
}

impl<'a> Session<'a> {
    pub fn new(player: Player, mode: Mode, config: &'a GameConfig) -> Self {
        Self {
            config,
            mode,
            player,
            enemy: None,
        }
    }

    /// Ask for the player's name, then the mode
    pub fn prompt(console: &mut dyn Console, config: &'a GameConfig) -> Result<Self, GameError> {
        let player = Player::prompt(console, config)?;
        let mode = prompt_mode(console)?;
        info!(player = %player.name, %mode, "session created");
        Ok(Self::new(player, mode, config))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref()
    }

    /// Replace the current enemy with one a level higher, or level 1 if
    /// there is none yet
    pub fn new_enemy(&mut self) -> Result<&Enemy, ValidationError> {
        let level = self.enemy.as_ref().map_or(1, |e| e.level + 1);
        let enemy = Enemy::new(self.mode, level, self.config)?;
        debug!(level, lives = enemy.lives, "enemy spawned");
        Ok(self.enemy.insert(enemy))
    }

    /// The enemy being fought, spawning the first one if needed
    fn current_enemy(&mut self) -> Result<&mut Enemy, ValidationError> {
        let enemy = match self.enemy.take() {
            Some(enemy) => enemy,
            None => Enemy::new(self.mode, 1, self.config)?,
        };
        Ok(self.enemy.insert(enemy))
    }

    pub fn status_line(&self) -> String {
        let (level, lives) = self
            .enemy
            .as_ref()
            .map_or((0, 0), |e| (e.level, e.lives));
        format!(
            "Player: {}.\tMode: {}.\tPlayer Lives: {}.\tScore: {}.\tLevel: {}\tEnemy's lives: {}",
            self.player.name, self.mode, self.player.lives, self.player.score, level, lives
        )
    }

    /// Play rounds until the player is defeated, then record the score.
    ///
    /// The status line is shown once more on every exit path, including
    /// [`GameError::UserQuit`].
    pub fn run(
        &mut self,
        console: &mut dyn Console,
        tactic: &mut dyn Tactic,
        store: &mut ScoreStore,
    ) -> Result<SessionEnd, GameError> {
        let result = self.play(console, tactic, store);
        console.display(&self.status_line());
        result
    }

    fn play(
        &mut self,
        console: &mut dyn Console,
        tactic: &mut dyn Tactic,
        store: &mut ScoreStore,
    ) -> Result<SessionEnd, GameError> {
        self.enemy = None;
        self.new_enemy()?;

        loop {
            console.display(&self.status_line());
            if self.fight(console, tactic)? == Round::PlayerDefeated {
                break;
            }
        }

        console.display("You lose!");
        let record = ScoreRecord::new(self.player.name.clone(), self.mode, self.player.score);
        let change = store.add_record(record.clone());
        if let Some(notice) = change.notice() {
            console.display(notice);
        }
        store.save()?;
        info!(player = %record.name, mode = %record.mode, score = record.score, "session over");

        Ok(SessionEnd { record, change })
    }

    /// One exchange of attacks. The enemy commits to its move first.
    pub fn fight(
        &mut self,
        console: &mut dyn Console,
        tactic: &mut dyn Tactic,
    ) -> Result<Round, GameError> {
        let enemy_move = self.current_enemy()?.choose_move(tactic);
        let player_move = self.player.choose_move(console)?;
        console.display(&format!(
            "Your attack: {}.  Enemy's attack: {}",
            player_move, enemy_move
        ));

        let outcome = resolve(player_move, enemy_move);
        debug!(%player_move, %enemy_move, %outcome, "round resolved");
        self.handle_outcome(outcome, console)
    }

    /// Apply a result code supplied from outside the resolver
    pub fn handle_result_code(
        &mut self,
        code: i8,
        console: &mut dyn Console,
    ) -> Result<Round, GameError> {
        let outcome = Outcome::try_from(code)?;
        self.handle_outcome(outcome, console)
    }

    pub fn handle_outcome(
        &mut self,
        outcome: Outcome,
        console: &mut dyn Console,
    ) -> Result<Round, GameError> {
        match outcome {
            Outcome::Win => {
                console.display("You attacked successfully!");
                self.player.award_fight_points(self.mode, self.config);
                if self.current_enemy()?.apply_loss() == Vitality::Defeated {
                    self.player.award_kill_bonus(self.mode, self.config, console);
                    self.new_enemy()?;
                    console.display("New enemy comes.");
                    return Ok(Round::EnemyDefeated);
                }
                Ok(Round::Continue)
            }
            Outcome::Lose => {
                console.display("You missed!");
                match self.player.apply_loss() {
                    Vitality::Defeated => Ok(Round::PlayerDefeated),
                    Vitality::Alive => Ok(Round::Continue),
                }
            }
            Outcome::Draw => {
                console.display("It's a draw!");
                Ok(Round::Continue)
            }
        }
    }
}

/// Ask for the mode until a listed key is entered
pub fn prompt_mode(console: &mut dyn Console) -> Result<Mode, GameError> {
    let prompt = menu::mode_prompt();
    loop {
        let token = console.ask(&prompt)?;
        match menu::parse_mode(&token) {
            Ok(mode) => return Ok(mode),
            Err(_) => console.display("Incorrect input."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Move;
    use crate::console::{ScriptedConsole, ScriptedTactic};

    fn session(mode: Mode, config: &GameConfig) -> Session<'_> {
        let player = Player::new("Vlad", config).unwrap();
        let mut session = Session::new(player, mode, config);
        session.new_enemy().unwrap();
        session
    }

    #[test]
    fn test_prompt_name_then_mode() {
        let config = GameConfig::default();
        let mut console = ScriptedConsole::new(["Vlad", "2"]);
        let session = Session::prompt(&mut console, &config).unwrap();
        assert_eq!(session.mode(), Mode::Hard);
        assert_eq!(session.player().name, "Vlad");
        assert!(session.enemy().is_none());
    }

    #[test]
    fn test_prompt_mode_reprompts() {
        let mut console = ScriptedConsole::new(["3", "blabla", "1"]);
        assert_eq!(prompt_mode(&mut console).unwrap(), Mode::Normal);
        assert_eq!(console.count("Incorrect input."), 2);
    }

    #[test]
    fn test_new_enemy_levels_up() {
        let config = GameConfig::default();
        let mut session = session(Mode::Normal, &config);
        assert_eq!(session.enemy().unwrap().level, 1);
        assert_eq!(session.new_enemy().unwrap().level, 2);
        assert_eq!(session.enemy().unwrap().lives, 2);
    }

    #[test]
    fn test_invalid_result_code() {
        let config = GameConfig::default();
        let mut session = session(Mode::Normal, &config);
        let mut console = ScriptedConsole::default();
        assert!(matches!(
            session.handle_result_code(5, &mut console),
            Err(GameError::Invariant(ValidationError::InvalidOutcome(5)))
        ));
    }

    #[test]
    fn test_draw_changes_nothing() {
        let config = GameConfig::default();
        let mut session = session(Mode::Normal, &config);
        let mut console = ScriptedConsole::default();
        let round = session.handle_result_code(0, &mut console).unwrap();
        assert_eq!(round, Round::Continue);
        assert_eq!(session.player().lives, 2);
        assert_eq!(session.player().score, 0);
        assert_eq!(console.output(), ["It's a draw!"]);
    }

    #[test]
    fn test_lose_until_defeated() {
        let config = GameConfig::default();
        let mut session = session(Mode::Normal, &config);
        let mut console = ScriptedConsole::default();
        assert_eq!(
            session.handle_outcome(Outcome::Lose, &mut console).unwrap(),
            Round::Continue
        );
        assert_eq!(session.player().lives, 1);
        assert_eq!(
            session.handle_outcome(Outcome::Lose, &mut console).unwrap(),
            Round::PlayerDefeated
        );
        assert_eq!(session.player().lives, 0);
    }

    #[test]
    fn test_win_against_level_two() {
        let config = GameConfig::default();
        let mut session = session(Mode::Normal, &config);
        session.new_enemy().unwrap();
        let mut console = ScriptedConsole::default();
        let round = session.handle_outcome(Outcome::Win, &mut console).unwrap();
        assert_eq!(round, Round::Continue);
        assert_eq!(session.enemy().unwrap().lives, 1);
        assert_eq!(session.player().score, 1);
    }

    #[test]
    fn test_win_defeats_enemy() {
        let config = GameConfig::default();
        let mut session = session(Mode::Normal, &config);
        let mut console = ScriptedConsole::default();
        let round = session.handle_outcome(Outcome::Win, &mut console).unwrap();
        assert_eq!(round, Round::EnemyDefeated);
        assert_eq!(session.player().score, 6);
        assert_eq!(session.enemy().unwrap().level, 2);
        assert_eq!(
            console.output(),
            [
                "You attacked successfully!",
                "Congratulation! Enemy down.",
                "New enemy comes.",
            ]
        );
    }

    #[test]
    fn test_fight_enemy_moves_first() {
        let config = GameConfig::default();
        let mut session = session(Mode::Normal, &config);
        let mut console = ScriptedConsole::new(["1"]);
        let mut tactic = ScriptedTactic::new([Move::Stone]);
        let round = session.fight(&mut console, &mut tactic).unwrap();
        assert_eq!(round, Round::EnemyDefeated);
        assert!(console.shows("Your attack: Paper.  Enemy's attack: Stone"));
    }

    #[test]
    fn test_fight_without_enemy_spawns_level_one() {
        let config = GameConfig::default();
        let player = Player::new("Vlad", &config).unwrap();
        let mut session = Session::new(player, Mode::Hard, &config);
        let mut console = ScriptedConsole::new(["1"]);
        let mut tactic = ScriptedTactic::new([Move::Paper]);
        assert_eq!(session.fight(&mut console, &mut tactic).unwrap(), Round::Continue);
        assert_eq!(session.enemy().unwrap().level, 1);
        assert_eq!(session.enemy().unwrap().lives, 2);
    }

    #[test]
    fn test_status_line() {
        let config = GameConfig::default();
        let session = session(Mode::Hard, &config);
        assert_eq!(
            session.status_line(),
            "Player: Vlad.\tMode: Hard.\tPlayer Lives: 2.\tScore: 0.\tLevel: 1\tEnemy's lives: 2"
        );
    }
}
