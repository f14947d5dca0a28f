//! The two sides of a duel: the human [`Player`] and the scripted [`Enemy`]

use tracing::debug;

use crate::combat::{Mode, Move, Tactic};
use crate::config::GameConfig;
use crate::console::Console;
use crate::error::{GameError, InputError, ValidationError};
use crate::menu::{self, AttackChoice};

/// State of a combatant after taking a loss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vitality {
    Alive,
    Defeated,
}

/// A computer opponent. Defeated enemies are replaced, never revived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub level: u32,
    pub lives: u32,
}

impl Enemy {
    /// Create an enemy for `level`, which starts at 1
    pub fn new(mode: Mode, level: u32, config: &GameConfig) -> Result<Self, ValidationError> {
        if level == 0 {
            return Err(ValidationError::InvalidLevel(level));
        }
        Ok(Self {
            level,
            lives: mode.scale(level, config),
        })
    }

    pub fn choose_move(&self, tactic: &mut dyn Tactic) -> Move {
        tactic.next_move()
    }

    /// Take one life
    pub fn apply_loss(&mut self) -> Vitality {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            debug!(level = self.level, "enemy defeated");
            Vitality::Defeated
        } else {
            Vitality::Alive
        }
    }
}

/// The human side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: u32,
    pub lives: u32,
}

impl Player {
    /// Create a player with a validated name
    pub fn new(name: impl Into<String>, config: &GameConfig) -> Result<Self, InputError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            score: 0,
            lives: config.player_lives,
        })
    }

    /// Ask for a name until a valid one is entered
    pub fn prompt(console: &mut dyn Console, config: &GameConfig) -> Result<Self, GameError> {
        loop {
            let name = console.ask("Enter your name: ")?;
            match Self::new(name, config) {
                Ok(player) => return Ok(player),
                Err(err) => console.display(&err.to_string()),
            }
        }
    }

    /// Ask for an attack until a valid one is entered.
    ///
    /// Picking the quit entry ends the whole game with [`GameError::UserQuit`].
    pub fn choose_move(&self, console: &mut dyn Console) -> Result<Move, GameError> {
        let prompt = menu::attack_prompt();
        loop {
            let token = console.ask(&prompt)?;
            match menu::parse_attack(&token) {
                Ok(AttackChoice::Attack(m)) => return Ok(m),
                Ok(AttackChoice::Quit) => return Err(GameError::UserQuit),
                Err(_) => console.display("Incorrect input."),
            }
        }
    }

    /// Take one life
    pub fn apply_loss(&mut self) -> Vitality {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            Vitality::Defeated
        } else {
            Vitality::Alive
        }
    }

    /// Points for a won round
    pub fn award_fight_points(&mut self, mode: Mode, config: &GameConfig) {
        self.score += mode.scale(config.points_for_fight, config);
    }

    /// Bonus for defeating an enemy
    pub fn award_kill_bonus(&mut self, mode: Mode, config: &GameConfig, console: &mut dyn Console) {
        console.display("Congratulation! Enemy down.");
        self.score += mode.scale(config.points_for_killing, config);
    }
}

/// A name must be non-empty and free of whitespace
pub fn validate_name(name: &str) -> Result<(), InputError> {
    if name.chars().any(char::is_whitespace) {
        Err(InputError::WhitespaceInName)
    } else if name.is_empty() {
        Err(InputError::EmptyName)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{ScriptedConsole, ScriptedTactic};

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_enemy_lives_per_mode() {
        let config = config();
        assert_eq!(Enemy::new(Mode::Normal, 3, &config).unwrap().lives, 3);
        assert_eq!(Enemy::new(Mode::Hard, 3, &config).unwrap().lives, 6);
        assert_eq!(Enemy::new(Mode::Normal, 1, &config).unwrap().level, 1);
    }

    #[test]
    fn test_enemy_rejects_level_zero() {
        assert_eq!(
            Enemy::new(Mode::Normal, 0, &config()),
            Err(ValidationError::InvalidLevel(0))
        );
    }

    #[test]
    fn test_enemy_one_life() {
        let mut enemy = Enemy::new(Mode::Normal, 1, &config()).unwrap();
        assert_eq!(enemy.apply_loss(), Vitality::Defeated);
        assert_eq!(enemy.lives, 0);
    }

    #[test]
    fn test_enemy_three_lives() {
        let mut enemy = Enemy::new(Mode::Normal, 3, &config()).unwrap();
        assert_eq!(enemy.apply_loss(), Vitality::Alive);
        assert_eq!(enemy.apply_loss(), Vitality::Alive);
        assert_eq!(enemy.apply_loss(), Vitality::Defeated);
    }

    #[test]
    fn test_enemy_move_comes_from_tactic() {
        let enemy = Enemy::new(Mode::Normal, 1, &config()).unwrap();
        let mut tactic = ScriptedTactic::new([Move::Scissors]);
        assert_eq!(enemy.choose_move(&mut tactic), Move::Scissors);
    }

    #[test]
    fn test_player_defaults() {
        let player = Player::new("Vlad", &config()).unwrap();
        assert_eq!(player.score, 0);
        assert_eq!(player.lives, 2);
    }

    #[test]
    fn test_player_two_losses() {
        let mut player = Player::new("Vlad", &config()).unwrap();
        assert_eq!(player.apply_loss(), Vitality::Alive);
        assert_eq!(player.apply_loss(), Vitality::Defeated);
        assert_eq!(player.lives, 0);
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("Vlad"), Ok(()));
        assert_eq!(validate_name(""), Err(InputError::EmptyName));
        assert_eq!(validate_name("Vlad Z"), Err(InputError::WhitespaceInName));
        assert_eq!(validate_name("\tVlad"), Err(InputError::WhitespaceInName));
        assert_eq!(validate_name(" "), Err(InputError::WhitespaceInName));
    }

    #[test]
    fn test_prompt_name_reprompts() {
        let mut console = ScriptedConsole::new(["", "Vl ad", "Vlad"]);
        let player = Player::prompt(&mut console, &config()).unwrap();
        assert_eq!(player.name, "Vlad");
        assert_eq!(
            console.output(),
            ["Name cannot be empty.", "Whitespaces are not allowed in the name."]
        );
    }

    #[test]
    fn test_choose_move_reprompts_then_picks() {
        let player = Player::new("Vlad", &config()).unwrap();
        let mut console = ScriptedConsole::new(["9", "x", "3"]);
        assert_eq!(player.choose_move(&mut console).unwrap(), Move::Scissors);
        assert_eq!(console.count("Incorrect input."), 2);
    }

    #[test]
    fn test_choose_move_quit() {
        let player = Player::new("Vlad", &config()).unwrap();
        let mut console = ScriptedConsole::new(["0"]);
        assert!(matches!(
            player.choose_move(&mut console),
            Err(GameError::UserQuit)
        ));
    }

    #[test]
    fn test_awards_normal_and_hard() {
        let config = config();
        let mut console = ScriptedConsole::default();

        let mut player = Player::new("Vlad", &config).unwrap();
        player.award_fight_points(Mode::Normal, &config);
        player.award_kill_bonus(Mode::Normal, &config, &mut console);
        assert_eq!(player.score, 6);

        let mut hard = Player::new("Vlad", &config).unwrap();
        hard.award_fight_points(Mode::Hard, &config);
        hard.award_kill_bonus(Mode::Hard, &config, &mut console);
        assert_eq!(hard.score, 12);

        assert_eq!(console.count("Congratulation! Enemy down."), 2);
    }
}
