//! Menu tables and prompt text
//!
//! Each menu is a table of (key, choice) pairs. The same table renders the
//! prompt and parses the answer, so the two can never disagree.

use std::fmt;

use strum::{Display, EnumIter};

use crate::combat::{Mode, Move};
use crate::error::InputError;

/// Line shown under every menu title
pub const INPUT_BASIC_TEXT: &str = "Please select an option from the list:";

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum MainMenuChoice {
    Play,
    Score,
    Exit,
}

/// Entries of the attack menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackChoice {
    Attack(Move),
    Quit,
}

impl fmt::Display for AttackChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackChoice::Attack(m) => write!(f, "{}", m),
            AttackChoice::Quit => f.write_str("Exit Game"),
        }
    }
}

pub const MAIN_MENU_OPTIONS: [(&str, MainMenuChoice); 3] = [
    ("1", MainMenuChoice::Play),
    ("2", MainMenuChoice::Score),
    ("3", MainMenuChoice::Exit),
];

pub const MODE_OPTIONS: [(&str, Mode); 2] = [("1", Mode::Normal), ("2", Mode::Hard)];

pub const ATTACK_OPTIONS: [(&str, AttackChoice); 4] = [
    ("1", AttackChoice::Attack(Move::Paper)),
    ("2", AttackChoice::Attack(Move::Stone)),
    ("3", AttackChoice::Attack(Move::Scissors)),
    ("0", AttackChoice::Quit),
];

/// Build the prompt for a menu table
pub fn render<T: fmt::Display>(title: &str, options: &[(&str, T)]) -> String {
    let mut text = format!("----{}----\n{}\n\n", title, INPUT_BASIC_TEXT);
    for (key, choice) in options {
        text.push_str(&format!("{}: {}\n", key, choice));
    }
    text
}

pub fn main_menu_prompt() -> String {
    render("Main Menu", &MAIN_MENU_OPTIONS)
}

pub fn mode_prompt() -> String {
    render("Mode", &MODE_OPTIONS)
}

pub fn attack_prompt() -> String {
    render("Attack", &ATTACK_OPTIONS)
}

fn lookup<T: Copy>(options: &[(&str, T)], token: &str) -> Option<T> {
    options
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, choice)| *choice)
}

pub fn parse_main_menu(token: &str) -> Result<MainMenuChoice, InputError> {
    lookup(&MAIN_MENU_OPTIONS, token).ok_or_else(|| InputError::InvalidMenuOption(token.into()))
}

pub fn parse_mode(token: &str) -> Result<Mode, InputError> {
    lookup(&MODE_OPTIONS, token).ok_or_else(|| InputError::InvalidModeOption(token.into()))
}

pub fn parse_attack(token: &str) -> Result<AttackChoice, InputError> {
    lookup(&ATTACK_OPTIONS, token).ok_or_else(|| InputError::InvalidAttackOption(token.into()))
}
