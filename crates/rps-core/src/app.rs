//! Main menu loop
//!
//! After a lost session the player is brought back to the main menu, with
//! the new score already saved. Only "Exit", the in-game quit entry or the
//! end of input leave the application.

use tracing::info;

use crate::combat::Tactic;
use crate::config::GameConfig;
use crate::console::Console;
use crate::error::GameError;
use crate::menu::{self, MainMenuChoice};
use crate::scores::ScoreStore;
use crate::session::Session;

/// Run the game until the user leaves. Quitting is a normal exit.
pub fn run(
    console: &mut dyn Console,
    config: &GameConfig,
    tactic: &mut dyn Tactic,
) -> Result<(), GameError> {
    match main_menu(console, config, tactic) {
        Ok(()) | Err(GameError::UserQuit) => {
            console.display("Good bye!");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn main_menu(
    console: &mut dyn Console,
    config: &GameConfig,
    tactic: &mut dyn Tactic,
) -> Result<(), GameError> {
    loop {
        match prompt_main_menu(console)? {
            MainMenuChoice::Play => {
                let mut session = Session::prompt(console, config)?;
                let mut store = ScoreStore::open(config)?;
                let end = session.run(console, tactic, &mut store)?;
                info!(score = end.record.score, "back to main menu");
            }
            MainMenuChoice::Score => show_scores(console, config)?,
            MainMenuChoice::Exit => return Ok(()),
        }
    }
}

/// Ask for a main menu entry until a listed key is entered
pub fn prompt_main_menu(console: &mut dyn Console) -> Result<MainMenuChoice, GameError> {
    let prompt = menu::main_menu_prompt();
    loop {
        let token = console.ask(&prompt)?;
        match menu::parse_main_menu(&token) {
            Ok(choice) => return Ok(choice),
            Err(_) => console.display("Incorrect input. Please try again."),
        }
    }
}

/// Print the score table
pub fn show_scores(console: &mut dyn Console, config: &GameConfig) -> Result<(), GameError> {
    let store = ScoreStore::open(config)?;
    for line in store.board().render_table().lines() {
        console.display(line);
    }
    Ok(())
}
