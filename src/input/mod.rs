//! Keyboard input: key → [`Command`] → [`App`] call.
//!
//! Opening a URL is a side effect the caller performs, so
//! [`apply_command`] hands it back instead of doing it here.

mod command;
mod keybindings;

pub use command::Command;
pub use keybindings::{resolve, KeyCombo};

use crate::app::App;

/// Something the event loop has to do outside of `App`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEffect {
    None,
    OpenUrl(String),
    Quit,
}

/// Apply `command` to the app.
pub fn apply_command(app: &mut App, command: Command) -> InputEffect {
    match command {
        Command::InsertChar(c) => app.type_char(c),
        Command::Backspace => app.backspace(),
        Command::ClearInput => app.clear_input(),
        Command::SubmitQuery => {
            app.submit_query();
        }
        Command::NextRegion => {
            app.cycle_region();
        }
        Command::PreviousRegion => {
            app.cycle_region_back();
        }
        Command::PreviousPage => {
            app.previous_page();
        }
        Command::NextPage => {
            app.next_page();
        }
        Command::MoveUp => app.move_up(),
        Command::MoveDown => app.move_down(),
        Command::OpenSelected => {
            if let Some(article) = app.selected_article() {
                return InputEffect::OpenUrl(article.url.clone());
            }
        }
        Command::Quit => {
            app.quit();
            return InputEffect::Quit;
        }
    }
    InputEffect::None
}
