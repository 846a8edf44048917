//! Default keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

impl From<KeyEvent> for KeyCombo {
    fn from(key: KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

/// Fixed bindings, checked before falling back to text entry.
const BINDINGS: &[(KeyCombo, Command)] = &[
    (KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit),
    (KeyCombo::plain(KeyCode::Esc), Command::Quit),
    (KeyCombo::plain(KeyCode::Enter), Command::SubmitQuery),
    (KeyCombo::plain(KeyCode::Backspace), Command::Backspace),
    (KeyCombo::ctrl(KeyCode::Char('u')), Command::ClearInput),
    (KeyCombo::plain(KeyCode::Tab), Command::NextRegion),
    (KeyCombo::new(KeyCode::BackTab, KeyModifiers::SHIFT), Command::PreviousRegion),
    (KeyCombo::plain(KeyCode::BackTab), Command::PreviousRegion),
    (KeyCombo::plain(KeyCode::Left), Command::PreviousPage),
    (KeyCombo::plain(KeyCode::PageUp), Command::PreviousPage),
    (KeyCombo::plain(KeyCode::Right), Command::NextPage),
    (KeyCombo::plain(KeyCode::PageDown), Command::NextPage),
    (KeyCombo::plain(KeyCode::Up), Command::MoveUp),
    (KeyCombo::plain(KeyCode::Down), Command::MoveDown),
    (KeyCombo::ctrl(KeyCode::Char('o')), Command::OpenSelected),
];

/// Map a key event to a command, if any.
pub fn resolve(key: KeyEvent) -> Option<Command> {
    let combo = KeyCombo::from(key);
    if let Some((_, command)) = BINDINGS.iter().find(|(c, _)| *c == combo) {
        return Some(command.clone());
    }

    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Command::InsertChar(c))
        }
        _ => None,
    }
}
