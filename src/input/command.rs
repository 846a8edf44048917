//! Commands produced by key presses.

/// A user action, independent of which key triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    InsertChar(char),
    Backspace,
    ClearInput,
    /// Settle the typed query without waiting for the quiet period
    SubmitQuery,
    NextRegion,
    PreviousRegion,
    PreviousPage,
    NextPage,
    MoveUp,
    MoveDown,
    OpenSelected,
    Quit,
}
