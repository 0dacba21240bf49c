//! Ready-made command sequences.

use crate::command::Command;

/// Builds "Hello Universe !" across two commits, with undo, a branch and a
/// rollback along the way. Applied to an empty document it yields
/// `{1: "Hello", 2: "Universe", 3: "!"}`.
pub fn hello_universe() -> Vec<Command> {
    vec![
        Command::insert(1, "Hello"),
        Command::insert(2, "World"),
        Command::update(2, "Universe"),
        Command::merge(1, 2),
        Command::commit(),
        Command::insert(3, "!"),
        Command::merge(2, 3),
        Command::split(2, 3),
        Command::insert(4, "?"),
        Command::undo(),
        Command::merge(1, 4),
        Command::merge(1, 3),
        Command::commit(),
        Command::undo(),
        Command::insert(5, "!"),
        Command::insert(6, "?"),
        Command::rollback(),
        Command::split(1, 2),
        Command::split(2, 3),
        Command::commit(),
    ]
}
