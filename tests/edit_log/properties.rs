use edit_log::{Command, Document, EditLog};
use proptest::prelude::*;

fn id() -> impl Strategy<Value = i64> {
    0i64..4
}

fn value() -> impl Strategy<Value = String> {
    "[ab ]{0,4}"
}

fn document() -> impl Strategy<Value = Document> {
    prop::collection::btree_map(id(), value(), 0..4)
}

fn edit_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (id(), value()).prop_map(|(id, value)| Command::insert(id, value)),
        (id(), value()).prop_map(|(id, value)| Command::update(id, value)),
        (id(), value()).prop_map(|(id, value)| Command::upsert(id, value)),
        id().prop_map(Command::delete),
        (id(), id()).prop_map(|(id, other_id)| Command::merge(id, other_id)),
        (id(), id()).prop_map(|(id, other_id)| Command::split(id, other_id)),
        (id(), id()).prop_map(|(id, other_id)| Command::move_entry(id, other_id)),
        Just(Command::clear()),
    ]
}

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        8 => edit_command(),
        1 => Just(Command::undo()),
        1 => Just(Command::redo()),
        1 => Just(Command::commit()),
        1 => Just(Command::rollback()),
    ]
}

proptest! {
    #[test]
    fn undo_restores_and_redo_reapplies(start in document(), command in edit_command()) {
        let mut log = EditLog::with_document(start.clone());
        let changed = log.execute(&command).unwrap();
        if !changed {
            prop_assert_eq!(log.document(), &start);
            prop_assert!(log.history().is_empty());
            return Ok(());
        }
        let after = log.document().clone();

        prop_assert!(log.undo());
        prop_assert_eq!(log.document(), &start);

        prop_assert!(log.redo());
        prop_assert_eq!(log.document(), &after);
    }

    #[test]
    fn pointer_stays_in_bounds(commands in prop::collection::vec(any_command(), 0..40)) {
        let mut log = EditLog::new();
        for command in &commands {
            log.execute(command).unwrap();
            let history = log.history();
            prop_assert!(history.pointer() <= history.len());
        }
    }

    #[test]
    fn undoing_everything_returns_to_checkpoint(
        start in document(),
        commands in prop::collection::vec(edit_command(), 0..20),
    ) {
        let mut log = EditLog::with_document(start.clone());
        log.execute_all(&commands).unwrap();

        while log.undo() {}
        prop_assert_eq!(log.document(), &start);
    }

    #[test]
    fn rollback_matches_repeated_undo(
        start in document(),
        commands in prop::collection::vec(any_command(), 0..30),
    ) {
        let mut rolled_back = EditLog::with_document(start);
        rolled_back.execute_all(&commands).unwrap();
        let mut undone = rolled_back.clone();

        rolled_back.rollback();
        while undone.undo() {}
        prop_assert_eq!(rolled_back.document(), undone.document());
    }

    #[test]
    fn rollback_undoes_and_redoes_as_one_step(
        start in document(),
        commands in prop::collection::vec(any_command(), 0..30),
    ) {
        let mut log = EditLog::with_document(start);
        log.execute_all(&commands).unwrap();
        let before = log.document().clone();

        if log.rollback() {
            let after = log.document().clone();
            prop_assert_eq!(log.history().pointer(), 1);

            prop_assert!(log.undo());
            prop_assert_eq!(log.document(), &before);
            prop_assert!(!log.can_undo());

            prop_assert!(log.redo());
            prop_assert_eq!(log.document(), &after);
        }
    }

    #[test]
    fn commit_then_rollback_is_noop(
        start in document(),
        commands in prop::collection::vec(any_command(), 0..30),
    ) {
        let mut log = EditLog::with_document(start);
        log.execute_all(&commands).unwrap();
        log.commit();

        let snapshot = log.clone();
        prop_assert!(!log.rollback());
        prop_assert_eq!(log, snapshot);
    }
}
