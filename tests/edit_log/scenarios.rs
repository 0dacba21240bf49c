use edit_log::{apply, scenario, Command, CommandError, Document, EditLog, Field};

use crate::doc;

#[test]
fn hello_universe() {
    let outcome = apply(
        Document::new(),
        &[
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
        ],
    )
    .unwrap();

    assert_eq!(outcome, doc(&[(1, "Hello"), (2, "Universe"), (3, "!")]));
}

#[test]
fn built_in_scenario_matches() {
    let outcome = apply(Document::new(), &scenario::hello_universe()).unwrap();
    assert_eq!(outcome, doc(&[(1, "Hello"), (2, "Universe"), (3, "!")]));
}

#[test]
fn commands_from_json() {
    let json = r#"[
        {"kind": "insert", "id": 1, "value": "Hello"},
        {"kind": "upsert", "id": 2, "value": "World"},
        {"kind": "merge", "id": 1, "other_id": 2},
        {"kind": "move", "id": 1, "other_id": 7},
        {"kind": "undo"},
        {"kind": "redo"}
    ]"#;
    let commands: Vec<Command> = serde_json::from_str(json).unwrap();
    let outcome = apply(Document::new(), &commands).unwrap();

    assert_eq!(outcome, doc(&[(7, "Hello World")]));
    assert_eq!(
        serde_json::to_string(&outcome).unwrap(),
        r#"{"7":"Hello World"}"#
    );
}

#[test]
fn unknown_kind_fails_with_command() {
    let err = apply(
        Document::new(),
        &[Command::insert(1, "a"), Command::new("explode").with_id(1)],
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "invalid command: explode(id=1)");
    assert_eq!(err.command(), &Command::new("explode").with_id(1));
}

#[test]
fn missing_field_fails() {
    let err = apply(Document::new(), &[Command::new("split").with_other_id(2)]).unwrap_err();
    assert_eq!(
        err,
        CommandError::MissingField {
            command: Command::new("split").with_other_id(2),
            field: Field::Id,
        }
    );
}

#[test]
fn commit_then_rollback_is_noop() {
    let mut log = EditLog::with_document(doc(&[(1, "a")]));
    log.execute(&Command::insert(2, "b")).unwrap();
    log.execute(&Command::undo()).unwrap();

    log.execute(&Command::commit()).unwrap();
    let before = log.clone();
    assert!(!log.execute(&Command::rollback()).unwrap());
    assert_eq!(log, before);
}

#[test]
fn clear_is_undoable() {
    let mut log = EditLog::new();
    log.execute_all(&[
        Command::insert(1, "a"),
        Command::insert(2, "b"),
        Command::commit(),
        Command::clear(),
    ])
    .unwrap();
    assert!(log.document().is_empty());

    log.execute(&Command::undo()).unwrap();
    assert_eq!(log.document(), &doc(&[(1, "a"), (2, "b")]));

    log.execute(&Command::redo()).unwrap();
    assert!(log.document().is_empty());
}

#[test]
fn upsert_round_trip() {
    let mut log = EditLog::new();
    log.execute_all(&[
        Command::upsert(1, "a"),
        Command::upsert(1, "b"),
        Command::undo(),
    ])
    .unwrap();
    assert_eq!(log.document(), &doc(&[(1, "a")]));

    log.execute(&Command::undo()).unwrap();
    assert!(log.document().is_empty());
}

#[test]
fn branching_discards_redo_tail() {
    let mut log = EditLog::new();
    log.execute_all(&[
        Command::insert(1, "a"),
        Command::insert(2, "b"),
        Command::insert(3, "c"),
        Command::undo(),
        Command::undo(),
    ])
    .unwrap();
    assert_eq!(log.history().redoable().len(), 2);

    log.execute(&Command::update(1, "z")).unwrap();
    assert!(!log.can_redo());
    assert!(!log.execute(&Command::redo()).unwrap());
    assert_eq!(log.document(), &doc(&[(1, "z")]));
}

#[test]
fn rollback_can_be_undone_and_redone() {
    let mut log = EditLog::new();
    log.execute_all(&[
        Command::insert(1, "Hello"),
        Command::commit(),
        Command::insert(2, "World"),
        Command::merge(1, 2),
        Command::split(1, 3),
        Command::rollback(),
    ])
    .unwrap();
    assert_eq!(log.document(), &doc(&[(1, "Hello")]));

    log.execute(&Command::undo()).unwrap();
    assert_eq!(log.document(), &doc(&[(1, "Hello"), (3, "World")]));

    log.execute(&Command::redo()).unwrap();
    assert_eq!(log.document(), &doc(&[(1, "Hello")]));

    // An undone rollback leaves nothing applied, so a second rollback is a no-op.
    log.execute(&Command::undo()).unwrap();
    assert!(!log.execute(&Command::rollback()).unwrap());
    assert_eq!(log.document(), &doc(&[(1, "Hello"), (3, "World")]));
    assert_eq!(log.history().redoable().len(), 1);
}
