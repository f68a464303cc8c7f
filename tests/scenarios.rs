use std::fs;

use tempfile::tempdir;

use aprender_viver::{
    App, Catalog, Document, DocumentStore, Error, JournalRecord, JsonFileStore, QuizEngine,
    ScoreRecord, Session, ValidationError, View,
};

#[test]
fn test_scores_append_in_order_without_merge() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("data.json"));
    let mut session = Session::initialize(store.clone());

    session.record_score("Ana", 2, 3).expect("first score");
    session.record_score("Ana", 1, 3).expect("second score");

    let expected = vec![ScoreRecord::new("Ana", 2, 3), ScoreRecord::new("Ana", 1, 3)];
    assert_eq!(session.scores(), expected.as_slice());
    assert_eq!(store.load().scores(), expected.as_slice());
}

#[test]
fn test_quiz_correct_skip_wrong_records_once() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("data.json"));
    let mut session = Session::initialize(store.clone());
    let mut quiz = QuizEngine::new(Catalog::builtin().questions).expect("quiz");

    quiz.select_option(2).unwrap();
    quiz.check_answer().unwrap();
    assert!(quiz.next_question(&mut session).unwrap().is_none());
    assert!(quiz.next_question(&mut session).unwrap().is_none());
    quiz.select_option(3).unwrap();
    quiz.check_answer().unwrap();
    let result = quiz.next_question(&mut session).unwrap().expect("finished");

    assert_eq!((result.score, result.total), (1, 3));
    assert_eq!(store.load().scores(), &[ScoreRecord::new("Anon", 1, 3)]);
}

#[test]
fn test_journal_validation_and_append() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("data.json"));
    let mut session = Session::initialize(store.clone());

    for bad in ["", "   "] {
        let err = session.append_journal_entry(bad).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::EmptyJournalText)));
    }
    assert!(!store.path().exists());

    session.append_journal_entry("ok").unwrap();
    let journal = store.load().journal().to_vec();
    assert_eq!(journal.len(), 1);
    assert_eq!(journal[0].text, "ok");
}

#[test]
fn test_failed_username_change_keeps_old_name() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("data.json"));
    let mut session = Session::initialize(store.clone());

    session.set_username("Ana").unwrap();
    assert!(session.set_username("").is_err());
    assert_eq!(session.username(), "Ana");

    // A new session picks the name up from disk
    let reopened = Session::initialize(store);
    assert_eq!(reopened.username(), "Ana");
}

#[test]
fn test_missing_recipe_is_not_found() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("data.json");
    let mut app = App::new(Catalog::builtin(), JsonFileStore::new(&path), 1).unwrap();
    app.show(View::Recipes);

    let err = app.recipe_by_title("Does not exist").unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(app.open_recipe("Does not exist").is_err());
    assert!(app.opened_recipe().is_none());
    assert_eq!(app.view(), View::Recipes);
    assert!(!path.exists());
}

#[test]
fn test_corrupt_file_recovered_then_overwritten() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("data.json");
    fs::write(&path, "{\"username\": \"Ana\", \"scores\": [").unwrap();

    let store = JsonFileStore::new(&path);
    let mut session = Session::initialize(store.clone());
    assert_eq!(session.document(), &Document::new());

    session.append_journal_entry("Recomeçamos a horta").unwrap();
    let doc = store.load();
    assert_eq!(doc.journal(), &[JournalRecord::new("Anon", "Recomeçamos a horta")]);
    assert!(doc.username.is_none());
}

#[test]
fn test_deleted_or_corrupt_file_keeps_name_and_scores() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("data.json");
    let store = JsonFileStore::new(&path);
    let mut session = Session::initialize(store.clone());

    session.set_username("Ana").unwrap();
    fs::remove_file(&path).unwrap();
    session.record_score("Ana", 2, 3).unwrap();
    assert_eq!(session.username(), "Ana");

    fs::write(&path, "{oops").unwrap();
    session.append_journal_entry("ok").unwrap();
    assert_eq!(session.username(), "Ana");
    assert_eq!(session.scores(), &[ScoreRecord::new("Ana", 2, 3)]);

    let saved = store.load();
    assert_eq!(saved.username(), "Ana");
    assert_eq!(saved.scores(), &[ScoreRecord::new("Ana", 2, 3)]);
    assert_eq!(saved.journal(), &[JournalRecord::new("Ana", "ok")]);
}

#[test]
fn test_unknown_keys_survive_updates() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("data.json");
    fs::write(
        &path,
        r#"{"username": "Bia", "turma": "5B", "horta": [{"user": "Bia", "text": "Plantei", "semana": 1}]}"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let mut session = Session::initialize(store.clone());
    session.record_score("Bia", 3, 3).unwrap();

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["turma"], "5B");
    assert_eq!(saved["horta"][0]["semana"], 1);
    assert_eq!(saved["scores"][0]["score"], 3);
    assert_eq!(saved["username"], "Bia");
}

#[test]
fn test_save_load_fixed_point_on_disk() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("data.json"));
    fs::write(
        store.path(),
        r#"{"username": "Caio", "scores": [{"user": "Caio", "score": 0, "total": 3}], "horta": []}"#,
    )
    .unwrap();

    let first = store.load();
    store.save(&first).unwrap();
    let bytes = fs::read(store.path()).unwrap();
    store.save(&store.load()).unwrap();

    assert_eq!(store.load(), first);
    assert_eq!(fs::read(store.path()).unwrap(), bytes);
}
