use analyst_fit::assessment::{AnswerImportError, AnswerSheet, QuestionBank, ValidationError};
use std::fs;
use std::path::PathBuf;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("analyst-fit-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("scratch dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("scratch file written");
    path
}

#[test]
fn sheet_format_follows_the_file_extension() {
    let bank = QuestionBank::standard();

    let csv_path = scratch_file("answers.csv", "question_id,value\np1,4\nt2,c\n");
    let sheet = AnswerSheet::from_path(&bank, &csv_path).expect("csv sheet loads");
    assert_eq!(sheet.get("p1"), Some("4"));
    assert_eq!(sheet.get("t2"), Some("c"));

    let json_path = scratch_file("answers.JSON", r#"{"w1": "2", "r2": "5"}"#);
    let sheet = AnswerSheet::from_path(&bank, &json_path).expect("json sheet loads");
    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet.get("r2"), Some("5"));
}

#[test]
fn missing_files_surface_as_io_errors() {
    let bank = QuestionBank::standard();
    let path = std::env::temp_dir().join("analyst-fit-does-not-exist.csv");
    let err = AnswerSheet::from_path(&bank, path).expect_err("file is absent");
    assert!(matches!(err, AnswerImportError::Io(_)));
}

#[test]
fn csv_rows_with_unknown_ids_are_rejected() {
    let bank = QuestionBank::standard();
    let err = AnswerSheet::from_csv_reader(&bank, "question_id,value\nq99,3\n".as_bytes())
        .expect_err("q99 is unknown");
    assert!(matches!(
        err,
        AnswerImportError::Validation(ValidationError::UnknownQuestion(ref id)) if id == "q99"
    ));
}

#[test]
fn csv_without_the_expected_headers_fails_to_parse() {
    let bank = QuestionBank::standard();
    let err = AnswerSheet::from_csv_reader(&bank, "id;answer\np1;3\n".as_bytes())
        .expect_err("headers do not match");
    assert!(matches!(err, AnswerImportError::Csv(_)));
}
