use super::*;
use tempfile::tempdir;

#[test]
fn test_database_path_ok() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    fs::write(&db_path, b"").unwrap();

    assert!(validate_database_path(&db_path).is_ok());
}

#[test]
fn test_database_path_missing() {
    let dir = tempdir().unwrap();
    let err = validate_database_path(&dir.path().join("nofile.db")).unwrap_err();

    assert!(matches!(err, CoreError::NotFound { .. }));
    assert!(err.to_string().contains("Path doesn't exist"));
}

#[test]
fn test_database_path_is_directory() {
    let dir = tempdir().unwrap();
    let err = validate_database_path(dir.path()).unwrap_err();

    assert!(matches!(err, CoreError::InvalidPath { .. }));
    assert!(err.to_string().contains("Path should be a file"));
}

#[test]
fn test_output_dir_existing() {
    let dir = tempdir().unwrap();
    assert!(prepare_output_dir(dir.path()).is_ok());
}

#[test]
fn test_output_dir_created_with_parents() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("a").join("b").join("dump");

    prepare_output_dir(&output).unwrap();

    assert!(output.is_dir());
}

#[test]
fn test_output_dir_is_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("not_a_dir");
    fs::write(&output, b"x").unwrap();

    let err = prepare_output_dir(&output).unwrap_err();

    assert!(matches!(err, CoreError::InvalidPath { .. }));
    assert!(err.to_string().contains("Output should be a directory"));
}

#[test]
fn test_output_dir_under_file_fails_to_create() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"x").unwrap();

    let err = prepare_output_dir(&blocker.join("dump")).unwrap_err();

    assert!(matches!(err, CoreError::Io { .. }));
}
