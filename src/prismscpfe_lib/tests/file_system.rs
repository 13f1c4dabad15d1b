use std::fs;

use tempdir::TempDir;

use super::*;
use crate::config::Config;
use crate::test_utils::REAL_FS;

#[test]
fn try_read_toml_test() {
    let tempdir = TempDir::new("fs_test").unwrap();
    let filepath = tempdir.path().join("x.toml");

    fs::write(&filepath, "invalid toml goes here").unwrap();
    assert!(REAL_FS.try_read_toml::<Config>(&filepath).is_err());
}

#[test]
fn read_utf8_test() {
    let tempdir = TempDir::new("fs_test").unwrap();
    let filepath = tempdir.path().join("x.txt");

    fs::write(&filepath, [0xff, 0xfe, 0x00]).unwrap();
    assert!(REAL_FS
        .read_utf8(&filepath)
        .is_err_and(|e| format!("{e:?}").contains("not valid UTF-8")));

    fs::write(&filepath, "set a = b").unwrap();
    assert_eq!(REAL_FS.read_utf8(&filepath).unwrap(), "set a = b");
}

#[test]
fn missing_file_test() {
    let tempdir = TempDir::new("fs_test").unwrap();
    let filepath = tempdir.path().join("nothing.in");

    assert!(!REAL_FS.is_file(&filepath));
    assert!(!REAL_FS.is_file(tempdir.path()));
    assert!(REAL_FS.read_bytes(&filepath).is_err());
}

#[test]
fn glob_files_test() {
    let tempdir = TempDir::new("fs_test").unwrap();

    fs::write(tempdir.path().join("b.vtu"), "").unwrap();
    fs::write(tempdir.path().join("a.vtu"), "").unwrap();
    fs::write(tempdir.path().join("a.txt"), "").unwrap();
    fs::create_dir(tempdir.path().join("dir.vtu")).unwrap();

    let found = REAL_FS.glob_files(tempdir.path(), "*vtu").unwrap();

    assert_eq!(
        found,
        vec![tempdir.path().join("a.vtu"), tempdir.path().join("b.vtu")]
    );
    assert!(REAL_FS.glob_files(tempdir.path(), "*.none").unwrap().is_empty());
    assert!(REAL_FS.glob_files(tempdir.path(), "[").is_err());
}
