use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn write_splits(dir: &Path, splits: &[(&str, &str)]) {
    for (split, contents) in splits {
        fs::write(dir.join(format!("{}.5class.txt", split)), contents).unwrap();
    }
}

#[test]
fn tags_all_splits() {
    let dir = tempdir().unwrap();
    write_splits(
        dir.path(),
        &[
            ("train", "2\tThe cats are running fast.\n4\tGreat fun .\n"),
            ("dev", "0\tDull .\n"),
            ("test", "3\tI loved it .\n"),
        ],
    );

    Command::cargo_bin("sstag")
        .unwrap()
        .arg(dir.path())
        .assert()
        .success();

    let train = fs::read_to_string(dir.path().join("train")).unwrap();
    assert!(train.starts_with("# instance 1\n1\tThe\tThe\tDT\t2\n2\tcats\tcat\tNNS\t2\n"));
    assert!(train.contains("# instance 2\n"));

    let dev = fs::read_to_string(dir.path().join("dev")).unwrap();
    assert_eq!(dev, "# instance 1\n1\tDull\tDull\tJJ\t0\n2\t.\t.\t.\t0\n\n");

    assert!(dir.path().join("test").exists());
}

#[test]
fn missing_split_fails() {
    let dir = tempdir().unwrap();
    write_splits(dir.path(), &[("train", "1\tok\n")]);

    Command::cargo_bin("sstag")
        .unwrap()
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot tag dev split"));

    assert!(dir.path().join("train").exists());
    assert!(!dir.path().join("test").exists());
}

#[test]
fn line_without_tab_fails() {
    let dir = tempdir().unwrap();
    write_splits(dir.path(), &[("train", "1\tfine\nbroken line\n")]);

    Command::cargo_bin("sstag")
        .unwrap()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tab between label and sentence"));

    let train = fs::read_to_string(dir.path().join("train")).unwrap();
    assert_eq!(train.matches("# instance").count(), 1);
}
