//! Integration tests for the zip produced after conversion

#![allow(deprecated)]

use std::fs::{self, File};
use tempfile::TempDir;
use zip::ZipArchive;

mod common;
use common::{omnitree_cmd, snapshot_tree, NotesDb, TestNote};

#[test]
fn test_archive_extracts_to_identical_tree() {
    let temp = TempDir::new().unwrap();
    let db = NotesDb::create(&temp.path().join("omni-notes"));
    db.category(1, "Work").category(2, "Empty");
    db.note(TestNote::new(1_000, "Top", "top body"))
        .note(TestNote::new(2_000, "Hidden", "archived body").archived())
        .note(TestNote::new(3_000, "", "untitled").trashed().in_category(1))
        .note(TestNote::new(4_000, "Top", "duplicate"));

    omnitree_cmd()
        .current_dir(temp.path())
        .assert()
        .success();

    let extracted = temp.path().join("extracted");
    fs::create_dir_all(&extracted).unwrap();
    let mut archive = ZipArchive::new(File::open(temp.path().join("output.zip")).unwrap()).unwrap();
    archive.extract(&extracted).unwrap();

    assert_eq!(
        snapshot_tree(&extracted),
        snapshot_tree(&temp.path().join("output"))
    );
}

#[test]
fn test_archive_entries_are_relative_and_include_hidden() {
    let temp = TempDir::new().unwrap();
    NotesDb::create(&temp.path().join("omni-notes"))
        .note(TestNote::new(1_000, "Secret", "s").archived());

    omnitree_cmd()
        .current_dir(temp.path())
        .assert()
        .success();

    let mut archive = ZipArchive::new(File::open(temp.path().join("output.zip")).unwrap()).unwrap();
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();

    assert!(names.contains(&".archive/.Secret.md".to_string()));
    assert!(names.contains(&".trash/".to_string()));
    assert!(names.iter().all(|n| !n.starts_with("output")));
}
