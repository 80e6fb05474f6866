use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

use common::command::{library_dir, run_librarian_command, stdout_of, tracked_library_dir};
use common::file::{FileSpec, write_file, write_generated_files};

#[rstest]
fn add_expands_directories_in_name_order(tracked_library_dir: TempDir) {
    let output = stdout_of(&mut run_librarian_command(tracked_library_dir.path(), &["list"]));

    assert_eq!(output, "1.txt\na/2.txt\na/b/3.txt\n");
}

#[rstest]
fn adding_tracked_files_again_adds_nothing(tracked_library_dir: TempDir) {
    let output = stdout_of(&mut run_librarian_command(
        tracked_library_dir.path(),
        &["add", ".", "1.txt"],
    ));

    assert_eq!(output, "Added 0 file(s)\n");
}

#[rstest]
fn add_reports_number_of_generated_files(library_dir: TempDir) {
    write_generated_files(&library_dir.path().join("docs"), 4);

    let output = stdout_of(&mut run_librarian_command(library_dir.path(), &["add", "docs"]));

    assert_eq!(output, "Added 4 file(s)\n");
}

#[rstest]
fn adding_a_missing_path_fails(library_dir: TempDir) {
    run_librarian_command(library_dir.path(), &["add", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[rstest]
fn catalog_file_is_not_tracked(tracked_library_dir: TempDir) {
    run_librarian_command(tracked_library_dir.path(), &["add", "."])
        .assert()
        .success();

    let output = stdout_of(&mut run_librarian_command(tracked_library_dir.path(), &["status"]));

    assert_eq!(output, "Current list contains '3' files in '3' directories.\n");
}

#[rstest]
#[case(".librarian.json")]
#[case(".git/config")]
fn excluded_files_named_directly_are_not_tracked(
    tracked_library_dir: TempDir,
    #[case] path: &str,
) {
    let dir = tracked_library_dir.path();
    tracked_library_dir.child(".git/config").write_str("[core]").unwrap();

    let output = stdout_of(&mut run_librarian_command(dir, &["add", path]));
    assert_eq!(output, "Added 0 file(s)\n");

    let output = stdout_of(&mut run_librarian_command(dir, &["list"]));
    assert_eq!(output, "1.txt\na/2.txt\na/b/3.txt\n");
}

#[rstest]
fn status_of_empty_catalog(library_dir: TempDir) {
    let output = stdout_of(&mut run_librarian_command(library_dir.path(), &["status"]));

    assert_eq!(output, "Current list contains '0' files in '0' directories.\n");
}

#[rstest]
fn tag_is_listed_and_idempotent(tracked_library_dir: TempDir) {
    let dir = tracked_library_dir.path();

    let output = stdout_of(&mut run_librarian_command(dir, &["tag", "draft", "1.txt", "a/2.txt"]));
    assert_eq!(output, "Tagged 2 file(s) with 'draft'\n");

    let output = stdout_of(&mut run_librarian_command(dir, &["tag", "draft", "1.txt"]));
    assert_eq!(output, "Tagged 0 file(s) with 'draft'\n");

    let output = stdout_of(&mut run_librarian_command(dir, &["list"]));
    assert_eq!(output, "1.txt [draft]\na/2.txt [draft]\na/b/3.txt\n");

    let output = stdout_of(&mut run_librarian_command(dir, &["list", "--tag", "draft"]));
    assert_eq!(output, "1.txt [draft]\na/2.txt [draft]\n");
}

#[rstest]
fn tagging_an_untracked_file_fails(tracked_library_dir: TempDir) {
    tracked_library_dir.child("new.txt").write_str("new").unwrap();

    run_librarian_command(tracked_library_dir.path(), &["tag", "x", "new.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not tracked"));
}

#[rstest]
fn list_filters_by_name_and_content(tracked_library_dir: TempDir) {
    let dir = tracked_library_dir.path();

    let output = stdout_of(&mut run_librarian_command(dir, &["list", "--name", "2"]));
    assert_eq!(output, "a/2.txt\n");

    let output = stdout_of(&mut run_librarian_command(dir, &["list", "--content", "THREE"]));
    assert_eq!(output, "");

    let output = stdout_of(&mut run_librarian_command(
        dir,
        &["list", "--content", "THREE", "--ignore-case"],
    ));
    assert_eq!(output, "a/b/3.txt\n");
}

#[rstest]
fn list_sort_reorders_catalog(library_dir: TempDir) {
    let dir = library_dir.path();
    for (name, content) in [("a.txt", "aa"), ("b.txt", "bbb"), ("c.txt", "c")] {
        write_file(FileSpec::new(dir.join(name), content.to_string()));
    }
    run_librarian_command(dir, &["add", "."]).assert().success();

    let output = stdout_of(&mut run_librarian_command(dir, &["list", "--sort", "size"]));
    assert_eq!(output, "c.txt\na.txt\nb.txt\n");

    let output = stdout_of(&mut run_librarian_command(dir, &["list"]));
    assert_eq!(output, "c.txt\na.txt\nb.txt\n");

    let output = stdout_of(&mut run_librarian_command(dir, &["list", "--sort", "name"]));
    assert_eq!(output, "a.txt\nb.txt\nc.txt\n");
}

#[rstest]
#[case("b", "6 B\n")]
#[case("kb", "0.01 KB\n")]
fn size_is_reported_in_unit(
    tracked_library_dir: TempDir,
    #[case] unit: &str,
    #[case] expected: &str,
) {
    let output = stdout_of(&mut run_librarian_command(
        tracked_library_dir.path(),
        &["size", "a/b/3.txt", "--unit", unit],
    ));

    assert_eq!(output, expected);
}

#[rstest]
fn size_of_deleted_file_fails(tracked_library_dir: TempDir) {
    std::fs::remove_file(tracked_library_dir.path().join("1.txt")).unwrap();

    run_librarian_command(tracked_library_dir.path(), &["size", "1.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not open file"));
}

#[rstest]
fn catalog_location_can_be_configured(library_dir: TempDir) {
    library_dir.child("1.txt").write_str("one").unwrap();

    run_librarian_command(library_dir.path(), &["--catalog", "store/catalog.json", "add", "1.txt"])
        .assert()
        .success();

    library_dir.child("store/catalog.json").assert(predicate::path::exists());
    library_dir.child(".librarian.json").assert(predicate::path::missing());

    let output = stdout_of(
        run_librarian_command(library_dir.path(), &["status"])
            .env("LIBRARIAN_CATALOG", "store/catalog.json"),
    );
    assert_eq!(output, "Current list contains '1' files in '1' directories.\n");
}

#[rstest]
fn malformed_catalog_is_rejected(library_dir: TempDir) {
    library_dir
        .child(".librarian.json")
        .write_str(r#"{"version":1,"files":[{"tags":[]}]}"#)
        .unwrap();

    run_librarian_command(library_dir.path(), &["status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed catalog file"));
}
