use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn library_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn tracked_library_dir(library_dir: TempDir) -> TempDir {
    let files = [
        ("1.txt", "one\n"),
        ("a/2.txt", "two\n"),
        ("a/b/3.txt", "three\n"),
    ];

    for (name, content) in files {
        write_file(FileSpec::new(
            library_dir.path().join(name),
            content.to_string(),
        ));
    }

    run_librarian_command(library_dir.path(), &["add", "."])
        .assert()
        .success();

    library_dir
}

#[fixture]
pub fn original_text() -> String {
    "fn main() {\n    let s = String::new();\n\n    println!(\"{}\", s);\n\n    println!(\"Done\");\n}\n"
        .to_string()
}

#[fixture]
pub fn edited_text() -> String {
    "fn main() {\n    let s = String::from(\"edited\");\n\n    println!(\"{}\", s);\n    eprintln!(\"{}\", s);\n\n    println!(\"Done\");\n}\n"
        .to_string()
}

pub fn run_librarian_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("librarian").expect("Failed to find librarian binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.env_remove("LIBRARIAN_ROOT");
    cmd.env_remove("LIBRARIAN_CATALOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is not UTF-8")
}
