use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn clio_cmd() -> Command {
    let mut cmd = Command::cargo_bin("clio-count").expect("Failed to find clio-count binary");
    cmd.env_remove("CLIO_LOG").env_remove("CLIO_LOG_DECORATE");
    cmd
}

#[test]
fn test_counts_stdin_without_files() {
    clio_cmd()
        .write_stdin("a b\nc\n")
        .assert()
        .success()
        .stdout("2\t3\t6\n");
}

#[test]
fn test_counts_files_in_given_order() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let b = dir.path().join("b.txt");
    let a = dir.path().join("a.txt");
    std::fs::write(&b, "one two\n")?;
    std::fs::write(&a, "x\ny\nz\n")?;

    let expected = format!(
        "1\t2\t8\t{}\n3\t3\t6\t{}\n4\t5\t14\ttotal\n",
        b.display(),
        a.display()
    );

    clio_cmd()
        .arg(&b)
        .arg(&a)
        .write_stdin("ignored\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    Ok(())
}

#[test]
fn test_line_flag_selects_lines_only() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("notes.txt");
    std::fs::write(&file, "first\nsecond\n")?;

    clio_cmd()
        .arg("-l")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("2\t{}\n", file.display())));

    Ok(())
}

#[test]
fn test_missing_file_is_fatal() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let present = dir.path().join("present.txt");
    let missing = dir.path().join("missing.txt");
    let after = dir.path().join("after.txt");
    std::fs::write(&present, "hello\n")?;
    std::fs::write(&after, "never counted\n")?;

    clio_cmd()
        .arg(&present)
        .arg(&missing)
        .arg(&after)
        .assert()
        .failure()
        .code(1)
        .stdout(contains("present.txt").and(contains("after.txt").not()))
        .stderr(contains(format!(
            "clio-count: couldn't open \"{}\"",
            missing.display()
        )));

    Ok(())
}

#[test]
fn test_decorated_log_lines() {
    clio_cmd()
        .env("CLIO_LOG_DECORATE", "1")
        .arg("surely/this/does/not/exist.txt")
        .assert()
        .failure()
        .stderr(
            predicate::str::starts_with("clio-count: ")
                .and(contains("ERROR couldn't open \"surely/this/does/not/exist.txt\"")),
        );
}

#[test]
fn test_version_prints_banner() {
    clio_cmd()
        .arg("-v")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with(format!(
                "clio-count {}, ",
                env!("CARGO_PKG_VERSION")
            ))
            .and(contains("Author: Clio Contributors, clio@example.org\n"))
            .and(predicate::str::ends_with("License: MIT\n")),
        );
}

#[test]
fn test_help_uses_installed_usage() {
    clio_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with(
                "Usage: clio-count [-l] [-w] [-c] [-v] [FILE...]\n\
                 Counts the lines, words and bytes of each input file.\n\
                 Example: clio-count -l notes.txt todo.txt\n\
                 Options:\n",
            )
            .and(contains("--lines"))
            .and(contains("Count words")),
        );
}

#[test]
fn test_invalid_flag_shows_usage_line() {
    clio_cmd()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(contains("Usage: clio-count [-l] [-w] [-c] [-v] [FILE...]"));
}

#[test]
fn test_fatal_error_shown_when_logging_is_off() {
    clio_cmd()
        .env("CLIO_LOG", "off")
        .arg("surely/this/does/not/exist.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(contains(
            "clio-count: couldn't open \"surely/this/does/not/exist.txt\"",
        ));
}
