use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn cleans_a_single_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "The cats are running quickly!").unwrap();

    let mut cmd = cargo_bin_cmd!("normtext");
    cmd.arg(&input).arg(&output);
    cmd.assert().success().stdout(predicate::str::contains(
        "Successfully cleaned text and saved to",
    ));

    assert_eq!(fs::read_to_string(&output).unwrap(), "cat running quickly");
}

#[test]
fn missing_input_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.txt");
    let output = dir.path().join("out.txt");

    let mut cmd = cargo_bin_cmd!("normtext");
    cmd.arg(&input).arg(&output);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("does not exist"));

    assert!(!output.exists());
}

#[test]
fn undecodable_single_file_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, [0xff, 0xfe, 0xfd]).unwrap();

    let mut cmd = cargo_bin_cmd!("normtext");
    cmd.arg(&input).arg(&output);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Failed to process file"))
        .stderr(predicate::str::contains("ERROR").and(predicate::str::contains("bad.txt")));

    assert!(!output.exists());
}

#[test]
fn directory_batch_skips_non_txt_files() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("a.txt"), "Apples and oranges.").unwrap();
    fs::write(input.path().join("b.txt"), "Boxes of matches.").unwrap();
    fs::write(input.path().join("c.md"), "Markdown stays put.").unwrap();

    let mut cmd = cargo_bin_cmd!("normtext");
    cmd.arg(input.path()).arg(output.path()).arg("--no-progress");
    cmd.assert().success().stdout(
        predicate::str::contains("Processing complete:")
            .and(predicate::str::contains("Successfully processed: 2 files"))
            .and(predicate::str::contains("Failed to process: 0 files")),
    );

    assert_eq!(
        fs::read_to_string(output.path().join("a.txt")).unwrap(),
        "apple orange"
    );
    assert_eq!(
        fs::read_to_string(output.path().join("b.txt")).unwrap(),
        "box match"
    );
    assert!(!output.path().join("c.md").exists());
}

#[test]
fn empty_directory_reports_no_files() {
    let input = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    let output = scratch.path().join("out");

    let mut cmd = cargo_bin_cmd!("normtext");
    cmd.arg(input.path()).arg(&output);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No text files found"));

    assert!(output.is_dir());
    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}

#[test]
fn per_file_failures_do_not_change_exit_code() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("good.txt"), "Good words").unwrap();
    fs::write(input.path().join("bad.txt"), [0xc3, 0x28, 0xff]).unwrap();

    let mut cmd = cargo_bin_cmd!("normtext");
    cmd.arg(input.path()).arg(output.path()).arg("--no-progress");
    cmd.assert().success().stdout(
        predicate::str::contains("Successfully processed: 1 files")
            .and(predicate::str::contains("Failed to process: 1 files")),
    );

    assert!(output.path().join("good.txt").exists());
    assert!(!output.path().join("bad.txt").exists());
}

#[test]
fn flags_customize_the_lexicon() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "Lorem ipsum: the dogs were running.").unwrap();

    let mut cmd = cargo_bin_cmd!("normtext");
    cmd.arg(&input)
        .arg(&output)
        .args(["--pos", "verb", "--extra-stopword", "lorem"]);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "ipsum dog run");
}

#[test]
fn config_file_sets_the_pattern() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    let config = scratch.path().join("normtext.toml");
    fs::write(&config, "[batch]\npattern = \"*.md\"\nprogress = false\n").unwrap();
    fs::write(input.path().join("a.txt"), "Ignored here.").unwrap();
    fs::write(input.path().join("notes.md"), "Notes matter.").unwrap();

    let mut cmd = cargo_bin_cmd!("normtext");
    cmd.arg(input.path())
        .arg(output.path())
        .arg("--config")
        .arg(&config);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Successfully processed: 1 files"));

    assert_eq!(
        fs::read_to_string(output.path().join("notes.md")).unwrap(),
        "note matter"
    );
    assert!(!output.path().join("a.txt").exists());
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "text").unwrap();

    let mut cmd = cargo_bin_cmd!("normtext");
    cmd.arg(&input)
        .arg(dir.path().join("out.txt"))
        .arg("--config")
        .arg(dir.path().join("absent.toml"));
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("invalid configuration"));
}

#[test]
fn successful_runs_log_nothing_at_default_level() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("a.txt"), "Cats").unwrap();

    let mut cmd = cargo_bin_cmd!("normtext");
    cmd.arg(input.path()).arg(output.path()).arg("--no-progress");
    cmd.assert().success().stderr(predicate::str::is_empty());

    let mut cmd = cargo_bin_cmd!("normtext");
    cmd.arg(input.path().join("a.txt"))
        .arg(output.path().join("single.txt"));
    cmd.assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn debug_level_logs_batch_progress() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("a.txt"), "Cats").unwrap();

    let mut cmd = cargo_bin_cmd!("normtext");
    cmd.arg(input.path())
        .arg(output.path())
        .args(["--no-progress", "--log-level", "debug"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Batch finished"));
}

#[test]
fn hidden_and_directory_entries_are_part_of_the_batch() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("a.txt"), "Cats").unwrap();
    fs::write(input.path().join(".hidden.txt"), "Dogs").unwrap();
    fs::create_dir(input.path().join("folder.txt")).unwrap();

    let mut cmd = cargo_bin_cmd!("normtext");
    cmd.arg(input.path()).arg(output.path()).arg("--no-progress");
    cmd.assert().success().stdout(
        predicate::str::contains("Successfully processed: 2 files")
            .and(predicate::str::contains("Failed to process: 1 files")),
    );

    assert_eq!(
        fs::read_to_string(output.path().join(".hidden.txt")).unwrap(),
        "dog"
    );
}

#[cfg(unix)]
#[test]
fn unlistable_input_is_a_batch_error() {
    let scratch = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("normtext");
    cmd.arg("/dev/null").arg(scratch.path().join("out"));
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("could not list input directory"));
}
