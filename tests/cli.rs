use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// Both failures below happen during the directory scan, before any
// interactive prompt, so the binary can run non-interactively.

#[test]
fn fails_in_directory_without_submissions() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("submissions")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No corrected submissions"));
}

#[test]
fn fails_on_mixed_sheet_numbers() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a@y.com_1_corrected.pdf"), b"%PDF-1.4").unwrap();
    std::fs::write(dir.path().join("b@y.com_2_corrected.pdf"), b"%PDF-1.4").unwrap();

    Command::cargo_bin("submissions")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("multiple sheets"));
}

#[test]
fn help_documents_the_naming_convention() {
    Command::cargo_bin("submissions")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("{email}_{sheet}_corrected.pdf"));
}
