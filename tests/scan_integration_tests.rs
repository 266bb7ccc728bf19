//! End-to-end scans of real folder trees.

mod common;

use common::TestFixture;
use predicates::prelude::*;

fn scan(fixture: &TestFixture) -> assert_cmd::assert::Assert {
    sync_guard!()
        .args(["--no-config", "--color", "never", "-p"])
        .arg(fixture.path())
        .assert()
}

#[test]
fn restricted_character_in_file_name() {
    let fixture = TestFixture::new();
    fixture.create_file("café*.txt");

    scan(&fixture)
        .success()
        .stdout(predicate::str::contains(
            "File 'café*.txt' requires fixing the following issue(s):",
        ))
        .stdout(predicate::str::contains(
            "> File contains the following restricted characters: *",
        ))
        .stdout(predicate::str::contains("longer than").not())
        .stdout(predicate::str::contains("A total of 1 entries found with issues."));
}

#[test]
fn space_before_extension_is_reported_and_repaired() {
    let fixture = TestFixture::new();
    fixture.create_file("report .pdf");

    scan(&fixture)
        .success()
        .stdout(predicate::str::contains(
            "has a space at the end of the file name, before the extension",
        ))
        .stdout(predicate::str::contains("Renamed"));

    assert!(fixture.exists("report.pdf"));
    assert!(!fixture.exists("report .pdf"));
}

#[test]
fn dry_run_keeps_original_name() {
    let fixture = TestFixture::new();
    fixture.create_file("report .pdf");

    sync_guard!()
        .args(["--no-config", "--no-fix", "-p"])
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("report .pdf' to 'report.pdf'"));

    assert!(fixture.exists("report .pdf"));
    assert!(!fixture.exists("report.pdf"));
}

#[test]
fn existing_target_is_never_overwritten() {
    let fixture = TestFixture::new();
    fixture.create_file("a .txt");
    std::fs::write(fixture.path().join("a.txt"), "keep").unwrap();

    scan(&fixture)
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert!(fixture.exists("a .txt"));
    assert_eq!(
        std::fs::read_to_string(fixture.path().join("a.txt")).unwrap(),
        "keep"
    );
}

#[test]
fn folder_with_trailing_space_is_reported_by_full_path() {
    let fixture = TestFixture::new();
    let folder = fixture.create_dir("Archive ");

    scan(&fixture)
        .success()
        .stdout(predicate::str::contains(format!(
            "Folder '{}' requires fixing",
            folder.display()
        )))
        .stdout(predicate::str::contains("Folder Archive  ends with a space"));

    assert!(fixture.exists("Archive "));
}

#[test]
fn long_path_is_reported_with_its_length() {
    let fixture = TestFixture::new();
    let root_len = fixture.path().to_string_lossy().chars().count();
    let name_len = 40;
    let name = "n".repeat(name_len);
    fixture.create_file(&name);
    let full_len = root_len + 1 + name_len;
    let limit = (full_len - 1).to_string();

    sync_guard!()
        .args(["--no-config", "-l", &limit, "-p"])
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Full path to File is longer than {limit} characters ({full_len} to be specific)"
        )));
}

#[test]
fn excluded_entries_are_skipped() {
    let fixture = TestFixture::new();
    fixture.create_file("build/bad|name.txt");
    fixture.create_file("keep/also|bad.txt");

    sync_guard!()
        .args(["--no-config", "-x", "build", "-p"])
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("bad|name.txt").not())
        .stdout(predicate::str::contains("also|bad.txt"));
}

#[test]
fn report_lists_files_before_subfolders() {
    let fixture = TestFixture::new();
    fixture.create_file("z|file.txt");
    fixture.create_file("a|dir/inner.txt");

    let output = sync_guard!()
        .args(["--no-config", "-p"])
        .arg(fixture.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let file_pos = stdout.find("File 'z|file.txt'").unwrap();
    let folder_pos = stdout.find("a|dir' requires").unwrap();
    assert!(file_pos < folder_pos);
}

#[cfg(unix)]
#[test]
fn unreadable_folder_does_not_abort_scan() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = TestFixture::new();
    let locked = fixture.create_dir("locked");
    fixture.create_file("open/bad|name.txt");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Root can read anything; nothing to assert about the failure then.
    let readable = std::fs::read_dir(&locked).is_ok();

    let assert = scan(&fixture)
        .success()
        .stdout(predicate::str::contains("bad|name.txt"));
    if !readable {
        assert.stderr(predicate::str::contains("Unable to list directory"));
    }

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
}
