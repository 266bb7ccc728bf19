//! Integration tests for configuration file handling.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn local_config_sets_path_limit() {
    let fixture = TestFixture::new();
    fixture.create_config("[scan]\nmax_path_length = 5\n");

    sync_guard!()
        .current_dir(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("longer than 5 characters"));
}

#[test]
fn cli_length_overrides_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[scan]\nmax_path_length = 5\n");

    sync_guard!()
        .current_dir(fixture.path())
        .args(["-l", "4000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("longer than").not());
}

#[test]
fn config_excludes_and_dry_run() {
    let fixture = TestFixture::new();
    fixture.create_config("[scan]\nfix_names = false\n\n[exclude]\npatterns = [\"skip\"]\n");
    fixture.create_file("skip/bad|name.txt");
    fixture.create_file("report .pdf");

    sync_guard!()
        .current_dir(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("bad|name.txt").not());

    assert!(fixture.exists("report .pdf"));
}

#[test]
fn explicit_config_path() {
    let fixture = TestFixture::new();
    let config_dir = TestFixture::new();
    let config = config_dir.path().join("custom.toml");
    std::fs::write(&config, "[scan]\nmax_path_length = 3\n").unwrap();

    sync_guard!()
        .arg("-c")
        .arg(&config)
        .arg("-p")
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("longer than 3 characters"));
}

#[test]
fn no_config_ignores_local_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[scan]\nmax_path_length = 5\n");

    sync_guard!()
        .current_dir(fixture.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("longer than").not());
}

#[test]
fn unknown_key_is_a_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config("[scan]\nmax_lines = 10\n");

    sync_guard!()
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn zero_length_is_a_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config("[scan]\nmax_path_length = 0\n");

    sync_guard!()
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_path_length must be greater than 0"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let fixture = TestFixture::new();

    sync_guard!()
        .arg("-c")
        .arg(fixture.path().join("absent.toml"))
        .arg("-p")
        .arg(fixture.path())
        .assert()
        .code(2);
}
