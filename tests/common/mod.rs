#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sync-guard binary.
#[macro_export]
macro_rules! sync_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sync-guard"))
    };
}

/// A temporary folder tree to scan.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates an empty file, creating parent folders as needed.
    pub fn create_file(&self, relative_path: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, "").expect("Failed to write file");
        path
    }

    pub fn create_dir(&self, relative_path: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.sync-guard.toml` at the fixture root.
    pub fn create_config(&self, content: &str) {
        fs::write(self.dir.path().join(".sync-guard.toml"), content)
            .expect("Failed to write config");
    }

    pub fn exists(&self, relative_path: &str) -> bool {
        self.dir.path().join(relative_path).exists()
    }
}
