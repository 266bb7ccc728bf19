use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{} is not an absolute path. Please provide a full path instead of a relative path", path.display())]
    NotAbsolute { path: PathBuf },

    #[error("{} is not a folder", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to read file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to list directory '{path}': {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Unable to rename file '{}': {source}", from.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to rename file '{}': '{}' already exists", from.display(), to.display())]
    RenameTargetExists { from: PathBuf, to: PathBuf },

    #[error("Unable to rename file '{}': '{to}' is not a usable file name", from.display())]
    InvalidName { from: PathBuf, to: String },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SyncGuardError {
    /// Short category label used when printing the error to the console.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::InvalidPattern { .. } | Self::TomlParse(_) => {
                "Configuration error"
            }
            Self::NotAbsolute { .. } | Self::NotADirectory { .. } => "Invalid start path",
            Self::FileAccess { .. } | Self::Io(_) => "IO error",
            Self::ListDirectory { .. } => "Directory listing error",
            Self::Rename { .. } | Self::RenameTargetExists { .. } | Self::InvalidName { .. } => {
                "Rename error"
            }
            Self::JsonSerialize(_) => "Output error",
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
