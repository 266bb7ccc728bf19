pub mod cli;
pub mod commands;
pub mod config;
pub mod entry;
pub mod error;
pub mod normalizer;
pub mod output;
pub mod path_utils;
pub mod rules;
pub mod scanner;

pub use error::{Result, SyncGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ISSUES_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
