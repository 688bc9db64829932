//! Process-level error type.
//!
//! Only stage-level failures become an `AppError` (a directory that cannot be
//! created, an archive that cannot be finalized). Per-rating and per-file
//! problems are collected into a `BatchReport` instead so siblings keep going.
//!
//! Exit codes:
//! - `2`: configuration / input / output-directory problems
//! - `4`: archive creation or finalization failures

use std::path::Path;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Failure to create or list a directory the stage cannot run without.
    pub fn directory(action: &str, path: &Path, err: impl std::fmt::Display) -> Self {
        Self::new(2, format!("Failed to {action} directory '{}': {err}", path.display()))
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
