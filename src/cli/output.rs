//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::RepoRootNotFound(_) => format!(
            "Error: {}\nRun inside a git repository or pass --root <path>.",
            e
        ),
        _ => format!("Error: {}", e),
    }
}
