//! Recorded fixture lookup.
//!
//! Recorded responses live in `contracts/http/cocktaildb/` at the workspace root.

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Workspace-relative directory holding recorded responses.
pub const RECORDED_DIR: &str = "contracts/http/cocktaildb";

/// Walk up from the calling crate's manifest dir to the directory that
/// contains `contracts/`.
pub fn workspace_root() -> PathBuf {
    let start = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().unwrap());
    start
        .ancestors()
        .find(|p| p.join("contracts").is_dir())
        .unwrap_or(&start)
        .to_path_buf()
}

/// Absolute path of the recorded fixture directory.
pub fn recorded_dir() -> PathBuf {
    workspace_root().join(RECORDED_DIR)
}

/// Load and parse a fixture JSON file at `workspace_root/relative_path`.
///
/// Panics if the file is missing or invalid JSON.
pub fn load(relative_path: impl AsRef<Path>) -> Value {
    let full_path = workspace_root().join(relative_path.as_ref());
    let contents = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|e| panic!("fixture not found at {}: {}", full_path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("invalid JSON in fixture {}: {}", full_path.display(), e))
}
