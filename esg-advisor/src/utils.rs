//! Profile loading helpers

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use esg_advisor_engine::profile::AdvisorProfile;

/// Default location for a user-supplied profile.
pub fn user_profile_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "esg-advisor", "esg-advisor")
        .map(|dirs| dirs.config_dir().join("profile.yaml"))
}

/// Load the advisor profile: an explicit path wins, then the user config
/// file if it exists, then the built-in default.
pub fn load_profile(path: Option<&Path>) -> Result<AdvisorProfile> {
    if let Some(path) = path {
        return read_profile(path);
    }
    if let Some(path) = user_profile_path() {
        if path.is_file() {
            return read_profile(&path);
        }
    }
    Ok(AdvisorProfile::default())
}

fn read_profile(path: &Path) -> Result<AdvisorProfile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile: {}", path.display()))?;
    AdvisorProfile::from_yaml(&content)
        .with_context(|| format!("Invalid profile: {}", path.display()))
}
