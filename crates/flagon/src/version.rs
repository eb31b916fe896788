//! Application version loading.

use anyhow::{Context, Result};
use semver::Version;
use std::path::Path;

/// Conventional file name an app's version is read from.
pub const VERSION_FILE: &str = "VERSION";

/// Read a semantic version from a file holding a single version string.
pub fn from_file(path: &Path) -> Result<Version> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read version file: {}", path.display()))?;
    parse(&contents).with_context(|| format!("invalid version file: {}", path.display()))
}

/// Parse a version string, tolerating surrounding whitespace and a leading
/// `v` prefix.
pub fn parse(contents: &str) -> Result<Version> {
    let trimmed = contents.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    let version = trimmed
        .parse::<Version>()
        .with_context(|| format!("failed to parse version string: {trimmed}"))?;
    Ok(version)
}
