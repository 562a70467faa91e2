//! Installed framework version lookup
//!
//! The installed Angular version is whatever the root `package.json` pins for
//! `@angular/core`. Ranges such as `^15.2.0` or `~16.1` are coerced to a plain
//! `major.minor.patch`; an unpinned, `latest` or `next` entry falls back to
//! the caller's default.

use crate::error::{Error, Result};
use crate::package_json::{read_package_json, PACKAGE_JSON};
use crate::tree::Tree;
use regex::Regex;
use semver::Version;
use std::sync::LazyLock;
use tracing::debug;

/// Package whose version identifies the installed Angular release
pub const ANGULAR_CORE: &str = "@angular/core";

static COERCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("coerce regex is valid")
});

/// Resolve the Angular version installed in the workspace
pub fn get_installed_angular_version(tree: &dyn Tree, default_version: &str) -> Result<Version> {
    let package_json = read_package_json(tree)?;
    let declared = package_json
        .get("dependencies")
        .and_then(|deps| deps.get(ANGULAR_CORE))
        .and_then(|v| v.as_str())
        .filter(|v| !matches!(*v, "latest" | "next"));

    let raw = match declared {
        Some(version) => version,
        None => {
            debug!(
                "{} does not pin {}, assuming {}",
                PACKAGE_JSON, ANGULAR_CORE, default_version
            );
            default_version
        }
    };

    clean_or_coerce(raw).ok_or_else(|| Error::invalid_version(raw))
}

/// Parse a version exactly when possible, otherwise pull the first
/// `major[.minor[.patch]]` out of the string.
pub fn clean_or_coerce(raw: &str) -> Option<Version> {
    let trimmed = raw.trim().trim_start_matches('=').trim_start_matches('v');
    if let Ok(version) = Version::parse(trimmed) {
        return Some(version);
    }

    let caps = COERCE_RE.captures(raw)?;
    let part = |i: usize| -> Option<u64> {
        caps.get(i)
            .map(|m| m.as_str().parse().ok())
            .unwrap_or(Some(0))
    };
    Some(Version::new(part(1)?, part(2)?, part(3)?))
}
