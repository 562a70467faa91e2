//! Angular version gate

use crate::assets::GeneratorAssets;
use crate::dependencies::manifest_name;
use crate::error::{Error, Result};
use semver::Version;

/// Assumed when the workspace does not pin `@angular/core`
pub const DEFAULT_ANGULAR_VERSION: &str = "16.0.0-next.0";

/// Oldest supported Angular release
pub const MIN_ANGULAR_VERSION: &str = "15.0.0";

/// Reject versions below [`MIN_ANGULAR_VERSION`] and return the major version.
///
/// Ordering is semver ordering, so `15.0.0-rc.1` is below the bound.
pub fn check_angular_version(installed: &Version) -> Result<u64> {
    let minimum = Version::parse(MIN_ANGULAR_VERSION)
        .map_err(|_| ngscaffold_core::Error::invalid_version(MIN_ANGULAR_VERSION))?;

    if *installed < minimum {
        return Err(Error::unsupported_angular_version(installed.to_string()));
    }
    Ok(installed.major)
}

/// Angular majors that ship both a template and a dependency manifest
pub fn supported_angular_majors() -> Vec<u64> {
    let mut majors: Vec<u64> = GeneratorAssets::iter()
        .filter_map(|path| {
            let (dir, _) = path.split_once('/')?;
            dir.strip_prefix("template-angular-v")?.parse().ok()
        })
        .filter(|major| GeneratorAssets::get(&manifest_name(*major)).is_some())
        .collect();
    majors.sort_unstable();
    majors.dedup();
    majors
}
