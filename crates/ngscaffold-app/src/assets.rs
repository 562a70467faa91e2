//! Generator assets embedded at build time: the `v<major>-package.json`
//! dependency manifests and the `template-angular-v<major>/` directories.

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/files/"]
#[prefix = ""]
pub(crate) struct GeneratorAssets;

/// Paths of every embedded file below `dir/`, relative to `dir`, sorted
pub(crate) fn files_under(dir: &str) -> Vec<String> {
    let prefix = format!("{}/", dir);
    let mut files: Vec<String> = GeneratorAssets::iter()
        .filter_map(|path| path.strip_prefix(&prefix).map(String::from))
        .collect();
    files.sort();
    files
}
