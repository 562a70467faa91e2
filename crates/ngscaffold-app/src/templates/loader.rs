//! Lookup of embedded template directories

use crate::assets::{files_under, GeneratorAssets};
use crate::error::{Error, Result};
use tracing::debug;

/// One file of a template directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the template directory, tokens unexpanded
    pub path: String,
    pub content: Vec<u8>,
}

/// Embedded directory name for a major version
pub fn template_dir_name(major: u64) -> String {
    format!("template-angular-v{}", major)
}

/// Every file of the template shipped for `major`, sorted by path
pub fn load_template(major: u64) -> Result<Vec<TemplateFile>> {
    let dir = template_dir_name(major);
    let paths = files_under(&dir);
    if paths.is_empty() {
        return Err(Error::template_not_found(major));
    }

    debug!("Template {} has {} files", dir, paths.len());
    paths
        .into_iter()
        .map(|path| {
            let file = GeneratorAssets::get(&format!("{}/{}", dir, path))
                .ok_or_else(|| Error::template_not_found(major))?;
            Ok(TemplateFile {
                path,
                content: file.data.into_owned(),
            })
        })
        .collect()
}
