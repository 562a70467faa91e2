//! Rendering of template files into the workspace tree

use super::loader::TemplateFile;
use super::TemplateContext;
use crate::error::{Error, Result};
use ngscaffold_core::layout::join_path_fragments;
use ngscaffold_core::Tree;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use tera::Tera;
use tracing::debug;

static PATH_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([A-Za-z][A-Za-z0-9]*)__").expect("path token regex is valid"));

/// Replace every `__key__` in `path` with the value of `key`
pub fn substitute_path(path: &str, values: &Map<String, Value>) -> Result<String> {
    let mut result = String::with_capacity(path.len());
    let mut last = 0;

    for caps in PATH_TOKEN_RE.captures_iter(path) {
        let (Some(whole), Some(key)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = values
            .get(key.as_str())
            .ok_or_else(|| Error::unknown_template_token(key.as_str(), path))?;

        result.push_str(&path[last..whole.start()]);
        match value {
            Value::String(s) => result.push_str(s),
            other => result.push_str(&other.to_string()),
        }
        last = whole.end();
    }

    result.push_str(&path[last..]);
    Ok(result)
}

/// Render one file's content; non-UTF-8 content is returned unchanged
pub fn render_content(path: &str, content: &[u8], context: &tera::Context) -> Result<Vec<u8>> {
    match std::str::from_utf8(content) {
        Ok(text) => Tera::one_off(text, context, false)
            .map(String::into_bytes)
            .map_err(|e| Error::template_render(path, describe(&e))),
        Err(_) => Ok(content.to_vec()),
    }
}

/// Tera nests the useful message in the error's source chain
fn describe(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = std::error::Error::source(inner);
    }
    message
}

/// Render `files` into `target` and stage them in the tree.
///
/// Returns the staged workspace-relative paths.
pub fn generate_files(
    tree: &mut dyn Tree,
    files: &[TemplateFile],
    target: &str,
    context: &TemplateContext,
) -> Result<Vec<String>> {
    let values = context.to_map()?;
    let tera_context = context.to_tera_context()?;
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let relative = substitute_path(&file.path, &values)?;
        let destination = join_path_fragments(&[target, &relative]);
        let content = render_content(&file.path, &file.content, &tera_context)?;

        debug!("Generating {}", destination);
        tree.write(&destination, content);
        written.push(destination);
    }

    Ok(written)
}
