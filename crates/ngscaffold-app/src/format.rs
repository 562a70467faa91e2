//! Formatting pass over pending writes
//!
//! JSON files are always re-indented. Everything else prettier understands
//! is piped through it when a prettier binary can be found. Failures are
//! logged and skipped; formatting never fails a generator run.

use camino::Utf8PathBuf;
use ngscaffold_core::{ChangeKind, Tree};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Extensions handed to prettier
const PRETTIER_EXTENSIONS: &[&str] = &[
    "ts", "js", "mjs", "html", "css", "scss", "less", "md", "yaml", "yml",
];

/// Format every staged write in the tree
pub async fn format_files(tree: &mut dyn Tree) {
    let prettier = find_prettier(tree);
    match &prettier {
        Some(path) => debug!("Formatting with {}", path),
        None => debug!("prettier not found, only JSON files will be formatted"),
    }

    let mut formatted = 0usize;
    for change in tree.list_changes() {
        if change.kind == ChangeKind::Delete {
            continue;
        }
        let Some(content) = change.content else {
            continue;
        };

        let result = if change.path.ends_with(".json") {
            format_json(&change.path, &content)
        } else if let Some(prettier) = prettier.as_ref().filter(|_| supports(&change.path)) {
            run_prettier(prettier, tree.root().as_str(), &change.path, &content).await
        } else {
            None
        };

        if let Some(output) = result.filter(|output| *output != content) {
            tree.write(&change.path, output);
            formatted += 1;
        }
    }

    info!("Formatted {} files", formatted);
}

fn find_prettier(tree: &dyn Tree) -> Option<Utf8PathBuf> {
    let local = tree.root().join("node_modules/.bin/prettier");
    if local.is_file() {
        return Some(local);
    }
    which::which("prettier")
        .ok()
        .and_then(|path| Utf8PathBuf::from_path_buf(path).ok())
}

fn supports(path: &str) -> bool {
    path.rsplit_once('.')
        .is_some_and(|(_, ext)| PRETTIER_EXTENSIONS.contains(&ext))
}

/// Two-space indentation with a trailing newline, key order kept
fn format_json(path: &str, content: &[u8]) -> Option<Vec<u8>> {
    let value: serde_json::Value = match serde_json::from_slice(content) {
        Ok(value) => value,
        Err(e) => {
            warn!("Skipping formatting of {}: {}", path, e);
            return None;
        }
    };
    let mut output = serde_json::to_string_pretty(&value).ok()?;
    output.push('\n');
    Some(output.into_bytes())
}

async fn run_prettier(
    prettier: &Utf8PathBuf,
    cwd: &str,
    path: &str,
    content: &[u8],
) -> Option<Vec<u8>> {
    let mut child = match Command::new(prettier)
        .args(["--stdin-filepath", path])
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            warn!("Failed to start prettier for {}: {}", path, e);
            return None;
        }
    };

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(content).await {
            warn!("Failed to pipe {} to prettier: {}", path, e);
            return None;
        }
    }

    match child.wait_with_output().await {
        Ok(output) if output.status.success() => Some(output.stdout),
        Ok(output) => {
            warn!(
                "prettier could not format {}: {}",
                path,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            None
        }
        Err(e) => {
            warn!("prettier failed on {}: {}", path, e);
            None
        }
    }
}
