//! Terminal output utilities

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use ngscaffold_core::{ChangeKind, FileChange};

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print one staged or written file change, e.g. `CREATE apps/demo/project.json (412 bytes)`
pub fn change(change: &FileChange) {
    let kind = change.kind.to_string();
    let label = match change.kind {
        ChangeKind::Create => style(kind).green(),
        ChangeKind::Update => style(kind).cyan(),
        ChangeKind::Delete => style(kind).red(),
    };

    match &change.content {
        Some(content) => println!("{} {} ({} bytes)", label.bold(), change.path, content.len()),
        None => println!("{} {}", label.bold(), change.path),
    }
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(spinner_style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
