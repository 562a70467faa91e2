//! App command: generate an Analog application

use crate::cli::AppArgs;
use crate::commands::GlobalArgs;
use crate::output;
use anyhow::{Context, Result};
use dialoguer::Select;
use ngscaffold_app::{generate_application, AppGeneratorOptions, GeneratorSettings};
use ngscaffold_core::types::{GeneratorDefaults, Style};
use ngscaffold_core::{FsTree, Tree};
use tracing::debug;

pub async fn run(args: AppArgs, global: &GlobalArgs) -> Result<()> {
    let root = global.workspace_root()?;
    let config = global.load_config()?;
    let defaults = &config.generator;

    let style = match args.style {
        Some(style) => style,
        None if args.interactive => select_style(defaults.style)?,
        None => defaults.style,
    };
    let options = build_options(&args, defaults, style);
    debug!("Generator options: {:?}", options);

    output::header(&format!("Generating application '{}'", args.name));

    let mut tree = FsTree::new(root);
    let outcome = generate_application(&mut tree, &options, &GeneratorSettings::from(defaults))
        .await
        .context("Failed to generate application")?;

    let changes = if args.dry_run {
        tree.list_changes()
    } else {
        tree.commit().context("Failed to write generated files")?
    };
    for change in &changes {
        output::change(change);
    }

    println!();
    output::kv("Project", &outcome.project_name);
    output::kv("Root", &outcome.project_root);
    output::kv("Angular", &format!("v{}", outcome.angular_major));

    if args.dry_run {
        output::warning("Dry run: no files were written");
        return Ok(());
    }

    if !outcome.tasks.is_empty() {
        let descriptions: Vec<String> = outcome
            .tasks
            .tasks()
            .iter()
            .map(|task| task.description())
            .collect();
        let spinner = output::spinner(&format!("Running {}", descriptions.join(", ")));
        let result = outcome.tasks.run_in_serial().await;
        spinner.finish_and_clear();
        result.context("Failed to install packages")?;
        output::success("Packages installed");
    } else if options.skip_install {
        output::info("Skipped package installation");
    }

    output::success(&format!("Created application {}", outcome.project_name));
    Ok(())
}

/// Combine CLI flags with configured defaults; flags win
fn build_options(args: &AppArgs, defaults: &GeneratorDefaults, style: Style) -> AppGeneratorOptions {
    let mut options = AppGeneratorOptions::new(&args.name)
        .with_style(style)
        .with_routing(defaults.routing && !args.no_routing)
        .with_skip_format(args.skip_format || defaults.skip_format)
        .with_skip_install(args.skip_install || defaults.skip_install || args.dry_run);

    if let Some(directory) = &args.directory {
        options = options.with_directory(directory);
    }
    if let Some(tags) = &args.tags {
        options = options.with_tags(tags);
    }
    options
}

fn select_style(default: Style) -> Result<Style> {
    let items: Vec<String> = Style::ALL.iter().map(|s| s.to_string()).collect();
    let default_index = Style::ALL.iter().position(|s| *s == default).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Which stylesheet format would you like to use?")
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(Style::ALL[selection])
}
