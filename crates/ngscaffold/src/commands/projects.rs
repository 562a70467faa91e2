//! Projects command: list the workspace registry

use crate::cli::ProjectsArgs;
use crate::commands::GlobalArgs;
use crate::output;
use anyhow::{Context, Result};
use ngscaffold_core::registry::get_projects;
use ngscaffold_core::types::ProjectConfiguration;
use ngscaffold_core::FsTree;
use tabled::{settings::Style as TableStyle, Table, Tabled};

#[derive(Tabled, Debug, PartialEq, Eq)]
struct ProjectRow {
    name: String,
    #[tabled(rename = "type")]
    project_type: String,
    root: String,
    targets: String,
    tags: String,
}

impl ProjectRow {
    fn new(name: &str, config: &ProjectConfiguration) -> Self {
        Self {
            name: name.to_string(),
            project_type: config
                .project_type
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string()),
            root: config.root.clone(),
            targets: config.targets.keys().cloned().collect::<Vec<_>>().join(", "),
            tags: config.tags.join(", "),
        }
    }
}

pub fn run(args: ProjectsArgs, global: &GlobalArgs) -> Result<()> {
    let tree = FsTree::new(global.workspace_root()?);
    let projects = get_projects(&tree).context("Failed to read project registry")?;

    if args.json {
        let json = serde_json::to_string_pretty(&projects)
            .context("Failed to serialize projects to JSON")?;
        println!("{}", json);
    } else if projects.is_empty() {
        output::warning("No projects found in the workspace");
    } else {
        let rows: Vec<ProjectRow> = projects
            .iter()
            .map(|(name, config)| ProjectRow::new(name, config))
            .collect();
        let table = Table::new(&rows).with(TableStyle::rounded()).to_string();
        println!("{}", table);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ngscaffold_core::types::{ProjectType, TargetConfiguration};

    #[test]
    fn test_project_row() {
        let mut config = ProjectConfiguration::new("apps/demo", ProjectType::Application);
        config.tags = vec!["scope:web".to_string(), "type:app".to_string()];
        for target in ["build", "lint"] {
            config
                .targets
                .insert(target.to_string(), TargetConfiguration::new("x:y"));
        }

        let row = ProjectRow::new("demo", &config);
        assert_eq!(row.project_type, "application");
        assert_eq!(row.targets, "build, lint");
        assert_eq!(row.tags, "scope:web, type:app");
    }
}
