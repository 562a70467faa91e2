//! Project configuration records stored in `project.json`

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Option mapping of a target or configuration
pub type TargetOptions = Map<String, Value>;

/// Kind of project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Application,
    Library,
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectType::Application => write!(f, "application"),
            ProjectType::Library => write!(f, "library"),
        }
    }
}

/// A project registered in the workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Workspace-relative project root; Nx omits it when it matches the
    /// directory holding `project.json`
    #[serde(default)]
    pub root: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub targets: BTreeMap<String, TargetConfiguration>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProjectConfiguration {
    /// Empty configuration rooted at `root`
    pub fn new(root: impl Into<String>, project_type: ProjectType) -> Self {
        Self {
            name: None,
            schema: None,
            root: root.into(),
            project_type: Some(project_type),
            source_root: None,
            targets: BTreeMap::new(),
            tags: Vec::new(),
        }
    }

    /// Look up a target by name
    pub fn target(&self, name: &str) -> Option<&TargetConfiguration> {
        self.targets.get(name)
    }
}

/// A build/serve/test/lint target
///
/// Run-commands shorthands (`"command": "..."`) carry no executor; keys this
/// record does not model are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetConfiguration {
    /// Executor identifier, e.g. `@nrwl/vite:build`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executor: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub options: TargetOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_configuration: Option<String>,

    /// Per-environment option overrides
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub configurations: BTreeMap<String, TargetOptions>,

    #[serde(flatten)]
    pub extra: TargetOptions,
}

impl TargetConfiguration {
    pub fn new(executor: impl Into<String>) -> Self {
        Self {
            executor: Some(executor.into()),
            outputs: Vec::new(),
            options: Map::new(),
            default_configuration: None,
            configurations: BTreeMap::new(),
            extra: Map::new(),
        }
    }

    pub fn with_outputs<I, S>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outputs = outputs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the options from a JSON object; anything else is ignored
    pub fn with_options(mut self, options: Value) -> Self {
        if let Value::Object(map) = options {
            self.options = map;
        }
        self
    }

    pub fn with_default_configuration(mut self, name: impl Into<String>) -> Self {
        self.default_configuration = Some(name.into());
        self
    }

    /// Add a named configuration from a JSON object
    pub fn with_configuration(mut self, name: impl Into<String>, overrides: Value) -> Self {
        let overrides = match overrides {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        self.configurations.insert(name.into(), overrides);
        self
    }

    /// Option override of a named configuration
    pub fn configuration_value(&self, configuration: &str, key: &str) -> Option<&Value> {
        self.configurations.get(configuration)?.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_builder() {
        let target = TargetConfiguration::new("@nrwl/vite:build")
            .with_outputs(["{options.outputPath}"])
            .with_options(json!({ "configFile": "vite.config.ts" }))
            .with_default_configuration("production")
            .with_configuration("production", json!({ "sourcemap": false }));

        assert_eq!(target.outputs, vec!["{options.outputPath}"]);
        assert_eq!(target.options["configFile"], "vite.config.ts");
        assert_eq!(
            target.configuration_value("production", "sourcemap"),
            Some(&json!(false))
        );
        assert_eq!(target.configuration_value("development", "sourcemap"), None);
    }

    #[test]
    fn test_serialized_field_names() {
        let mut config = ProjectConfiguration::new("apps/demo", ProjectType::Application);
        config.name = Some("demo".to_string());
        config.schema = Some("../../node_modules/nx/schemas/project-schema.json".to_string());
        config.source_root = Some("apps/demo/src".to_string());
        config.targets.insert(
            "build".to_string(),
            TargetConfiguration::new("@nrwl/vite:build").with_default_configuration("production"),
        );

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["$schema"], "../../node_modules/nx/schemas/project-schema.json");
        assert_eq!(value["projectType"], "application");
        assert_eq!(value["sourceRoot"], "apps/demo/src");
        assert_eq!(value["targets"]["build"]["defaultConfiguration"], "production");
        assert!(value["targets"]["build"].get("outputs").is_none());

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys[0], "name");
        assert_eq!(keys[1], "$schema");
    }

    #[test]
    fn test_command_target_keeps_unmodelled_keys() {
        let target: TargetConfiguration = serde_json::from_value(json!({
            "command": "echo hi",
            "dependsOn": ["build"]
        }))
        .unwrap();

        assert!(target.executor.is_none());
        assert_eq!(target.extra["command"], "echo hi");

        let value = serde_json::to_value(&target).unwrap();
        assert_eq!(value, json!({ "command": "echo hi", "dependsOn": ["build"] }));
    }
}
