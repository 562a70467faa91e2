//! Project configuration of a generated application

use crate::error::Result;
use crate::options::NormalizedOptions;
use ngscaffold_core::layout::join_path_fragments;
use ngscaffold_core::registry::add_project_configuration;
use ngscaffold_core::types::{ProjectConfiguration, ProjectType, TargetConfiguration};
use ngscaffold_core::Tree;
use serde_json::json;

/// Build the `project.json` record with every target of the application
pub fn build_project_configuration(options: &NormalizedOptions, port: u16) -> ProjectConfiguration {
    let name = options.project_name.as_str();
    let root = options.project_root.as_str();
    let dist = format!("dist/apps/{}", name);
    let in_root = |path: &str| join_path_fragments(&[root, path]);

    let mut config = ProjectConfiguration::new(root, ProjectType::Application);
    config.source_root = Some(in_root("src"));
    config.tags = options.parsed_tags.clone();

    let targets = [
        (
            "build",
            TargetConfiguration::new("@nrwl/vite:build")
                .with_outputs([
                    "{options.outputPath}".to_string(),
                    format!("{}/.nitro", dist),
                    format!("{}/ssr", dist),
                    format!("{}/analog", dist),
                ])
                .with_options(json!({
                    "configFile": "vite.config.ts",
                    "outputPath": format!("{}/client", dist),
                }))
                .with_default_configuration("production")
                .with_configuration("development", json!({ "mode": "development" }))
                .with_configuration(
                    "production",
                    json!({ "sourcemap": false, "mode": "production" }),
                ),
        ),
        (
            "serve",
            TargetConfiguration::new("@nrwl/vite:dev-server")
                .with_default_configuration("development")
                .with_options(json!({
                    "buildTarget": format!("{}:build", name),
                    "port": port,
                }))
                .with_configuration(
                    "development",
                    json!({ "buildTarget": format!("{}:build:development", name), "hmr": true }),
                )
                .with_configuration(
                    "production",
                    json!({ "buildTarget": format!("{}:build:production", name) }),
                ),
        ),
        (
            "build-legacy",
            TargetConfiguration::new("@angular-devkit/build-angular:browser")
                .with_outputs(["{options.outputPath}"])
                .with_options(json!({
                    "outputPath": dist,
                    "index": in_root("src/index.html"),
                    "main": in_root("src/main.ts"),
                    "polyfills": ["zone.js"],
                    "tsConfig": in_root("tsconfig.app.json"),
                    "assets": [in_root("src/favicon.ico"), in_root("src/assets")],
                    "styles": [in_root(&format!("src/styles.{}", options.options.style.extension()))],
                    "scripts": [],
                }))
                .with_configuration(
                    "production",
                    json!({
                        "budgets": [
                            { "type": "initial", "maximumWarning": "500kb", "maximumError": "1mb" },
                            { "type": "anyComponentStyle", "maximumWarning": "2kb", "maximumError": "4kb" },
                        ],
                        "outputHashing": "all",
                    }),
                )
                .with_configuration(
                    "development",
                    json!({
                        "buildOptimizer": false,
                        "optimization": false,
                        "vendorChunk": true,
                        "extractLicenses": false,
                        "sourceMap": true,
                        "namedChunks": true,
                    }),
                )
                .with_default_configuration("production"),
        ),
        (
            "serve-legacy",
            TargetConfiguration::new("@angular-devkit/build-angular:dev-server")
                .with_configuration(
                    "production",
                    json!({ "browserTarget": format!("{}:build-legacy:production", name) }),
                )
                .with_configuration(
                    "development",
                    json!({ "browserTarget": format!("{}:build-legacy:development", name) }),
                )
                .with_default_configuration("development"),
        ),
        (
            "extract-i18n",
            TargetConfiguration::new("@angular-devkit/build-angular:extract-i18n")
                .with_options(json!({ "browserTarget": format!("{}:build-legacy", name) })),
        ),
        (
            "lint",
            TargetConfiguration::new("@nrwl/linter:eslint")
                .with_outputs(["{options.outputFile}"])
                .with_options(json!({
                    "lintFilePatterns": [in_root("**/*.ts"), in_root("**/*.html")],
                })),
        ),
        (
            "test",
            TargetConfiguration::new("@nrwl/jest:jest")
                .with_outputs(["{workspaceRoot}/coverage/{projectRoot}"])
                .with_options(json!({
                    "jestConfig": in_root("jest.config.ts"),
                    "passWithNoTests": true,
                }))
                .with_configuration("ci", json!({ "ci": true, "codeCoverage": true })),
        ),
    ];

    for (target, configuration) in targets {
        config.targets.insert(target.to_string(), configuration);
    }
    config
}

/// Register the application under its normalized project name
pub fn register_project(tree: &mut dyn Tree, options: &NormalizedOptions, port: u16) -> Result<()> {
    let config = build_project_configuration(options, port);
    add_project_configuration(tree, &options.project_name, &config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::AppGeneratorOptions;
    use ngscaffold_core::types::Style;
    use serde_json::Value;

    fn normalized(name: &str, root: &str) -> NormalizedOptions {
        NormalizedOptions {
            options: AppGeneratorOptions::new(name)
                .with_tags("scope:web")
                .with_style(Style::Scss),
            project_name: name.to_string(),
            project_root: root.to_string(),
            project_directory: name.to_string(),
            parsed_tags: vec!["scope:web".to_string()],
        }
    }

    #[test]
    fn test_all_targets_present() {
        let config = build_project_configuration(&normalized("demo", "apps/demo"), 4200);
        let names: Vec<&String> = config.targets.keys().collect();
        assert_eq!(
            names,
            vec!["build", "build-legacy", "extract-i18n", "lint", "serve", "serve-legacy", "test"]
        );
        assert_eq!(config.source_root.as_deref(), Some("apps/demo/src"));
        assert_eq!(config.tags, vec!["scope:web"]);
    }

    #[test]
    fn test_build_target() {
        let config = build_project_configuration(&normalized("demo", "apps/demo"), 4200);
        let build = config.target("build").unwrap();

        assert_eq!(build.executor.as_deref(), Some("@nrwl/vite:build"));
        assert_eq!(build.options["outputPath"], "dist/apps/demo/client");
        assert_eq!(build.outputs[1], "dist/apps/demo/.nitro");
        assert_eq!(build.configuration_value("production", "sourcemap"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_serve_uses_port() {
        let config = build_project_configuration(&normalized("demo", "apps/demo"), 4300);
        let serve = config.target("serve").unwrap();
        assert_eq!(serve.options["port"], 4300);
        assert_eq!(serve.options["buildTarget"], "demo:build");
        assert_eq!(
            serve.configuration_value("development", "buildTarget"),
            Some(&Value::from("demo:build:development"))
        );
    }

    #[test]
    fn test_legacy_paths_follow_project_root() {
        let config =
            build_project_configuration(&normalized("clients-web", "apps/clients/web"), 4200);
        let legacy = config.target("build-legacy").unwrap();

        assert_eq!(legacy.options["outputPath"], "dist/apps/clients-web");
        assert_eq!(legacy.options["main"], "apps/clients/web/src/main.ts");
        assert_eq!(legacy.options["styles"][0], "apps/clients/web/src/styles.scss");

        let serve_legacy = config.target("serve-legacy").unwrap();
        assert_eq!(
            serve_legacy.configuration_value("production", "browserTarget"),
            Some(&Value::from("clients-web:build-legacy:production"))
        );

        let lint = config.target("lint").unwrap();
        assert_eq!(lint.options["lintFilePatterns"][0], "apps/clients/web/**/*.ts");
    }
}
