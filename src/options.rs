//! Caller-facing option schema for stempel project types.
//! This module defines the partial configuration a repository supplies and
//! the loader that reads it from a JSON or YAML options file.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One of the fixed generation presets.
///
/// Each kind carries different default configuration; dispatching happens on
/// this value, the scaffolding engine is invoked once with the fully resolved
/// configuration regardless of kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    /// Deployable AWS CDK application
    #[default]
    CdkApp,
    /// Publishable AWS CDK construct library
    CdkLib,
    /// Publishable plain TypeScript package
    TsPackage,
    /// Publishable multi-language (jsii) library
    Jsii,
}

impl ProjectKind {
    /// Whether repositories of this kind can publish to NPM at all.
    /// A deployable app structurally cannot publish; every library kind can.
    pub fn supports_publishing(&self) -> bool {
        !matches!(self, ProjectKind::CdkApp)
    }

    /// Whether this kind generates CDK infrastructure code.
    pub fn is_cdk(&self) -> bool {
        matches!(self, ProjectKind::CdkApp | ProjectKind::CdkLib)
    }
}

/// A single step in a generated CI workflow.
///
/// Carries a `name` and either a `uses` (external action reference) or a
/// `run` (shell command). Step lists are always combined, never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<String>,
}

impl WorkflowStep {
    /// Step backed by an external action reference.
    pub fn uses(name: &str, action: &str) -> Self {
        Self { name: name.to_string(), uses: Some(action.to_string()), run: None }
    }

    /// Step backed by a shell command.
    pub fn run(name: &str, command: &str) -> Self {
        Self { name: name.to_string(), uses: None, run: Some(command.to_string()) }
    }
}

/// Caller-supplied project options. Every field except `name` and `kind` may
/// be absent; the option merger fills the gaps with organization defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ProjectOptions {
    /// Project name, also used for placeholder substitution in sample files
    #[serde(default)]
    pub name: String,

    /// Generation preset to resolve defaults from
    #[serde(default)]
    pub kind: ProjectKind,

    /// Source-control repository reference (required when publishing)
    #[serde(default)]
    pub repository: Option<String>,

    /// Branch releases are cut from
    #[serde(default)]
    pub default_release_branch: Option<String>,

    /// Runtime dependencies added on top of the organization-mandated ones
    #[serde(default)]
    pub deps: Vec<String>,

    /// Ignore patterns added on top of the organization defaults
    #[serde(default)]
    pub gitignore: Vec<String>,

    /// Script name to command mapping; caller keys override defaults
    #[serde(default)]
    pub scripts: IndexMap<String, String>,

    /// Steps appended to the workflow bootstrap sequence
    #[serde(default)]
    pub workflow_bootstrap_steps: Vec<WorkflowStep>,

    /// Steps appended after the build step
    #[serde(default)]
    pub post_build_steps: Vec<WorkflowStep>,

    /// Branches the dependency auto-merge workflow targets
    #[serde(default)]
    pub auto_merge_branches: Vec<String>,

    /// Enable the emergency deployment procedure workflow
    #[serde(default)]
    pub enable_emergency_procedure: Option<bool>,

    /// Enable auto-merging of dependency upgrade PRs
    #[serde(default)]
    pub enable_auto_merge_dependencies: Option<bool>,

    /// Master switch for the repository configuration validation warnings
    #[serde(default)]
    pub enable_repository_validation: Option<bool>,

    /// Publish releases to NPM (publishable kinds only)
    #[serde(default)]
    pub release_to_npm: Option<bool>,

    /// Enable cfn-lint in the github build workflow (CDK apps only)
    #[serde(default)]
    pub enable_cfn_lint: Option<bool>,

    /// Whether to create sample files. Defaults to false to make sure older
    /// repos have no unwanted files by default.
    #[serde(default)]
    pub make_sample_files: Option<bool>,
}

/// Loads project options from a JSON or YAML file.
///
/// # Arguments
/// * `path` - Path to the options file
///
/// # Returns
/// * `Result<ProjectOptions>` - Parsed caller options
///
/// # Errors
/// * `Error::Io` if the file cannot be read
/// * `Error::Config` if the content is neither valid JSON nor valid YAML,
///   or the project name is empty
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<ProjectOptions> {
    let path = path.as_ref();
    debug!("Loading project options from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;

    // Try parsing as JSON first, fall back to YAML
    let options: ProjectOptions = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid options format: {}", e)))?,
    };

    if options.name.is_empty() {
        return Err(Error::Config("Project name must not be empty".to_string()));
    }

    Ok(options)
}
