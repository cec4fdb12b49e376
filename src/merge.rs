//! Option merging for stempel project types.
//! Combines caller-supplied options with organization defaults into the
//! complete configuration object handed to the scaffolding engine. Merging
//! performs no file or network I/O; the returned configuration is never
//! mutated afterwards.

use crate::error::{Error, Result};
use crate::options::{ProjectKind, ProjectOptions, WorkflowStep};
use crate::statics;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

/// Fully resolved project configuration.
///
/// Every field the scaffolding engine needs is present; nothing is optional
/// except `repository` and `package_name`, which stay unset only for
/// non-publishing projects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub name: String,
    pub kind: ProjectKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    pub default_release_branch: String,
    pub license: String,
    /// Scoped NPM package name, derived from the resolved project name.
    /// Only set when the project publishes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    pub deps: Vec<String>,
    pub gitignore: Vec<String>,
    pub scripts: IndexMap<String, String>,
    pub workflow_bootstrap_steps: Vec<WorkflowStep>,
    pub post_build_steps: Vec<WorkflowStep>,
    pub auto_merge_branches: Vec<String>,
    /// Label that marks a PR as eligible for the auto-merge workflow
    pub auto_merge_label: String,
    /// PR title types accepted by the pull-request-lint workflow
    pub pr_lint_labels: Vec<String>,
    pub enable_emergency_procedure: bool,
    pub enable_auto_merge_dependencies: bool,
    pub enable_repository_validation: bool,
    pub release_to_npm: bool,
    pub enable_cfn_lint: bool,
    pub make_sample_files: bool,
}

/// Concatenates organization defaults with caller additions, defaults first.
fn combine<T: Clone>(defaults: &[T], caller: &[T]) -> Vec<T> {
    let mut result = defaults.to_vec();
    result.extend_from_slice(caller);
    result
}

/// Like `combine`, de-duplicated by exact match. The engine requires these
/// lists to be unique; first occurrence order is preserved.
fn combine_unique(defaults: &[String], caller: &[String]) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for entry in defaults.iter().chain(caller.iter()) {
        if !result.contains(entry) {
            result.push(entry.clone());
        }
    }
    result
}

/// Merges caller options with organization defaults.
///
/// Rules, applied independently per field family:
/// - scalar toggles: caller value wins if present, documented default otherwise
/// - list fields: defaults-first concatenation (`deps`, `gitignore` and
///   `autoMergeBranches` de-duplicated; workflow step lists are not)
/// - scripts: shallow merge, caller keys override same-named defaults
/// - derived fields (`packageName`, cfn-lint steps) are resolved after the
///   fields they depend on
///
/// # Errors
/// * `Error::Config` if the project name is empty
/// * `Error::MissingRepository` if publishing resolves to enabled while no
///   repository reference was supplied
pub fn merge_options(options: ProjectOptions) -> Result<ProjectConfig> {
    if options.name.is_empty() {
        return Err(Error::Config("Project name must not be empty".to_string()));
    }

    let kind = options.kind;
    debug!("Resolving defaults for '{}' ({:?})", options.name, kind);

    // Scalar toggles: caller wins, otherwise the organization default.
    let enable_emergency_procedure = options.enable_emergency_procedure.unwrap_or(true);
    let enable_auto_merge_dependencies =
        options.enable_auto_merge_dependencies.unwrap_or(true);
    let enable_repository_validation =
        options.enable_repository_validation.unwrap_or(true);
    let enable_cfn_lint =
        kind == ProjectKind::CdkApp && options.enable_cfn_lint.unwrap_or(true);
    let make_sample_files = options.make_sample_files.unwrap_or(false);

    // Publishing defaults to enabled for every kind that supports it; a
    // deployable app structurally cannot publish, whatever the caller says.
    let release_to_npm = if kind.supports_publishing() {
        options.release_to_npm.unwrap_or(true)
    } else {
        false
    };

    // Publishing without a repository reference must fail the whole merge,
    // generation never proceeds with missing identity information.
    if release_to_npm && options.repository.is_none() {
        return Err(Error::MissingRepository { name: options.name });
    }

    let mut dep_defaults: Vec<String> = Vec::new();
    if kind.is_cdk() {
        dep_defaults.push(statics::ORGANIZATION_CONSTRUCTS.to_string());
    }
    let deps = combine_unique(&dep_defaults, &options.deps);

    let mut ignore_defaults: Vec<String> =
        statics::DEFAULT_GITIGNORE.iter().map(|s| s.to_string()).collect();
    if kind == ProjectKind::CdkApp {
        ignore_defaults.extend(statics::CDK_APP_GITIGNORE.iter().map(|s| s.to_string()));
    }
    let gitignore = combine_unique(&ignore_defaults, &options.gitignore);

    // Shallow merge: defaults inserted first, caller entries override
    // same-named keys and append the rest in declaration order.
    let mut scripts: IndexMap<String, String> = IndexMap::new();
    if kind == ProjectKind::CdkApp {
        scripts.insert("lint".to_string(), statics::CFN_LINT_SCRIPT.to_string());
    }
    for (name, command) in options.scripts {
        scripts.insert(name, command);
    }

    let mut bootstrap_defaults: Vec<WorkflowStep> = Vec::new();
    let mut post_build_defaults: Vec<WorkflowStep> = Vec::new();
    if enable_cfn_lint {
        bootstrap_defaults
            .push(WorkflowStep::uses("Setup cfn-lint", statics::CFN_LINT_ACTION));
        post_build_defaults
            .push(WorkflowStep::run("CloudFormation lint", statics::CFN_LINT_COMMAND));
    }
    let workflow_bootstrap_steps =
        combine(&bootstrap_defaults, &options.workflow_bootstrap_steps);
    let post_build_steps = combine(&post_build_defaults, &options.post_build_steps);

    let branch_defaults = vec![statics::DEFAULT_AUTO_MERGE_BRANCH.to_string()];
    let auto_merge_branches = combine_unique(&branch_defaults, &options.auto_merge_branches);

    // Derived after name and publishing are resolved.
    let package_name = release_to_npm
        .then(|| format!("{}/{}", statics::ORGANIZATION_SCOPE, options.name));

    Ok(ProjectConfig {
        name: options.name,
        kind,
        repository: options.repository,
        default_release_branch: options
            .default_release_branch
            .unwrap_or_else(|| statics::DEFAULT_RELEASE_BRANCH.to_string()),
        license: statics::DEFAULT_LICENSE.to_string(),
        package_name,
        deps,
        gitignore,
        scripts,
        workflow_bootstrap_steps,
        post_build_steps,
        auto_merge_branches,
        auto_merge_label: statics::AUTO_MERGE_LABEL.to_string(),
        pr_lint_labels: statics::PR_LINT_LABELS.iter().map(|s| s.to_string()).collect(),
        enable_emergency_procedure,
        enable_auto_merge_dependencies,
        enable_repository_validation,
        release_to_npm,
        enable_cfn_lint,
        make_sample_files,
    })
}
