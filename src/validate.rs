//! Repository configuration validation.
//! Inspects a fully merged configuration and produces advisory warnings when
//! security or process relevant features are disabled. Warnings never alter
//! control flow and never block generation.

use crate::merge::ProjectConfig;
use std::fmt;

/// Non-fatal configuration warning surfaced to the project maintainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The emergency deployment procedure workflow is disabled
    EmergencyProcedureDisabled,
    /// Auto-merging of dependency upgrade PRs is disabled
    AutoMergeDisabled,
    /// A publishable project kind does not publish to NPM
    NpmPublishDisabled,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Warning::EmergencyProcedureDisabled => {
                "❗️ Emergency workflow is not enabled, is this intentional?"
            }
            Warning::AutoMergeDisabled => {
                "❗️ Auto-merging of dependencies is not enabled, is this intentional?"
            }
            Warning::NpmPublishDisabled => {
                "❗️ No publishing to NPM is configured, is this intentional?"
            }
        };
        f.write_str(text)
    }
}

/// Checks the merged configuration for disabled process features.
///
/// Returns warnings in fixed declaration order: emergency procedure,
/// auto-merge, NPM publishing. The NPM check only applies to kinds that can
/// publish at all. When `enableRepositoryValidation` is off, every check is
/// skipped and the result is empty.
pub fn validate_repository(config: &ProjectConfig) -> Vec<Warning> {
    let mut warnings = Vec::new();
    if !config.enable_repository_validation {
        return warnings;
    }

    if !config.enable_emergency_procedure {
        warnings.push(Warning::EmergencyProcedureDisabled);
    }
    if !config.enable_auto_merge_dependencies {
        warnings.push(Warning::AutoMergeDisabled);
    }
    if config.kind.supports_publishing() && !config.release_to_npm {
        warnings.push(Warning::NpmPublishDisabled);
    }

    warnings
}

/// Emits each warning on the log warn channel.
pub fn report_warnings(warnings: &[Warning]) {
    for warning in warnings {
        log::warn!("{}", warning);
    }
}
