//! stempel defines the Rivierstad project type presets for the external
//! project-scaffolding engine. It merges caller-supplied options with
//! organization defaults, validates the result, and bundles the sample file
//! templates shipped with new CDK apps.

/// Command-line interface module for the stempel application
pub mod cli;

/// Error types and handling for the stempel application
pub mod error;

/// Logger initialization
pub mod logger;

/// Organization-wide constants (scope, license, mandated ignore entries)
pub mod statics;

/// Caller-facing option schema: project kinds, workflow steps, options file
pub mod options;

/// Option merging: caller options + organization defaults -> configuration
pub mod merge;

/// Advisory validation of a merged repository configuration
pub mod validate;

/// Build-time bundling of template files into a generated lookup table
pub mod bundle;

/// Sample file generation from the bundled templates
pub mod sample;
