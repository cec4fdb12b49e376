//! Sample file generation for freshly scaffolded CDK apps.
//! The template text is embedded at build time from the bundled artifact
//! (regenerated with `stempel bundle-templates`), so the sample files are
//! always available and versioned with this crate.

use crate::bundle::unescape_template;
use crate::error::{Error, Result};
use crate::merge::ProjectConfig;
use crate::statics::PROJECT_NAME_PLACEHOLDER;
use indexmap::IndexMap;
use std::path::PathBuf;

/// Bundled template table, produced by the template bundler
const BUNDLED_TEMPLATES: &str = include_str!("template_text.gen");

/// Template entry name and the path it is written to in a generated project.
/// `Parameters` is bundled but not emitted as a sample file.
const SAMPLE_TARGETS: [(&str, &str); 6] = [
    ("Main", "src/index.ts"),
    ("Statics", "src/Statics.ts"),
    ("Configuration", "src/Configuration.ts"),
    ("PipelineStack", "src/PipelineStack.ts"),
    ("MainStage", "src/MainStage.ts"),
    ("MainStack", "src/MainStack.ts"),
];

/// One generated sample file: target path plus verbatim contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Parses a bundled artifact back into an ordered name to text mapping,
/// reversing the two escape transforms applied by the bundler.
///
/// # Errors
/// * `Error::Bundle` if an entry is malformed, a template literal is not
///   terminated, or the artifact contains no entries at all
pub fn parse_bundle(text: &str) -> Result<IndexMap<String, String>> {
    let mut entries = IndexMap::new();
    let mut rest = text;

    while let Some(start) = rest.find("export const ") {
        rest = &rest[start + "export const ".len()..];
        let assign = rest
            .find(" = `")
            .ok_or_else(|| Error::Bundle("Malformed bundle entry".to_string()))?;
        let name = rest[..assign].to_string();
        rest = &rest[assign + 4..];

        // The closing delimiter is the first backtick without a preceding
        // escape backslash. Both are ASCII, byte scanning is safe.
        let bytes = rest.as_bytes();
        let mut end = None;
        for (i, byte) in bytes.iter().enumerate() {
            if *byte == b'`' && (i == 0 || bytes[i - 1] != b'\\') {
                end = Some(i);
                break;
            }
        }
        let end = end.ok_or_else(|| {
            Error::Bundle(format!("Unterminated template literal for '{}'", name))
        })?;

        entries.insert(name, unescape_template(&rest[..end]));
        rest = &rest[end + 1..];
    }

    if entries.is_empty() {
        return Err(Error::Bundle("No template entries found".to_string()));
    }
    Ok(entries)
}

/// Produces the sample files for a merged configuration.
///
/// Returns an empty list unless `makeSampleFiles` is enabled. Contents are
/// copied verbatim from the bundled templates; the only substitution is the
/// project name placeholder in the Statics file.
pub fn sample_files(config: &ProjectConfig) -> Result<Vec<SampleFile>> {
    if !config.make_sample_files {
        return Ok(Vec::new());
    }

    let templates = parse_bundle(BUNDLED_TEMPLATES)?;
    let mut files = Vec::new();
    for (template, target) in SAMPLE_TARGETS {
        let contents = templates.get(template).ok_or_else(|| {
            Error::Bundle(format!("Template '{}' missing from bundle", template))
        })?;
        let contents = if template == "Statics" {
            contents.replace(PROJECT_NAME_PLACEHOLDER, &config.name)
        } else {
            contents.clone()
        };
        files.push(SampleFile { path: PathBuf::from(target), contents });
    }
    Ok(files)
}
