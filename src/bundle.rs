//! Build-time template bundling.
//! Reads every template file from a source directory and emits one generated
//! artifact mapping template name to its escaped literal text. Runs offline,
//! before packaging; the sample file feature reads the result back at
//! configuration time.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Suffix a file must carry to be picked up by the bundler
pub const TEMPLATE_SUFFIX: &str = ".ts";

/// First line of the generated artifact
pub const GENERATED_NOTICE: &str = "// Note this file is auto-generated";

/// Escapes the two character classes that would break the generated literal:
/// the backtick delimiter, then the `${` substitution marker. The two
/// patterns do not overlap, so the replacement order is free but fixed here.
pub fn escape_template(content: &str) -> String {
    content.replace('`', "\\`").replace("${", "\\${")
}

/// Reverses [`escape_template`]. Applied when reading bundled entries back.
pub fn unescape_template(content: &str) -> String {
    content.replace("\\${", "${").replace("\\`", "`")
}

/// Bundles every template file under `source_dir` into `output_file`.
///
/// Candidate files are selected by the `.ts` suffix only (no recursion, no
/// content filtering) and processed in file name order. All content is read
/// and escaped before anything is written, so a failing read never leaves a
/// partial artifact behind. The output is written once with truncate
/// semantics, overwriting any previous artifact.
///
/// # Errors
/// * `Error::Io` if the source directory is missing or unreadable, a
///   template cannot be read, or the output cannot be written
/// * `Error::Bundle` if a file name is not valid UTF-8
pub fn bundle_templates<S: AsRef<Path>, D: AsRef<Path>>(
    source_dir: S,
    output_file: D,
) -> Result<()> {
    let source_dir = source_dir.as_ref();

    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(source_dir).map_err(Error::Io)? {
        let entry = entry.map_err(Error::Io)?;
        let file_name = entry.file_name().into_string().map_err(|name| {
            Error::Bundle(format!("Invalid template file name: {:?}", name))
        })?;
        if file_name.ends_with(TEMPLATE_SUFFIX) {
            names.push(file_name);
        }
    }
    // read_dir order is platform-dependent; sort for a deterministic bundle
    names.sort();

    let mut text = vec![GENERATED_NOTICE.to_string()];
    for file_name in &names {
        debug!("Bundling template {}", file_name);
        let content = fs::read_to_string(source_dir.join(file_name)).map_err(Error::Io)?;
        // Strip the suffix exactly once; enumeration guarantees it is there.
        let name = file_name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(file_name.as_str());
        text.push(format!("export const {} = `{}`", name, escape_template(&content)));
    }

    fs::write(output_file.as_ref(), text.join("\n")).map_err(Error::Io)?;
    debug!(
        "Bundled {} templates into {}",
        names.len(),
        output_file.as_ref().display()
    );
    Ok(())
}
