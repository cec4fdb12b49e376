//! stempel's main application entry point.
//! Handles command-line argument parsing and coordinates option merging,
//! repository validation and template bundling.

use std::path::Path;

use stempel::{
    bundle::bundle_templates,
    cli::{get_args, Args, Command},
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    merge::merge_options,
    options::load_options,
    sample::sample_files,
    validate::{report_warnings, validate_repository},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        std::fs::create_dir_all(parent).map_err(Error::Io)?;
    }
    std::fs::write(dest_path, content).map_err(Error::Io)
}

/// Main application logic execution.
///
/// # Flow (plan)
/// 1. Loads caller options from the options file
/// 2. Merges them with the organization defaults
/// 3. Validates the merged configuration and logs advisory warnings
/// 4. Prints the merged configuration as JSON on stdout
/// 5. Writes sample files when requested and enabled
fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Plan { options_file, samples_dir } => {
            let options = load_options(&options_file)?;
            let config = merge_options(options)?;

            let warnings = validate_repository(&config);
            report_warnings(&warnings);

            let rendered = serde_json::to_string_pretty(&config)
                .map_err(|e| Error::Config(e.to_string()))?;
            println!("{}", rendered);

            if let Some(samples_dir) = samples_dir {
                for file in sample_files(&config)? {
                    let target = samples_dir.join(&file.path);
                    write_file(&file.contents, &target)?;
                    log::info!("Created sample file {}", target.display());
                }
            }
            Ok(())
        }
        Command::BundleTemplates { templates, output } => {
            bundle_templates(&templates, &output)?;
            log::info!("Wrote template bundle to {}", output.display());
            Ok(())
        }
    }
}
