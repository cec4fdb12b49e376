//! Command-line interface implementation for stempel.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for stempel.
#[derive(Parser, Debug)]
#[command(author, version, about = "stempel: Rivierstad project type presets for project scaffolding", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve project options against the organization defaults and print
    /// the merged configuration
    Plan {
        /// Path to the project options file (JSON or YAML)
        #[arg(value_name = "OPTIONS_FILE")]
        options_file: PathBuf,

        /// Directory to write sample files into (only when the merged
        /// configuration enables them)
        #[arg(long, value_name = "DIR")]
        samples_dir: Option<PathBuf>,
    },

    /// Bundle the sample templates into the generated lookup table
    BundleTemplates {
        /// Directory containing the template files
        #[arg(long, value_name = "DIR", default_value = "templates")]
        templates: PathBuf,

        /// Path of the generated artifact
        #[arg(long, value_name = "FILE", default_value = "src/template_text.gen")]
        output: PathBuf,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
