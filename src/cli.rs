//! Command-line interface implementation for gen-mq.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for gen-mq.
#[derive(Parser, Debug)]
#[command(author, version, about = "gen-mq: message queue project skeleton generator", long_about = None)]
pub struct Args {
    /// Name of the project to generate
    #[arg(short, long, value_name = "PROJECT")]
    pub name: String,

    /// Project type (posix or sysv); prompts interactively when omitted
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub pro_type: Option<String>,

    /// Path to the project configuration document
    #[arg(long, value_name = "FILE")]
    pub conf: Option<PathBuf>,

    /// Root directory of the template set
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
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
