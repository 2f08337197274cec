//! gen-mq's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration loading and
//! coordinates the generation pipeline.

use std::path::PathBuf;

use gen_mq::{
    cli::{get_args, Args},
    config::load_config,
    constants::{DEFAULT_CONFIG, DEFAULT_TEMPLATE_DIR},
    error::{default_error_handler, Error, Result},
    generator::Generator,
    logger::init_logger,
    prompt::DialoguerPrompter,
    renderer::PlaceholderRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads and validates the project configuration
/// 2. Resolves the project type, prompting interactively when not given
/// 3. Runs the read → substitute → write pipeline
/// 4. Converts the boolean generation status into the process exit status
fn run(args: Args) -> Result<()> {
    let config_path = args.conf.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let template_root =
        args.template_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR));
    let output_root = std::env::current_dir().map_err(Error::IoError)?;

    let config = load_config(&config_path)?;
    let generator = Generator::new(
        config,
        template_root,
        output_root,
        Box::new(PlaceholderRenderer::new()),
    );

    let pro_type = match args.pro_type {
        Some(pro_type) => Some(pro_type),
        None => generator.select_pro_type(&DialoguerPrompter::new())?,
    };

    let Some(pro_type) = pro_type else {
        println!("Generation cancelled.");
        return Ok(());
    };

    if generator.gen_project(&args.name, &pro_type)? {
        println!("Project '{}' generated successfully.", args.name);
        Ok(())
    } else {
        Err(Error::ValidationError(format!(
            "generation of project '{}' failed",
            args.name
        )))
    }
}
