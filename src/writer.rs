//! Template writing for gen-mq.
//! Creates the project directory, substitutes placeholders into each loaded
//! template and writes the results, then validates every written file.

use crate::error::{Error, Result};
use crate::reader::LoadedTemplate;
use crate::renderer::{ProjectContext, TemplateRenderer};
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Permission bits applied to every generated file: read-write for owner,
/// group and world, no execute. Makefiles keep the same mode; make does
/// not need the executable bit.
#[cfg(unix)]
const MODULE_MODE: u32 = 0o666;

/// True for module names that follow the build-artifact naming convention.
/// Such modules get makefile format validation instead of the source
/// extension check.
pub fn is_build_module(module: &str) -> bool {
    module == "Makefile" || module.ends_with(".mk")
}

/// True if the module name carries a format this generator knows how to
/// validate: a C source or header extension, or a recognized makefile name.
pub fn has_known_format(module: &str) -> bool {
    module.ends_with(".c") || module.ends_with(".h") || is_build_module(module)
}

/// Post-write consistency check for one generated file: the path exists,
/// the metadata grants read-write access, and the module name carries an
/// expected format. This is a defensive assertion, not a security boundary.
pub fn validate_module(path: &Path, module: &str) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        warn!("Generated file '{}' does not exist", path.display());
        return false;
    };
    if !metadata.is_file() || metadata.permissions().readonly() {
        warn!("Generated file '{}' is not a writable file", path.display());
        return false;
    }
    if !has_known_format(module) {
        warn!("Module '{}' has no recognized format", module);
        return false;
    }
    true
}

#[cfg(unix)]
fn set_module_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(MODULE_MODE))
        .map_err(Error::IoError)
}

#[cfg(not(unix))]
fn set_module_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

/// Writes every loaded template into a new project directory.
///
/// The output directory is `<output_root>/<pro_name>`; the caller passes
/// its working directory explicitly rather than relying on ambient state.
/// Each template body has `${PRO}` and `${YEAR}` substituted, is written
/// under its module name, permission-set and validated.
///
/// # Returns
/// * `Ok(true)` only if every file validated and the validated count
///   equals the number of input templates
/// * `Ok(false)` if any file failed validation; files written before the
///   failure are left on disk, there is no rollback
///
/// # Errors
/// * `Error::ValueError` for an empty template map or project name
/// * `Error::ProjectExistsError` if the project directory already exists;
///   the existing directory is left untouched
/// * `Error::IoError` / `Error::TemplateError` on write or substitution
///   failure
pub fn write<P: AsRef<Path>>(
    templates: &LoadedTemplate,
    pro_name: &str,
    output_root: P,
    renderer: &dyn TemplateRenderer,
) -> Result<bool> {
    if templates.is_empty() {
        return Err(Error::ValueError("missing model content".to_string()));
    }
    if pro_name.is_empty() {
        return Err(Error::ValueError("missing model name".to_string()));
    }

    let project_dir = output_root.as_ref().join(pro_name);
    if let Err(e) = fs::create_dir(&project_dir) {
        return Err(match e.kind() {
            ErrorKind::AlreadyExists => {
                Error::ProjectExistsError { pro_name: pro_name.to_string() }
            }
            _ => Error::IoError(e),
        });
    }
    debug!("Created project directory '{}'", project_dir.display());

    let context = ProjectContext::new(pro_name);
    let mut validated = 0;

    for (module, raw_content) in templates {
        let content = renderer.render(raw_content, &context)?;
        let module_path = project_dir.join(module);
        debug!("Writing module '{}'", module_path.display());
        fs::write(&module_path, content).map_err(Error::IoError)?;
        set_module_permissions(&module_path)?;
        if validate_module(&module_path, module) {
            validated += 1;
        }
    }

    Ok(validated == templates.len())
}
