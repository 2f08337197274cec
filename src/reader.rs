//! Template reading for gen-mq.
//! Resolves the template directory for a project type and loads the raw
//! content of every configured template file, keyed by output module name.

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use std::path::Path;

/// Loaded template contents, keyed by output module name. Built fresh on
/// every read call and never mutated afterwards; declaration order of the
/// configuration is preserved.
pub type LoadedTemplate = IndexMap<String, String>;

/// Loads every template configured for a project type.
///
/// # Arguments
/// * `config` - Configuration model (must be non-empty)
/// * `pro_name` - Project name (must be non-empty)
/// * `pro_type` - Requested project type (must be non-empty)
/// * `template_root` - Root directory holding one template directory per type
///
/// # Returns
/// * `Result<LoadedTemplate>` - Module name to raw template text. A project
///   type the configuration does not know yields an empty map, not an
///   error: that is the designed cancel path.
///
/// # Errors
/// * `Error::ValueError` for an empty config, project name or project type
/// * `Error::IoError` if any configured template file is missing or
///   unreadable; one bad file fails the whole call, there is no soft skip
pub fn read<P: AsRef<Path>>(
    config: &ProjectConfig,
    pro_name: &str,
    pro_type: &str,
    template_root: P,
) -> Result<LoadedTemplate> {
    if config.is_empty() {
        return Err(Error::ValueError("missing project templates".to_string()));
    }
    if pro_name.is_empty() {
        return Err(Error::ValueError("missing project name".to_string()));
    }
    if pro_type.is_empty() {
        return Err(Error::ValueError("missing project type".to_string()));
    }

    let mut content = LoadedTemplate::new();
    let Some(pairs) = config.variant(pro_type) else {
        debug!("Project type '{}' is not configured, nothing to read", pro_type);
        return Ok(content);
    };

    let template_dir = template_root.as_ref().join(pro_type);
    for pair in pairs {
        let template_file = template_dir.join(&pair.template);
        debug!(
            "Reading template '{}' for module '{}'",
            template_file.display(),
            pair.module
        );
        let text = std::fs::read_to_string(&template_file).map_err(Error::IoError)?;
        content.insert(pair.module.clone(), text);
    }

    debug!("Loaded {} template(s) for project '{}'", content.len(), pro_name);
    Ok(content)
}
