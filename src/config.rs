//! Configuration handling for gen-mq.
//! Loads the project configuration document and exposes, per project type,
//! the ordered list of (module, template) pairs to generate.

use crate::constants::SUPPORTED_VARIANTS;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// One generated source file: the output module name and the template
/// file (relative to the project type's template directory) it is
/// rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTemplate {
    pub module: String,
    pub template: String,
}

/// On-disk shape of the configuration document: two parallel ordered
/// collections, each a list of one-entry mappings from a project type
/// key to its module names / template file names.
///
/// The parallel layout is kept on the wire for compatibility with the
/// original configuration format; in memory it is folded into a direct
/// per-type mapping.
#[derive(Debug, Deserialize)]
struct RawConfig {
    modules: Vec<IndexMap<String, Vec<String>>>,
    templates: Vec<IndexMap<String, Vec<String>>>,
}

/// In-memory configuration model: project type key to its ordered
/// (module, template) pairs. Immutable after load.
#[derive(Debug, Default, Clone)]
pub struct ProjectConfig {
    variants: IndexMap<String, Vec<ModuleTemplate>>,
}

impl ProjectConfig {
    /// Creates a configuration model directly from a per-type mapping.
    pub fn new(variants: IndexMap<String, Vec<ModuleTemplate>>) -> Self {
        Self { variants }
    }

    /// Returns the ordered (module, template) pairs for a project type,
    /// or `None` if the type is not configured. An unknown type is not
    /// an error at this layer; callers treat it as the cancel path.
    pub fn variant(&self, pro_type: &str) -> Option<&[ModuleTemplate]> {
        self.variants.get(pro_type).map(|pairs| pairs.as_slice())
    }

    /// True if no project type is configured at all.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Configured project type keys, in declaration order.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(|key| key.as_str())
    }
}

/// Loads and validates the configuration document.
///
/// # Arguments
/// * `config_path` - Path to the YAML configuration document
///
/// # Returns
/// * `Result<ProjectConfig>` - Validated configuration model
///
/// # Errors
/// * `Error::IoError` if the document cannot be read
/// * `Error::ConfigError` if the document does not match the expected
///   shape, the parallel collections are misaligned, a module name is
///   empty or duplicated, or the number of project types is not exactly
///   [`SUPPORTED_VARIANTS`]
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<ProjectConfig> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from {}", config_path.display());

    let content = std::fs::read_to_string(config_path).map_err(Error::IoError)?;
    let raw: RawConfig = serde_yaml::from_str(&content)
        .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e)))?;

    if raw.modules.len() != raw.templates.len() {
        return Err(Error::ConfigError(format!(
            "modules declares {} project types, templates declares {}",
            raw.modules.len(),
            raw.templates.len()
        )));
    }

    let mut variants: IndexMap<String, Vec<ModuleTemplate>> = IndexMap::new();
    for (module_entry, template_entry) in raw.modules.iter().zip(raw.templates.iter()) {
        let (pro_type, module_names) = single_entry(module_entry, "modules")?;
        let (template_type, template_names) = single_entry(template_entry, "templates")?;

        if pro_type != template_type {
            return Err(Error::ConfigError(format!(
                "modules entry '{}' is paired with templates entry '{}'",
                pro_type, template_type
            )));
        }
        if module_names.len() != template_names.len() {
            return Err(Error::ConfigError(format!(
                "project type '{}' declares {} modules but {} templates",
                pro_type,
                module_names.len(),
                template_names.len()
            )));
        }

        let mut pairs = Vec::with_capacity(module_names.len());
        for (module, template) in module_names.iter().zip(template_names.iter()) {
            if module.is_empty() {
                return Err(Error::ConfigError(format!(
                    "project type '{}' declares an empty module name",
                    pro_type
                )));
            }
            if pairs.iter().any(|pair: &ModuleTemplate| pair.module == *module) {
                return Err(Error::ConfigError(format!(
                    "project type '{}' declares module '{}' more than once",
                    pro_type, module
                )));
            }
            pairs.push(ModuleTemplate {
                module: module.clone(),
                template: template.clone(),
            });
        }

        if variants.insert(pro_type.clone(), pairs).is_some() {
            return Err(Error::ConfigError(format!(
                "project type '{}' is declared more than once",
                pro_type
            )));
        }
    }

    if variants.len() != SUPPORTED_VARIANTS {
        return Err(Error::ConfigError(format!(
            "expected exactly {} project types, found {}",
            SUPPORTED_VARIANTS,
            variants.len()
        )));
    }

    Ok(ProjectConfig::new(variants))
}

fn single_entry<'a>(
    entry: &'a IndexMap<String, Vec<String>>,
    collection: &str,
) -> Result<(&'a String, &'a Vec<String>)> {
    let mut items = entry.iter();
    match (items.next(), items.next()) {
        (Some(pair), None) => Ok(pair),
        _ => Err(Error::ConfigError(format!(
            "each {} entry must map exactly one project type",
            collection
        ))),
    }
}
