//! Generation orchestration for gen-mq.
//! Combines the configuration model, template reader and writer into the
//! select → read → substitute → write pipeline.

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::reader;
use crate::renderer::TemplateRenderer;
use crate::writer;
use log::debug;
use std::path::PathBuf;

/// Menu entry that aborts generation without doing anything.
const CANCEL: &str = "Cancel";

/// Drives one project generation run. The configuration is read-only for
/// the whole pipeline; the output root is captured once by the caller
/// instead of consulting the working directory ambiently.
pub struct Generator {
    config: ProjectConfig,
    template_root: PathBuf,
    output_root: PathBuf,
    renderer: Box<dyn TemplateRenderer>,
}

impl Generator {
    pub fn new(
        config: ProjectConfig,
        template_root: PathBuf,
        output_root: PathBuf,
        renderer: Box<dyn TemplateRenderer>,
    ) -> Self {
        Self { config, template_root, output_root, renderer }
    }

    /// Presents the numbered project type menu, with a final cancel entry.
    ///
    /// # Returns
    /// * `Ok(Some(pro_type))` for a chosen project type
    /// * `Ok(None)` if the user cancelled
    pub fn select_pro_type(&self, prompt: &dyn Prompter) -> Result<Option<String>> {
        let mut items: Vec<String> = self
            .config
            .variant_names()
            .map(|name| name.to_uppercase().replace('_', " "))
            .collect();
        items.push(CANCEL.to_string());

        let choice = prompt.select("select project type", &items)?;
        Ok(self.config.variant_names().nth(choice).map(|name| name.to_string()))
    }

    /// Generates the project structure for one (name, type) request.
    ///
    /// A project type the configuration does not know is the cancel path:
    /// the run is a no-op success, nothing is written. Otherwise templates
    /// are read and written; all reader/writer failures propagate.
    ///
    /// # Returns
    /// * `Ok(true)` on full success or on the cancel path
    /// * `Ok(false)` if any generated file failed validation
    pub fn gen_project(&self, pro_name: &str, pro_type: &str) -> Result<bool> {
        if self.config.variant(pro_type).is_none() {
            debug!("Project type '{}' is not configured, cancelling", pro_type);
            return Ok(true);
        }

        let templates =
            reader::read(&self.config, pro_name, pro_type, &self.template_root)?;
        if templates.is_empty() {
            return Ok(true);
        }

        writer::write(&templates, pro_name, &self.output_root, self.renderer.as_ref())
    }
}
