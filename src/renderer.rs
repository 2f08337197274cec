//! Placeholder substitution for gen-mq templates.
//! Template files are plain text carrying `${PRO}` and `${YEAR}` tokens;
//! anything beyond literal token substitution is out of scope.

use crate::constants::{PLACEHOLDER_PRO, PLACEHOLDER_YEAR};
use crate::error::{Error, Result};
use chrono::{Datelike, Local};
use regex::Regex;

/// Substitution environment for one generation run: the project name and
/// the current four-digit year, available to every template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pro: String,
    year: String,
}

impl ProjectContext {
    /// Creates a context for the given project name with the current year.
    pub fn new<S: Into<String>>(pro_name: S) -> Self {
        Self { pro: pro_name.into(), year: format!("{:04}", Local::now().year()) }
    }

    /// Creates a context with an explicit year.
    pub fn with_year<S: Into<String>>(pro_name: S, year: i32) -> Self {
        Self { pro: pro_name.into(), year: format!("{:04}", year) }
    }

    /// Resolves a placeholder name to its value.
    pub fn get(&self, name: &str) -> Option<&str> {
        if name == PLACEHOLDER_PRO {
            Some(&self.pro)
        } else if name == PLACEHOLDER_YEAR {
            Some(&self.year)
        } else {
            None
        }
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context values for substitution
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &ProjectContext) -> Result<String>;
}

/// Literal `${NAME}` token substitution engine.
pub struct PlaceholderRenderer {
    pattern: Regex,
}

impl PlaceholderRenderer {
    /// Creates a new PlaceholderRenderer instance.
    pub fn new() -> Self {
        // The pattern is a fixed literal; compilation cannot fail.
        let pattern = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();
        Self { pattern }
    }
}

impl Default for PlaceholderRenderer {
    fn default() -> Self {
        PlaceholderRenderer::new()
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    /// Replaces every `${NAME}` token with its context value.
    ///
    /// # Errors
    /// * `Error::TemplateError` if a token has no context entry. This
    ///   mirrors the substitution contract of the original engine, which
    ///   fails on unresolved placeholders rather than passing them through.
    fn render(&self, template: &str, context: &ProjectContext) -> Result<String> {
        let mut rendered = String::with_capacity(template.len());
        let mut last = 0;

        for captures in self.pattern.captures_iter(template) {
            let token = captures.get(0).unwrap();
            let name = &captures[1];
            let value = context.get(name).ok_or_else(|| {
                Error::TemplateError(format!("undefined placeholder '{}'", name))
            })?;
            rendered.push_str(&template[last..token.start()]);
            rendered.push_str(value);
            last = token.end();
        }
        rendered.push_str(&template[last..]);

        Ok(rendered)
    }
}
