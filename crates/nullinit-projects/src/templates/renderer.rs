//! Template rendering and file materialization.
//!
//! Handles:
//! - `{project_name}` substitution in file paths and contents
//! - Writing every file of a merged table under the project root

use crate::error::Result;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

/// Template variables for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    pub project_name: String,
}

impl TemplateVars {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }
}

/// Template renderer
#[derive(Debug, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render a string template with variables
    ///
    /// Only the literal `{project_name}` token is replaced; all other braces
    /// pass through untouched.
    pub fn render_string(&self, template: &str, vars: &TemplateVars) -> String {
        template.replace("{project_name}", &vars.project_name)
    }

    /// Write template files under `target_dir`, overwriting existing files
    pub fn render_files(
        &self,
        files: &[(&str, &str)],
        vars: &TemplateVars,
        target_dir: &Utf8Path,
    ) -> Result<Vec<Utf8PathBuf>> {
        let mut created_files = Vec::with_capacity(files.len());

        for (file_path_template, content_template) in files {
            let file_path = self.render_string(file_path_template, vars);
            let full_path = target_dir.join(&file_path);

            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let content = self.render_string(content_template, vars);
            std::fs::write(&full_path, content)?;
            debug!("Wrote {}", full_path);

            created_files.push(full_path);
        }

        Ok(created_files)
    }
}
