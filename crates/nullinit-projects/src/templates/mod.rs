//! Project template system for nullinit.
//!
//! Templates are static tables compiled into the binary:
//! - `catalog`: the per-type directory lists and file tables
//! - `renderer`: `{project_name}` substitution and file materialization
//!
//! # Example Usage
//!
//! ```no_run
//! use nullinit_projects::templates::{TemplateSet, TemplateRenderer, TemplateVars};
//! use nullinit_projects::ProjectType;
//! use camino::Utf8Path;
//!
//! let set = TemplateSet::for_type(&ProjectType::Python);
//! let files = set.merged_files();
//!
//! let vars = TemplateVars::new("demo");
//! let renderer = TemplateRenderer::new();
//! renderer.render_files(&files, &vars, Utf8Path::new("/tmp/demo")).unwrap();
//! ```
//!
//! # Merge Order
//!
//! The common files (`README.md`, `.gitignore`) are overlaid on top of the
//! type's own table. A path defined in both keeps its position from the type
//! table and takes its content from the common table.

pub mod catalog;
pub mod renderer;

pub use catalog::{template_set, COMMON_FILES};
pub use renderer::{TemplateRenderer, TemplateVars};

use crate::types::ProjectType;

/// Directories and files scaffolded for one project type
#[derive(Debug, Clone, Copy)]
pub struct TemplateSet {
    /// Relative directories, created in order
    pub directories: &'static [&'static str],
    /// Relative file path to literal content
    pub files: &'static [(&'static str, &'static str)],
}

impl TemplateSet {
    /// Static template set for a project type
    pub fn for_type(project_type: &ProjectType) -> &'static TemplateSet {
        template_set(project_type)
    }

    /// Type files with the common files overlaid
    pub fn merged_files(&self) -> Vec<(&'static str, &'static str)> {
        let mut merged: Vec<(&'static str, &'static str)> = self.files.to_vec();

        for &(path, content) in COMMON_FILES {
            match merged.iter_mut().find(|(existing, _)| *existing == path) {
                Some(entry) => entry.1 = content,
                None => merged.push((path, content)),
            }
        }

        merged
    }
}
