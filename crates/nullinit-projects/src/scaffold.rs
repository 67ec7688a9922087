//! Scaffolding orchestration
//!
//! A single linear flow: existence check, root creation, directory
//! structure, boilerplate files, then repository initialization. Only the
//! existence check can abort; a failed repository init is downgraded to
//! [`VcsStatus::Failed`].

use crate::config::ScaffoldConfig;
use crate::error::{Error, Result};
use crate::git::init_repository;
use crate::templates::{TemplateRenderer, TemplateSet, TemplateVars};
use crate::types::{ProjectType, VcsStatus};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, warn};

/// What to scaffold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub name: String,
    pub project_type: ProjectType,
}

impl ScaffoldRequest {
    pub fn new(name: impl Into<String>, project_type: ProjectType) -> Self {
        Self {
            name: name.into(),
            project_type,
        }
    }
}

/// Result of a successful scaffold
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub name: String,
    pub project_type: ProjectType,
    /// Newly created project root
    pub root: Utf8PathBuf,
    /// Subdirectories created under the root
    pub directories: Vec<Utf8PathBuf>,
    /// Files written under the root
    pub files: Vec<Utf8PathBuf>,
    pub vcs: VcsStatus,
}

/// Create each directory (and missing parents) under `base_path`
///
/// Existing directories are left alone.
pub fn create_directory_structure(
    base_path: &Utf8Path,
    structure: &[&str],
) -> Result<Vec<Utf8PathBuf>> {
    let mut created = Vec::with_capacity(structure.len());

    for dir in structure {
        let path = base_path.join(dir);
        std::fs::create_dir_all(&path)?;
        debug!("Created directory {}", path);
        created.push(path);
    }

    Ok(created)
}

/// Write boilerplate files under `base_path`, overwriting existing ones
pub fn create_boilerplate_files(
    base_path: &Utf8Path,
    files: &[(&str, &str)],
    vars: &TemplateVars,
) -> Result<Vec<Utf8PathBuf>> {
    TemplateRenderer::new().render_files(files, vars, base_path)
}

/// Scaffold a new project as described by `request`
///
/// # Errors
/// Returns [`Error::ProjectExists`] without touching the filesystem when the
/// target directory already exists. Filesystem failures propagate as
/// [`Error::Io`]. Repository initialization never fails the scaffold.
pub fn scaffold_project(request: &ScaffoldRequest, config: &ScaffoldConfig) -> Result<ScaffoldReport> {
    info!(
        "Scaffolding project '{}' (type: {})",
        request.name, request.project_type
    );

    let base_dir = config.resolve_base_dir()?;
    let root = base_dir.join(&request.name);

    if root.exists() {
        return Err(Error::project_exists(root.as_str()));
    }

    std::fs::create_dir(&root)?;
    info!("Created project directory: {}", root);

    let template = TemplateSet::for_type(&request.project_type);
    if !request.project_type.is_supported() {
        warn!(
            "Project type '{}' is not yet supported; writing common files only",
            request.project_type
        );
    }

    let directories = create_directory_structure(&root, template.directories)?;

    let vars = TemplateVars::new(request.name.as_str());
    let files = create_boilerplate_files(&root, &template.merged_files(), &vars)?;
    info!("Wrote {} boilerplate files", files.len());

    let vcs = if config.init_vcs {
        match init_repository(&root, &config.init_options()) {
            Ok(()) => VcsStatus::Initialized,
            Err(e) => {
                warn!("Could not initialize repository: {}", e);
                VcsStatus::Failed(e.to_string())
            }
        }
    } else {
        debug!("Repository initialization disabled");
        VcsStatus::Skipped
    };

    Ok(ScaffoldReport {
        name: request.name.clone(),
        project_type: request.project_type.clone(),
        root,
        directories,
        files,
        vcs,
    })
}
