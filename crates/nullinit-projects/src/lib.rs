//! # nullinit-projects
//!
//! Project scaffolding library for the nullinit CLI providing:
//! - Static template tables per project type
//! - Directory and file materialization
//! - Repository initialization
//!
//! # Examples
//!
//! ## Scaffold a Python project
//!
//! ```no_run
//! use nullinit_projects::{scaffold_project, ProjectType, ScaffoldConfig, ScaffoldRequest};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScaffoldConfig::from_env()?;
//! let request = ScaffoldRequest::new("demo", ProjectType::parse("python"));
//! let report = scaffold_project(&request, &config)?;
//! println!("created {}", report.root);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod git;
pub mod scaffold;
pub mod templates;
pub mod types;

pub use config::ScaffoldConfig;
pub use error::{Error, Result};
pub use scaffold::{scaffold_project, ScaffoldReport, ScaffoldRequest};
pub use types::{ProjectType, VcsStatus};
