//! Version-control operations
//!
//! Only repository initialization is needed for scaffolding. The command is
//! configurable so that environments without git, or with a wrapper, work.
//!
//! # Examples
//!
//! ```no_run
//! use nullinit_projects::git::{init_repository, InitOptions};
//! use camino::Utf8Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let path = Utf8Path::new("/tmp/my-repo");
//! init_repository(path, &InitOptions::default())?;
//! # Ok(())
//! # }
//! ```

mod init;

pub use init::{init_repository, InitOptions, DEFAULT_VCS_COMMAND};
