//! CMake source and header list generation for native projects.
//!
//! This crate walks a project, picks up C/C++ sources and headers under the
//! requested target directories and writes three CMake list files
//! (`HeaderDirs.cmake`, `SourceFiles.cmake`, `HeaderFiles.cmake`) so the
//! build never needs hand-maintained file lists.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use srclist_manifest::{Config, run_generate};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     targets: vec!["src".to_string(), "external/imgui".to_string()],
//!     root: Some(std::path::PathBuf::from("/path/to/project")),
//!     ..Config::default()
//! };
//!
//! let result = run_generate(cfg.clone())?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! srclist_manifest::print_skipped(&mut stdout, &result.skipped, &cfg.label)?;
//! srclist_manifest::print_summary(&mut stdout, &result, &cfg.label)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod classifier;
mod config;
mod emitter;
mod generator;
mod reporter;
mod types;

// Re-export public API
pub use classifier::{Classifier, Verdict};
pub use config::Config;
pub use emitter::{Manifest, ManifestOutputs, Manifests};
pub use generator::{generate_manifests, run_generate};
pub use reporter::{print_skipped, print_summary};
pub use types::{GenerateResult, SkippedFile};
