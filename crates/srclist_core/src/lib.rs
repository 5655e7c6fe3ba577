//! Core utilities for srclist.
//!
//! This crate provides the pieces shared by the manifest generator:
//! - Resolving caller-supplied target directories into traversal roots
//! - Walking the project tree and collecting files from matching directories
//! - Name-based platform compatibility heuristics
//! - Project root discovery (git root finding, path normalization)

mod collector;
mod config;
mod constants;
mod platform;
mod roots;
mod types;

// Re-export public API
pub use collector::{ScanConfig, collect_files};
pub use config::{find_git_root, normalize_root};
pub use constants::{DEFAULT_EXCLUSIONS, DEFAULT_OUT_DIR, HEADER_EXTENSIONS, SOURCE_EXTENSIONS};
pub use platform::{HostPlatform, NameHeuristic, PlatformFilter};
pub use roots::{MatchMode, TraversalRoot, normalize_separators, project_prefix, resolve_roots};
pub use types::{DiscoveredFile, ExclusionSet, FileClass, ManifestKind};
