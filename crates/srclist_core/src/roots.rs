use anyhow::{Result, bail};
use log::{debug, trace};
use std::path::Path;

/// How a directory path is compared against a traversal root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Plain string prefix: root `src/foo` also matches `src/foobar`
    #[default]
    Textual,
    /// Root must be followed by a path separator or end the directory path
    Segment,
}

/// An absolute, forward-slash directory path under which files are collected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalRoot {
    abs: String,
    target: String,
}

impl TraversalRoot {
    pub fn as_str(&self) -> &str {
        &self.abs
    }

    /// The target directory exactly as the caller supplied it
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn matches(&self, dir: &str, mode: MatchMode) -> bool {
        match mode {
            MatchMode::Textual => dir.starts_with(&self.abs),
            MatchMode::Segment => {
                let root = self.abs.trim_end_matches('/');
                let dir = dir.trim_end_matches('/');
                dir == root
                    || dir.strip_prefix(root).is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Project root as a forward-slash string ending in `/`
pub fn project_prefix(root: &Path) -> String {
    let mut prefix = normalize_separators(&root.to_string_lossy());
    if !prefix.ends_with('/') {
        prefix.push('/');
    }
    prefix
}

/// Join the project root with every target directory.
///
/// Targets are kept in order and never merged. An absolute target replaces
/// the project root, the same way a path join would.
pub fn resolve_roots(project_root: &Path, targets: &[String]) -> Result<Vec<TraversalRoot>> {
    if targets.is_empty() {
        bail!("No target directories provided");
    }

    let prefix = project_prefix(project_root);
    debug!("Resolving {} target directories against {}", targets.len(), prefix);

    let roots = targets
        .iter()
        .map(|target| {
            let abs = if Path::new(target).is_absolute() {
                normalize_separators(target)
            } else {
                format!("{}{}", prefix, normalize_separators(target))
            };
            trace!("Target '{}' -> traversal root '{}'", target, abs);
            TraversalRoot { abs, target: target.clone() }
        })
        .collect();

    Ok(roots)
}
