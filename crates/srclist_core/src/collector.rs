use anyhow::{Context, Result};
use ignore::WalkBuilder;
use log::{debug, trace, warn};
use std::{fs, path::Path};

use crate::{
    roots::{MatchMode, TraversalRoot, normalize_separators, project_prefix},
    types::DiscoveredFile,
};

pub struct ScanConfig<'a> {
    pub root: &'a Path,
    pub roots: &'a [TraversalRoot],
    pub mode: MatchMode,
}

/// Walk the project once and return the files of every matching directory.
///
/// Directories are visited depth-first in file-name order and each matching
/// directory contributes its immediate files, sorted by name. Nothing is
/// filtered out by `.gitignore` or hidden-file rules.
///
/// Unreadable directories and names that are not valid UTF-8 are skipped with
/// a warning; they never abort the walk.
pub fn collect_files(cfg: &ScanConfig) -> Result<Vec<DiscoveredFile>> {
    debug!("Collecting files under {} traversal roots", cfg.roots.len());
    let prefix = project_prefix(cfg.root);
    debug!("Walking directory tree from root: {}", cfg.root.display());

    let walker = WalkBuilder::new(cfg.root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    let mut dirs_matched = 0usize;

    for res in walker {
        let dent = match res {
            Ok(dent) => dent,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", cfg.root.display(), e);
                continue;
            }
        };
        if !dent.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }

        let Some(rel_dir) = relative_dir(cfg.root, dent.path()) else {
            warn!("Skipping directory with a non UTF-8 name: {}", dent.path().display());
            continue;
        };
        let dir_key = format!("{}{}", prefix, rel_dir);

        // First match wins so overlapping roots never list a directory twice
        let Some(root) = cfg.roots.iter().find(|r| r.matches(&dir_key, cfg.mode)) else {
            trace!("Skipping directory outside traversal roots: {}", dir_key);
            continue;
        };
        trace!("Directory {} matched traversal root {}", dir_key, root.as_str());

        let names = match list_files(dent.path()) {
            Ok(names) => names,
            Err(e) => {
                warn!("Skipping unreadable directory {}: {:#}", dir_key, e);
                continue;
            }
        };
        dirs_matched += 1;

        for file_name in names {
            files.push(DiscoveredFile { rel_dir: rel_dir.clone(), file_name });
        }
    }

    debug!("Collected {} files from {} matching directories", files.len(), dirs_matched);
    Ok(files)
}

fn relative_dir(root: &Path, dir: &Path) -> Option<String> {
    let rel = dir.strip_prefix(root).unwrap_or(dir);
    rel.to_str().map(normalize_separators)
}

fn list_files(dir: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        if entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!("Skipping file with a non UTF-8 name in {}: {:?}", dir.display(), raw),
        }
    }
    names.sort();
    Ok(names)
}
