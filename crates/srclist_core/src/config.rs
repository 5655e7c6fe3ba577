use anyhow::{Result, anyhow};
use log::{debug, trace};
use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// Walk up from `start` until a directory containing `.git` is found
pub fn find_git_root(start: &Path) -> Result<PathBuf> {
    debug!("Searching for git root");
    let mut current_dir = start.to_path_buf();
    trace!("Starting search from: {:?}", current_dir);

    loop {
        let git_dir = current_dir.join(".git");
        trace!("Checking for .git at: {:?}", git_dir);
        if git_dir.exists() {
            debug!("Found git root at: {:?}", current_dir);
            return Ok(current_dir);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                debug!("Could not find .git directory in any parent folder");
                return Err(anyhow!(
                    "Could not find .git directory above {}; pass --root explicitly",
                    start.display()
                ));
            }
        }
    }
}

/// Absolute form of a user-supplied project root.
///
/// Existing directories are canonicalized; anything else is made absolute
/// against `cwd` and lexically cleaned.
pub fn normalize_root(root: &Path, cwd: &Path) -> PathBuf {
    match root.canonicalize() {
        Ok(canonical) => strip_verbatim(canonical),
        Err(e) => {
            trace!("Could not canonicalize {:?}: {}", root, e);
            if root.is_absolute() { root.clean() } else { cwd.join(root).clean() }
        }
    }
}

// canonicalize yields `\\?\C:\...` on Windows, which would never prefix-match
// the paths handed out by the walker.
#[cfg(windows)]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    let s = path.to_string_lossy();
    match s.strip_prefix(r"\\?\") {
        Some(rest) => PathBuf::from(rest),
        None => path,
    }
}

#[cfg(not(windows))]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    path
}
