use std::path::PathBuf;

use crate::emitter::Manifests;

/// A file left out of every list because it looks platform-specific
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_name: String,
    /// Project-relative path, as it would have appeared in a list
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub manifests: Manifests,
    pub skipped: Vec<SkippedFile>,
    pub files_scanned: usize,
    /// Output files in the order they were written
    pub written: Vec<PathBuf>,
}

impl GenerateResult {
    pub fn source_count(&self) -> usize {
        self.manifests.source_files.len()
    }

    pub fn header_count(&self) -> usize {
        self.manifests.header_files.len()
    }
}
