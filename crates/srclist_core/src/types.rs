use std::collections::HashSet;

use crate::constants::DEFAULT_EXCLUSIONS;

/// One of the three generated CMake lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    HeaderDirs,
    SourceFiles,
    HeaderFiles,
}

impl ManifestKind {
    /// Order in which the lists are created and written
    pub const ALL: [ManifestKind; 3] =
        [ManifestKind::HeaderDirs, ManifestKind::SourceFiles, ManifestKind::HeaderFiles];

    /// CMake variable the list is assigned to
    pub fn variable(self) -> &'static str {
        match self {
            ManifestKind::HeaderDirs => "HEADER_DIRS",
            ManifestKind::SourceFiles => "SOURCE_FILES",
            ManifestKind::HeaderFiles => "HEADER_FILES",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ManifestKind::HeaderDirs => "HeaderDirs.cmake",
            ManifestKind::SourceFiles => "SourceFiles.cmake",
            ManifestKind::HeaderFiles => "HeaderFiles.cmake",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    Source,
    Header,
}

/// A file found in a directory that matched a traversal root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Directory relative to the project root, forward-slash separated,
    /// empty for the project root itself
    pub rel_dir: String,
    pub file_name: String,
}

impl DiscoveredFile {
    /// Text after the last `.`, or the whole name when there is none
    pub fn extension(&self) -> &str {
        self.file_name.rsplit_once('.').map_or(self.file_name.as_str(), |(_, ext)| ext)
    }

    /// Path as it is written into a manifest
    pub fn manifest_path(&self) -> String {
        if self.rel_dir.is_empty() {
            self.file_name.clone()
        } else {
            format!("{}/{}", self.rel_dir, self.file_name)
        }
    }
}

/// File base names that are never emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    pub fn empty() -> Self {
        Self { names: HashSet::new() }
    }

    pub fn with<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.names.contains(file_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::empty().with(DEFAULT_EXCLUSIONS.iter().copied())
    }
}
