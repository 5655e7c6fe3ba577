use anyhow::{Context, Result};
use log::{debug, trace};
use srclist_core::ManifestKind;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// An ordered CMake list, in discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    kind: ManifestKind,
    entries: Vec<String>,
}

impl Manifest {
    pub fn new(kind: ManifestKind) -> Self {
        Self { kind, entries: Vec::new() }
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `set(NAME` then one tab-indented quoted entry per line, then `)`.
    /// No trailing newline.
    pub fn render(&self) -> String {
        let mut out = format!("set({}", self.kind.variable());
        for entry in &self.entries {
            out.push_str("\n\t\"");
            out.push_str(entry);
            out.push('"');
        }
        out.push_str("\n)");
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifests {
    pub header_dirs: Manifest,
    pub source_files: Manifest,
    pub header_files: Manifest,
}

impl Manifests {
    pub fn new() -> Self {
        Self {
            header_dirs: Manifest::new(ManifestKind::HeaderDirs),
            source_files: Manifest::new(ManifestKind::SourceFiles),
            header_files: Manifest::new(ManifestKind::HeaderFiles),
        }
    }

    pub fn get(&self, kind: ManifestKind) -> &Manifest {
        match kind {
            ManifestKind::HeaderDirs => &self.header_dirs,
            ManifestKind::SourceFiles => &self.source_files,
            ManifestKind::HeaderFiles => &self.header_files,
        }
    }
}

impl Default for Manifests {
    fn default() -> Self {
        Self::new()
    }
}

/// The three output files, created and truncated up front
pub struct ManifestOutputs {
    files: Vec<(ManifestKind, PathBuf, File)>,
}

impl ManifestOutputs {
    pub fn create(out_dir: &Path) -> Result<Self> {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

        let mut files = Vec::with_capacity(ManifestKind::ALL.len());
        for kind in ManifestKind::ALL {
            let path = out_dir.join(kind.file_name());
            trace!("Opening {} for writing", path.display());
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            files.push((kind, path, file));
        }
        debug!("Opened {} output files in {}", files.len(), out_dir.display());
        Ok(Self { files })
    }

    /// Write every list and return the paths in write order
    pub fn write(self, manifests: &Manifests) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.files.len());
        for (kind, path, file) in self.files {
            let manifest = manifests.get(kind);
            let mut writer = BufWriter::new(file);
            writer
                .write_all(manifest.render().as_bytes())
                .and_then(|()| writer.flush())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            debug!("Wrote {} entries to {}", manifest.len(), path.display());
            written.push(path);
        }
        Ok(written)
    }
}
