use anyhow::{Result, anyhow, bail};
use clap::Parser;
use log::{debug, info};
use srclist_core::{DEFAULT_OUT_DIR, ExclusionSet, HostPlatform, MatchMode};
use std::{env, path::PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "generate")]
#[command(about = "Generate CMake source and header lists for the given target directories")]
pub struct Config {
    /// Target directories, relative to the project root
    #[arg(value_name = "TARGET_DIRS")]
    pub targets: Vec<String>,

    /// Root directory of the project (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory receiving the generated .cmake files (defaults to <root>/scripts)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Additional file name to leave out of every list (repeatable)
    #[arg(long = "exclude", value_name = "FILE_NAME")]
    pub excludes: Vec<String>,

    /// Keep files whose names look specific to another operating system
    #[arg(long)]
    pub no_platform_filter: bool,

    /// Operating system to filter for (defaults to the running one)
    #[arg(long, value_name = "OS")]
    pub host_os: Option<HostPlatform>,

    /// Match target directories on whole path segments only
    #[arg(long)]
    pub strict_prefix: bool,

    /// Prefix for console messages
    #[arg(long, default_value = "srclist")]
    pub label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            root: None,
            out_dir: None,
            excludes: Vec::new(),
            no_platform_filter: false,
            host_os: None,
            strict_prefix: false,
            label: "srclist".to_string(),
        }
    }
}

impl Config {
    /// Validate the targets and resolve the project root and output directory.
    ///
    /// Fails before touching the filesystem when no targets were given.
    pub fn initialize(&mut self) -> Result<()> {
        if self.targets.is_empty() {
            bail!("No target directories provided");
        }

        let cwd = env::current_dir()?;
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            srclist_core::normalize_root(&r, &cwd)
        } else {
            debug!("No root provided, searching for git root");
            srclist_core::find_git_root(&cwd)?
        };
        info!("Using root directory: {}", root.display());

        let out_dir = match self.out_dir.take() {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => cwd.join(dir),
            None => root.join(DEFAULT_OUT_DIR),
        };
        debug!("Writing lists to: {}", out_dir.display());

        self.root = Some(root);
        self.out_dir = Some(out_dir);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    pub fn out_dir(&self) -> Result<&PathBuf> {
        self.out_dir
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }

    pub fn exclusion_set(&self) -> ExclusionSet {
        ExclusionSet::default().with(self.excludes.iter().cloned())
    }

    pub fn host(&self) -> HostPlatform {
        self.host_os.unwrap_or_else(HostPlatform::current)
    }

    pub fn match_mode(&self) -> MatchMode {
        if self.strict_prefix { MatchMode::Segment } else { MatchMode::Textual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_rejects_missing_targets() {
        let mut cfg = Config { root: Some(PathBuf::from("/nonexistent")), ..Config::default() };
        let err = cfg.initialize().unwrap_err();
        assert!(err.to_string().contains("No target directories"));
        assert!(cfg.out_dir.is_none());
    }

    #[test]
    fn test_initialize_defaults_out_dir_under_root() {
        let temp_dir = TempDir::new().unwrap();
        let mut cfg = Config {
            targets: vec!["src".to_string()],
            root: Some(temp_dir.path().to_path_buf()),
            ..Config::default()
        };
        cfg.initialize().unwrap();

        let root = cfg.root().unwrap().clone();
        assert_eq!(root, temp_dir.path().canonicalize().unwrap());
        assert_eq!(cfg.out_dir().unwrap(), &root.join("scripts"));
    }

    #[test]
    fn test_initialize_keeps_absolute_out_dir() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("cmake");
        fs::create_dir_all(&out).unwrap();
        let mut cfg = Config {
            targets: vec!["src".to_string()],
            root: Some(temp_dir.path().to_path_buf()),
            out_dir: Some(out.clone()),
            ..Config::default()
        };
        cfg.initialize().unwrap();
        assert_eq!(cfg.out_dir().unwrap(), &out);
    }

    #[test]
    fn test_accessors_before_initialize() {
        let cfg = Config::default();
        assert!(cfg.root().is_err());
        assert!(cfg.out_dir().is_err());
    }

    #[test]
    fn test_exclusion_set_extends_defaults() {
        let cfg = Config { excludes: vec!["generated.cpp".to_string()], ..Config::default() };
        let set = cfg.exclusion_set();
        assert!(set.contains("generated.cpp"));
        assert!(set.contains("boxer_linux.cpp"));
    }

    #[test]
    fn test_parse_flags() {
        let cfg = Config::try_parse_from([
            "generate",
            "--strict-prefix",
            "--host-os",
            "windows",
            "--exclude",
            "a.cpp",
            "--exclude",
            "b.cpp",
            "engine",
            "external/imgui",
        ])
        .unwrap();
        assert_eq!(cfg.targets, vec!["engine", "external/imgui"]);
        assert_eq!(cfg.host(), HostPlatform::Windows);
        assert_eq!(cfg.match_mode(), MatchMode::Segment);
        assert_eq!(cfg.excludes.len(), 2);
        assert_eq!(cfg.label, "srclist");
    }
}
