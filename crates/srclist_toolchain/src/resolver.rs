use anyhow::{Result, bail};
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::strategy::RootStrategy;

/// Location of the CMake toolchain file inside a vcpkg root
pub const TOOLCHAIN_SUBPATH: &str = "scripts/buildsystems/vcpkg.cmake";

pub fn toolchain_file(root: &Path) -> PathBuf {
    root.join(TOOLCHAIN_SUBPATH)
}

fn has_toolchain(root: &Path) -> bool {
    let file = toolchain_file(root);
    trace!("Checking for toolchain at: {:?}", file);
    file.is_file()
}

#[derive(Default)]
pub struct ToolchainResolver {
    strategies: Vec<Box<dyn RootStrategy>>,
}

impl ToolchainResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: impl RootStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// First root offered by a strategy that holds a toolchain file
    pub fn resolve_root(&mut self) -> Result<PathBuf> {
        for strategy in &mut self.strategies {
            debug!("Trying {} strategy", strategy.name());
            if let Some(root) = strategy.locate(&has_toolchain)? {
                debug!("{} strategy found root: {}", strategy.name(), root.display());
                return Ok(root);
            }
        }
        bail!("Could not locate a vcpkg root containing {}", TOOLCHAIN_SUBPATH)
    }

    /// Toolchain file path with forward slashes, as CMake expects it
    pub fn resolve_toolchain_file(&mut self) -> Result<String> {
        let root = self.resolve_root()?;
        Ok(toolchain_file(&root).to_string_lossy().replace('\\', "/"))
    }
}
