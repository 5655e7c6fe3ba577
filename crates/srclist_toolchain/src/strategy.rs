use anyhow::{Context, Result};
use log::{debug, info, warn};
use path_clean::PathClean;
use std::{
    env,
    ffi::OsString,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

pub const VCPKG_ROOT_VAR: &str = "VCPKG_ROOT";

/// One way of obtaining a candidate package-manager root.
///
/// `accept` reports whether a candidate holds a usable toolchain; a strategy
/// returns `Ok(None)` when it has nothing acceptable to offer.
pub trait RootStrategy {
    fn name(&self) -> &str;
    fn locate(&mut self, accept: &dyn Fn(&Path) -> bool) -> Result<Option<PathBuf>>;
}

/// Reads the root from an environment variable
#[derive(Debug, Clone)]
pub struct EnvStrategy {
    var: String,
    value: Option<OsString>,
}

impl EnvStrategy {
    pub fn from_env(var: &str) -> Self {
        Self { var: var.to_string(), value: env::var_os(var) }
    }

    pub fn with_value(var: &str, value: Option<OsString>) -> Self {
        Self { var: var.to_string(), value }
    }
}

impl RootStrategy for EnvStrategy {
    fn name(&self) -> &str {
        "environment"
    }

    fn locate(&mut self, accept: &dyn Fn(&Path) -> bool) -> Result<Option<PathBuf>> {
        let Some(value) = self.value.as_ref().filter(|v| !v.is_empty()) else {
            debug!("{} is not set", self.var);
            return Ok(None);
        };
        let root = PathBuf::from(value);
        info!("Found {} environment variable: {}", self.var, root.display());

        if accept(&root) {
            Ok(Some(root))
        } else {
            warn!("{} ('{}') does not contain a vcpkg toolchain", self.var, root.display());
            Ok(None)
        }
    }
}

/// Asks for a root on `output` and reads answers from `input` until one is
/// accepted or input runs out
pub struct PromptStrategy<R, W> {
    input: R,
    output: W,
    cwd: PathBuf,
    reject_spaces: bool,
}

impl<R: BufRead, W: Write> PromptStrategy<R, W> {
    pub fn new(input: R, output: W, cwd: PathBuf) -> Self {
        // vcpkg on Windows breaks on install paths containing spaces
        Self { input, output, cwd, reject_spaces: cfg!(windows) }
    }

    pub fn reject_spaces(mut self, reject: bool) -> Self {
        self.reject_spaces = reject;
        self
    }

    fn absolute(&self, answer: &str) -> PathBuf {
        let path = Path::new(answer);
        let joined = if path.is_absolute() { path.to_path_buf() } else { self.cwd.join(path) };
        joined.clean()
    }
}

impl<R: BufRead, W: Write> RootStrategy for PromptStrategy<R, W> {
    fn name(&self) -> &str {
        "prompt"
    }

    fn locate(&mut self, accept: &dyn Fn(&Path) -> bool) -> Result<Option<PathBuf>> {
        loop {
            write!(
                self.output,
                "Please enter the path to your vcpkg installation (e.g. C:/vcpkg or /home/user/vcpkg): "
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line).context("Failed to read vcpkg path")?;
            if read == 0 {
                debug!("Prompt input closed");
                return Ok(None);
            }

            let answer = line.trim();
            if answer.is_empty() {
                continue;
            }

            let root = self.absolute(answer);
            let shown = root.to_string_lossy().replace('\\', "/");
            if self.reject_spaces && shown.contains(' ') {
                writeln!(self.output, "The vcpkg path should not contain spaces.")?;
                continue;
            }

            if accept(&root) {
                info!("Found vcpkg toolchain under {}", shown);
                return Ok(Some(root));
            }
            writeln!(self.output, "vcpkg toolchain file not found under '{}'.", shown)?;
        }
    }
}
