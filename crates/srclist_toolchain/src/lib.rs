//! Locating the vcpkg toolchain file for the CMake configure step.
//!
//! A [`ToolchainResolver`] asks a list of [`RootStrategy`] implementations for
//! a package-manager root in order, accepting the first one that contains
//! `scripts/buildsystems/vcpkg.cmake`. The generator never depends on this
//! crate; only the command line wires the two together.

mod profile;
mod resolver;
mod strategy;

pub use profile::BuildProfile;
pub use resolver::{TOOLCHAIN_SUBPATH, ToolchainResolver, toolchain_file};
pub use strategy::{EnvStrategy, PromptStrategy, RootStrategy, VCPKG_ROOT_VAR};
