use std::fmt;

/// CMake build type passed to the configure step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildProfile {
    #[default]
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildProfile {
    /// Case-insensitive match on the CMake build type names
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_ascii_lowercase().as_str() {
            "debug" => Some(BuildProfile::Debug),
            "release" => Some(BuildProfile::Release),
            "relwithdebinfo" => Some(BuildProfile::RelWithDebInfo),
            "minsizerel" => Some(BuildProfile::MinSizeRel),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildProfile::Debug => "Debug",
            BuildProfile::Release => "Release",
            BuildProfile::RelWithDebInfo => "RelWithDebInfo",
            BuildProfile::MinSizeRel => "MinSizeRel",
        }
    }

    /// Cache definitions for `cmake -S . -B <dir>`
    pub fn cmake_defines(self, toolchain_file: &str) -> Vec<String> {
        vec![
            format!("-DCMAKE_TOOLCHAIN_FILE={}", toolchain_file),
            format!("-DCMAKE_BUILD_TYPE={}", self.as_str()),
        ]
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
