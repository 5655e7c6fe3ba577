use std::{fmt, str::FromStr};

/// Operating system the lists are generated on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Linux,
    Darwin,
    Windows,
    Other,
}

impl HostPlatform {
    pub fn current() -> Self {
        match std::env::consts::OS {
            "linux" => HostPlatform::Linux,
            "macos" => HostPlatform::Darwin,
            "windows" => HostPlatform::Windows,
            _ => HostPlatform::Other,
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostPlatform::Linux => "Linux",
            HostPlatform::Darwin => "Darwin",
            HostPlatform::Windows => "Windows",
            HostPlatform::Other => "Other",
        };
        f.write_str(name)
    }
}

impl FromStr for HostPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linux" => Ok(HostPlatform::Linux),
            "darwin" | "macos" | "mac" => Ok(HostPlatform::Darwin),
            "windows" | "win" => Ok(HostPlatform::Windows),
            "other" => Ok(HostPlatform::Other),
            _ => Err(format!("unknown host platform '{}' (expected linux, darwin, windows or other)", s)),
        }
    }
}

/// Decides whether a file targets a platform other than the host
pub trait PlatformFilter {
    fn is_incompatible(&self, file_name: &str, host: HostPlatform) -> bool;
}

impl<F> PlatformFilter for F
where
    F: Fn(&str, HostPlatform) -> bool,
{
    fn is_incompatible(&self, file_name: &str, host: HostPlatform) -> bool {
        self(file_name, host)
    }
}

const PLATFORM_TOKENS: &[(&str, HostPlatform)] = &[
    ("linux", HostPlatform::Linux),
    ("mac", HostPlatform::Darwin),
    ("win", HostPlatform::Windows),
];

/// Substring match on the lowercased file name.
///
/// Every token is checked on its own, so `window_linux.cpp` is rejected on
/// Linux because of `win`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameHeuristic;

impl PlatformFilter for NameHeuristic {
    fn is_incompatible(&self, file_name: &str, host: HostPlatform) -> bool {
        let lower = file_name.to_lowercase();
        PLATFORM_TOKENS.iter().any(|(token, platform)| lower.contains(token) && host != *platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_skips_foreign_platform_files() {
        let h = NameHeuristic;
        assert!(h.is_incompatible("win_only.cpp", HostPlatform::Linux));
        assert!(h.is_incompatible("Window_Mac.mm", HostPlatform::Linux));
        assert!(h.is_incompatible("platform_linux.cpp", HostPlatform::Darwin));
        assert!(h.is_incompatible("MacInput.cpp", HostPlatform::Windows));
    }

    #[test]
    fn test_heuristic_keeps_host_files() {
        let h = NameHeuristic;
        assert!(!h.is_incompatible("platform_linux.cpp", HostPlatform::Linux));
        assert!(!h.is_incompatible("Win32Window.cpp", HostPlatform::Windows));
        assert!(!h.is_incompatible("renderer.cpp", HostPlatform::Linux));
    }

    #[test]
    fn test_heuristic_checks_each_token() {
        assert!(NameHeuristic.is_incompatible("window_linux.cpp", HostPlatform::Linux));
    }

    #[test]
    fn test_unknown_host_rejects_every_token() {
        let h = NameHeuristic;
        assert!(h.is_incompatible("linux.cpp", HostPlatform::Other));
        assert!(!h.is_incompatible("main.cpp", HostPlatform::Other));
    }

    #[test]
    fn test_closure_filter() {
        let never = |_: &str, _: HostPlatform| false;
        assert!(!never.is_incompatible("win_only.cpp", HostPlatform::Linux));
    }

    #[test]
    fn test_parse_host_platform() {
        assert_eq!("Linux".parse::<HostPlatform>().unwrap(), HostPlatform::Linux);
        assert_eq!("macos".parse::<HostPlatform>().unwrap(), HostPlatform::Darwin);
        assert_eq!("WINDOWS".parse::<HostPlatform>().unwrap(), HostPlatform::Windows);
        assert!("beos".parse::<HostPlatform>().is_err());
    }
}
