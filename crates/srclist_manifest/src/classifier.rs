use log::trace;
use srclist_core::{
    DiscoveredFile, ExclusionSet, FileClass, HEADER_EXTENSIONS, HostPlatform, NameHeuristic,
    PlatformFilter, SOURCE_EXTENSIONS,
};

/// Outcome of classifying one discovered file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Excluded,
    Incompatible,
    Listed(FileClass),
    Ignored,
}

pub struct Classifier {
    exclusions: ExclusionSet,
    host: HostPlatform,
    platform_filter: Option<Box<dyn PlatformFilter>>,
}

impl Classifier {
    /// Classifier using the name heuristic for the given host
    pub fn new(exclusions: ExclusionSet, host: HostPlatform) -> Self {
        Self { exclusions, host, platform_filter: Some(Box::new(NameHeuristic)) }
    }

    pub fn with_platform_filter(mut self, filter: impl PlatformFilter + 'static) -> Self {
        self.platform_filter = Some(Box::new(filter));
        self
    }

    pub fn without_platform_filter(mut self) -> Self {
        self.platform_filter = None;
        self
    }

    /// Exclusion first, then platform, then extension
    pub fn classify(&self, file: &DiscoveredFile) -> Verdict {
        let name = file.file_name.as_str();

        if self.exclusions.contains(name) {
            trace!("Excluded by name: {}", name);
            return Verdict::Excluded;
        }

        if let Some(filter) = &self.platform_filter
            && filter.is_incompatible(name, self.host)
        {
            trace!("Incompatible with {}: {}", self.host, name);
            return Verdict::Incompatible;
        }

        let ext = file.extension();
        if SOURCE_EXTENSIONS.contains(&ext) {
            Verdict::Listed(FileClass::Source)
        } else if HEADER_EXTENSIONS.contains(&ext) {
            Verdict::Listed(FileClass::Header)
        } else {
            Verdict::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> DiscoveredFile {
        DiscoveredFile { rel_dir: "src".to_string(), file_name: name.to_string() }
    }

    fn linux() -> Classifier {
        Classifier::new(ExclusionSet::default(), HostPlatform::Linux)
    }

    #[test]
    fn test_classifies_by_extension() {
        let c = linux();
        assert_eq!(c.classify(&file("a.cpp")), Verdict::Listed(FileClass::Source));
        assert_eq!(c.classify(&file("a.c")), Verdict::Listed(FileClass::Source));
        assert_eq!(c.classify(&file("a.h")), Verdict::Listed(FileClass::Header));
        assert_eq!(c.classify(&file("a.hpp")), Verdict::Listed(FileClass::Header));
        assert_eq!(c.classify(&file("a.txt")), Verdict::Ignored);
        assert_eq!(c.classify(&file("a.CPP")), Verdict::Ignored);
    }

    #[test]
    fn test_exclusion_wins_over_everything() {
        // boxer_linux.cpp would be compatible on Linux and a valid source
        assert_eq!(linux().classify(&file("boxer_linux.cpp")), Verdict::Excluded);
        // boxer_win.cpp would otherwise be reported as incompatible
        assert_eq!(linux().classify(&file("boxer_win.cpp")), Verdict::Excluded);
    }

    #[test]
    fn test_platform_check_applies_to_any_extension() {
        assert_eq!(linux().classify(&file("win_only.cpp")), Verdict::Incompatible);
        assert_eq!(linux().classify(&file("mac_notes.txt")), Verdict::Incompatible);
        assert_eq!(linux().classify(&file("input_linux.cpp")), Verdict::Listed(FileClass::Source));
    }

    #[test]
    fn test_without_platform_filter() {
        let c = linux().without_platform_filter();
        assert_eq!(c.classify(&file("win_only.cpp")), Verdict::Listed(FileClass::Source));
    }

    #[test]
    fn test_custom_platform_filter() {
        let c = linux().with_platform_filter(|name: &str, _: HostPlatform| name.starts_with("x_"));
        assert_eq!(c.classify(&file("x_a.cpp")), Verdict::Incompatible);
        assert_eq!(c.classify(&file("win_only.cpp")), Verdict::Listed(FileClass::Source));
    }
}
