//! Constants for file classification and output placement.
//!
//! Extensions are compared against the text after the last `.` of a file
//! name, case-sensitively, so `Foo.CPP` is not a source file.

/// Extensions of files that go into the `SOURCE_FILES` list
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "c",   // C
    "cpp", // C++
];

/// Extensions of files that go into the `HEADER_FILES` list
pub const HEADER_EXTENSIONS: &[&str] = &[
    "h",   // C / C++
    "hpp", // C++
];

/// File names that are compiled into a separate static library and must
/// never be listed again
pub const DEFAULT_EXCLUSIONS: &[&str] = &["boxer_linux.cpp", "boxer_osx.mm", "boxer_win.cpp"];

/// Directory, relative to the project root, that receives the generated lists
pub const DEFAULT_OUT_DIR: &str = "scripts";
