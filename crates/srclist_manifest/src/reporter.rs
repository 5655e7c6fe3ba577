use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::types::{GenerateResult, SkippedFile};

pub fn print_skipped<W: Write>(writer: &mut W, skipped: &[SkippedFile], label: &str) -> io::Result<()> {
    debug!("Printing {} platform skips", skipped.len());
    for s in skipped {
        writeln!(
            writer,
            "{} [{}] {} is being skipped because it seems to be OS-incompatible.",
            "⚠".yellow().bold(),
            label,
            format!("\"{}\"", s.file_name).yellow()
        )?;
    }
    Ok(())
}

pub fn print_summary<W: Write>(writer: &mut W, result: &GenerateResult, label: &str) -> io::Result<()> {
    writeln!(
        writer,
        "{} [{}] Discovered {} source files and {} header files.",
        "✓".green().bold(),
        label,
        result.source_count().to_string().cyan(),
        result.header_count().to_string().cyan()
    )?;
    for path in &result.written {
        writeln!(writer, "  {} {}", "→".bright_blue(), path.display())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::Manifests;
    use std::path::PathBuf;

    fn plain(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_counts_and_paths() {
        colored::control::set_override(false);
        let mut manifests = Manifests::new();
        manifests.source_files.push("engine/a.cpp");
        manifests.source_files.push("engine/c.cpp");
        manifests.header_files.push("engine/b.h");
        let result = GenerateResult {
            manifests,
            skipped: Vec::new(),
            files_scanned: 4,
            written: vec![PathBuf::from("scripts/SourceFiles.cmake")],
        };

        let mut buf = Vec::new();
        print_summary(&mut buf, &result, "gen").unwrap();
        let out = plain(buf);
        assert!(out.contains("[gen] Discovered 2 source files and 1 header files."));
        assert!(out.contains("scripts/SourceFiles.cmake"));
    }

    #[test]
    fn test_skipped_names_the_file() {
        colored::control::set_override(false);
        let skipped = vec![SkippedFile {
            file_name: "win_only.cpp".to_string(),
            path: "engine/win_only.cpp".to_string(),
        }];

        let mut buf = Vec::new();
        print_skipped(&mut buf, &skipped, "gen").unwrap();
        assert!(plain(buf).contains("[gen] \"win_only.cpp\" is being skipped"));
    }
}
