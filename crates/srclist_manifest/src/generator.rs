use anyhow::Result;
use log::{debug, info};
use srclist_core::{FileClass, ScanConfig, collect_files, resolve_roots};

use crate::{
    classifier::{Classifier, Verdict},
    config::Config,
    emitter::{ManifestOutputs, Manifests},
    types::{GenerateResult, SkippedFile},
};

/// Resolve, scan and classify, then write the three list files.
///
/// The output files are opened before the walk starts and only written once
/// every list is complete. Concurrent runs against the same output directory
/// are not coordinated.
pub fn run_generate(mut cfg: Config) -> Result<GenerateResult> {
    info!("Starting list generation");

    cfg.initialize()?;
    let root = cfg.root()?.clone();
    let roots = resolve_roots(&root, &cfg.targets)?;

    let outputs = ManifestOutputs::create(cfg.out_dir()?)?;

    let mut classifier = Classifier::new(cfg.exclusion_set(), cfg.host());
    if cfg.no_platform_filter {
        debug!("Platform filter disabled");
        classifier = classifier.without_platform_filter();
    }

    let scan = ScanConfig { root: &root, roots: &roots, mode: cfg.match_mode() };
    let mut result = generate_manifests(&scan, &classifier)?;

    info!(
        "[{}] Discovered {} source files and {} header files",
        cfg.label,
        result.source_count(),
        result.header_count()
    );

    result.written = outputs.write(&result.manifests)?;
    info!("List generation complete");
    Ok(result)
}

/// Build the lists in memory without touching any output file
pub fn generate_manifests(scan: &ScanConfig, classifier: &Classifier) -> Result<GenerateResult> {
    let mut manifests = Manifests::new();
    for root in scan.roots {
        manifests.header_dirs.push(root.target());
    }

    let files = collect_files(scan)?;
    let mut skipped = Vec::new();

    for file in &files {
        match classifier.classify(file) {
            Verdict::Listed(FileClass::Source) => manifests.source_files.push(file.manifest_path()),
            Verdict::Listed(FileClass::Header) => manifests.header_files.push(file.manifest_path()),
            Verdict::Incompatible => {
                debug!("Skipping OS-incompatible file: {}", file.manifest_path());
                skipped.push(SkippedFile {
                    file_name: file.file_name.clone(),
                    path: file.manifest_path(),
                });
            }
            Verdict::Excluded | Verdict::Ignored => {}
        }
    }

    debug!(
        "Classified {} files: {} sources, {} headers, {} platform skips",
        files.len(),
        manifests.source_files.len(),
        manifests.header_files.len(),
        skipped.len()
    );

    Ok(GenerateResult { manifests, skipped, files_scanned: files.len(), written: Vec::new() })
}
