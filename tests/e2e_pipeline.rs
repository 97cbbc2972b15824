// IconSmith - tests/e2e_pipeline.rs
//
// End-to-end tests for the icon generation pipeline.
//
// These tests exercise the real filesystem, real SVG parsing, real
// rasterization, and real ICO encoding - no mocks, no stubs. Each test runs
// the full pipeline against the on-disk SVG fixture and inspects the files it
// writes, so the whole path from vector source to packaged asset is covered.

use iconsmith::core::config::PipelineConfig;
use iconsmith::core::pipeline::{self, AssetKind};
use iconsmith::util::error::{IconSmithError, SourceError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk SVG fixture.
fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("icon.svg")
}

/// Default configuration pointed at the fixture and a scratch output dir.
fn config_for(out_dir: &Path) -> PipelineConfig {
    PipelineConfig {
        source: fixture(),
        out_dir: out_dir.to_path_buf(),
        ..PipelineConfig::default()
    }
}

/// Map of file name to raw bytes for every file in `dir`.
fn snapshot_dir(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            let name = entry.file_name().to_str().unwrap().to_string();
            let bytes = fs::read(entry.path()).unwrap();
            (name, bytes)
        })
        .collect()
}

// =============================================================================
// Default run
// =============================================================================

/// A plain run against an empty output directory produces exactly six files:
/// the five flat PNGs at their exact pixel dimensions plus icon.ico.
#[test]
fn e2e_default_run_produces_six_files_with_exact_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    let manifest = pipeline::run(&config, |_| {}).unwrap();

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 6);
    assert_eq!(manifest.outputs.len(), 6);

    for (size, name) in [
        (32u32, "32x32.png"),
        (128, "128x128.png"),
        (256, "128x128@2x.png"),
        (512, "icon.png"),
        (1024, "icon@2x.png"),
    ] {
        let path = dir.path().join(name);
        let (w, h) = image::image_dimensions(&path)
            .unwrap_or_else(|e| panic!("cannot read {name}: {e}"));
        assert_eq!((w, h), (size, size), "wrong dimensions for {name}");
    }
    assert!(dir.path().join("icon.ico").is_file());
}

/// The container holds exactly four frames at 16/32/48/256, in that order,
/// so size-naive consumers open the 16px frame as the default image.
#[test]
fn e2e_ico_contains_four_frames_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    pipeline::run(&config, |_| {}).unwrap();

    let file = fs::File::open(dir.path().join("icon.ico")).unwrap();
    let icon_dir = ico::IconDir::read(file).unwrap();
    let sizes: Vec<(u32, u32)> = icon_dir
        .entries()
        .iter()
        .map(|e| (e.width(), e.height()))
        .collect();
    assert_eq!(sizes, vec![(16, 16), (32, 32), (48, 48), (256, 256)]);
}

/// The progress callback fires once per output, in emission order, with the
/// manifest recording the same assets.
#[test]
fn e2e_progress_callback_reports_every_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    let mut reported: Vec<String> = Vec::new();
    let manifest = pipeline::run(&config, |asset| {
        reported.push(asset.file_name.clone());
    })
    .unwrap();

    let manifest_names: Vec<String> = manifest
        .outputs
        .iter()
        .map(|a| a.file_name.clone())
        .collect();
    assert_eq!(reported, manifest_names);
    assert_eq!(
        reported,
        vec![
            "32x32.png",
            "128x128.png",
            "128x128@2x.png",
            "icon.png",
            "icon@2x.png",
            "icon.ico",
        ]
    );
    assert_eq!(manifest.outputs.last().unwrap().kind, AssetKind::Ico);
}

// =============================================================================
// Missing source
// =============================================================================

/// A missing source aborts before any write: the error names the path and the
/// output directory stays empty.
#[test]
fn e2e_missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(dir.path());
    config.source = dir.path().join("no-such-icon.svg");

    let err = pipeline::run(&config, |_| {}).unwrap_err();
    match &err {
        IconSmithError::Source(SourceError::NotFound { path }) => {
            assert!(path.ends_with("no-such-icon.svg"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(
        err.to_string().contains("no-such-icon.svg"),
        "error message must name the missing path: {err}"
    );
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

// =============================================================================
// Idempotence
// =============================================================================

/// Two runs over an unchanged source produce byte-identical outputs; existing
/// files are overwritten, not merged.
#[test]
fn e2e_second_run_overwrites_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    pipeline::run(&config, |_| {}).unwrap();
    let first = snapshot_dir(dir.path());

    pipeline::run(&config, |_| {}).unwrap();
    let second = snapshot_dir(dir.path());

    assert_eq!(first.len(), 6);
    assert_eq!(first, second, "re-run must be byte-for-byte identical");
}

// =============================================================================
// Linux icon-theme pass
// =============================================================================

/// With the Linux pass enabled the theme sizes appear alongside the flat set,
/// with the colliding 128x128.png produced only once.
#[test]
fn e2e_linux_pass_adds_theme_sizes_without_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(dir.path());
    config.linux_icons = true;

    let manifest = pipeline::run(&config, |_| {}).unwrap();

    // 5 flat + 7 Linux (128x128.png deduplicated out of 8) + 1 ICO.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 13);
    assert_eq!(manifest.outputs.len(), 13);

    let names: Vec<&str> = manifest
        .outputs
        .iter()
        .map(|a| a.file_name.as_str())
        .collect();
    let unique: std::collections::HashSet<&&str> = names.iter().collect();
    assert_eq!(unique.len(), names.len(), "no duplicate outputs: {names:?}");
    assert!(names.contains(&"96x96.png"));
    assert!(names.contains(&"512x512.png"));

    let (w, h) = image::image_dimensions(dir.path().join("96x96.png")).unwrap();
    assert_eq!((w, h), (96, 96));
}
