// IconSmith - core/pipeline.rs
//
// Run orchestration: source precondition check, flat raster pass, optional
// Linux icon-theme pass, ICO container pass, manifest assembly.
//
// Strictly sequential. A failure after the precondition check aborts the run
// and leaves already-written outputs in place; there is no rollback.

use crate::core::config::PipelineConfig;
use crate::core::svg::VectorSource;
use crate::core::{ico, raster};
use crate::util::error::{IconSmithError, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// What kind of asset a manifest record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Png,
    Ico,
}

/// One generated output file.
///
/// For the ICO container, `width`/`height` record the largest embedded frame.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedAsset {
    pub file_name: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub kind: AssetKind,
}

/// Ordered record of everything a run produced, for automation callers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Manifest {
    pub outputs: Vec<GeneratedAsset>,
}

/// Run the full pipeline.
///
/// `on_generated` is invoked once per completed output, in emission order, so
/// callers can report progress incrementally before a later step fails.
pub fn run<F>(config: &PipelineConfig, mut on_generated: F) -> Result<Manifest>
where
    F: FnMut(&GeneratedAsset),
{
    // Hard precondition: no output may be produced from a missing source.
    let source = VectorSource::load(&config.source)?;

    fs::create_dir_all(&config.out_dir).map_err(|e| IconSmithError::Io {
        path: config.out_dir.clone(),
        operation: "create output directory",
        source: e,
    })?;

    tracing::info!(
        source = %source.path().display(),
        out_dir = %config.out_dir.display(),
        "Generating icon assets"
    );

    let mut manifest = Manifest::default();
    let mut produced: HashSet<String> = HashSet::new();

    // Flat raster pass: each target rendered independently from the vector
    // source at its exact pixel size.
    for target in &config.raster_targets {
        let asset = write_png(&source, target.size, &target.file_name, &config.out_dir)?;
        produced.insert(asset.file_name.clone());
        on_generated(&asset);
        manifest.outputs.push(asset);
    }

    // Linux icon-theme pass. A size whose file name collided with a flat
    // target (128x128.png in the default layout) was already produced this
    // run and is skipped.
    if config.linux_icons {
        for &size in &config.linux_sizes {
            let file_name = format!("{size}x{size}.png");
            if produced.contains(&file_name) {
                tracing::debug!(file = %file_name, "Already produced this run, skipping");
                continue;
            }
            let asset = write_png(&source, size, &file_name, &config.out_dir)?;
            produced.insert(asset.file_name.clone());
            on_generated(&asset);
            manifest.outputs.push(asset);
        }
    }

    // Container pass: every frame rendered independently at its native size,
    // then packed into a single multi-size file.
    let ico_path = config.out_dir.join(&config.ico_file_name);
    ico::write_ico(&source, &config.ico_frame_sizes, &ico_path)?;
    let largest = config.ico_frame_sizes.iter().copied().max().unwrap_or(0);
    let asset = GeneratedAsset {
        file_name: config.ico_file_name.clone(),
        path: ico_path,
        width: largest,
        height: largest,
        kind: AssetKind::Ico,
    };
    on_generated(&asset);
    manifest.outputs.push(asset);

    tracing::info!(outputs = manifest.outputs.len(), "Icon generation complete");
    Ok(manifest)
}

/// Render one PNG and write it inside the output directory.
///
/// `fs::write` opens, writes, and closes in one call, so the file handle is
/// released as soon as the write completes.
fn write_png(
    source: &VectorSource,
    size: u32,
    file_name: &str,
    out_dir: &Path,
) -> Result<GeneratedAsset> {
    let data = raster::rasterize_png(source, size)?;
    let path = out_dir.join(file_name);
    fs::write(&path, &data).map_err(|e| IconSmithError::Io {
        path: path.clone(),
        operation: "write PNG",
        source: e,
    })?;

    tracing::debug!(file = %file_name, size, bytes = data.len(), "Wrote PNG");
    Ok(GeneratedAsset {
        file_name: file_name.to_string(),
        path,
        width: size,
        height: size,
        kind: AssetKind::Png,
    })
}
