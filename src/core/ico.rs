// IconSmith - core/ico.rs
//
// Windows multi-size icon container. Every frame is rasterized from the
// vector source at its native size before encoding; the container embeds the
// frames as-is with no resampling.

use crate::core::raster;
use crate::core::svg::VectorSource;
use crate::util::error::{ContainerError, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use std::fs::File;
use std::path::Path;

/// Encode one frame per entry of `sizes` into a single ICO file at `path`.
///
/// Frame order is preserved: the first frame is what size-naive consumers
/// open as the default image.
pub fn write_ico(source: &VectorSource, sizes: &[u32], path: &Path) -> Result<()> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for &size in sizes {
        let rgba = raster::rasterize_rgba(source, size)?;
        let image = IconImage::from_rgba_data(size, size, rgba);
        let entry = IconDirEntry::encode(&image)
            .map_err(|e| ContainerError::EncodeFrame { size, source: e })?;
        icon_dir.add_entry(entry);
        tracing::debug!(size, "Encoded ICO frame");
    }

    // The handle is moved into write() and dropped as soon as it returns,
    // success or failure.
    let file = File::create(path).map_err(|e| ContainerError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    icon_dir.write(file).map_err(|e| ContainerError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><rect x="10" y="10" width="80" height="80" fill="#2266cc"/></svg>"##;

    #[test]
    fn test_write_ico_embeds_frames_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let svg_path = dir.path().join("icon.svg");
        fs::write(&svg_path, SQUARE_SVG).unwrap();
        let source = VectorSource::load(&svg_path).unwrap();

        let ico_path = dir.path().join("icon.ico");
        write_ico(&source, &[16, 32, 48, 256], &ico_path).unwrap();

        let icon_dir = IconDir::read(File::open(&ico_path).unwrap()).unwrap();
        let sizes: Vec<(u32, u32)> = icon_dir
            .entries()
            .iter()
            .map(|e| (e.width(), e.height()))
            .collect();
        assert_eq!(sizes, vec![(16, 16), (32, 32), (48, 48), (256, 256)]);
    }

    #[test]
    fn test_write_ico_single_frame() {
        let dir = tempfile::tempdir().unwrap();
        let svg_path = dir.path().join("icon.svg");
        fs::write(&svg_path, SQUARE_SVG).unwrap();
        let source = VectorSource::load(&svg_path).unwrap();

        let ico_path = dir.path().join("single.ico");
        write_ico(&source, &[48], &ico_path).unwrap();

        let icon_dir = IconDir::read(File::open(&ico_path).unwrap()).unwrap();
        assert_eq!(icon_dir.entries().len(), 1);
        assert_eq!(icon_dir.entries()[0].width(), 48);
    }
}
