// IconSmith - core/raster.rs
//
// Per-size rasterization of the vector source. Every call parses and renders
// from the original vector data; an output is never produced by scaling a
// previously rendered bitmap, so each size is vector-perfect.

use crate::core::svg::VectorSource;
use crate::util::error::{RenderError, Result};
use resvg::tiny_skia;

/// Render the source at exactly `size` x `size` pixels.
pub fn rasterize(source: &VectorSource, size: u32) -> Result<tiny_skia::Pixmap> {
    let tree = source.parse()?;

    let mut pixmap =
        tiny_skia::Pixmap::new(size, size).ok_or(RenderError::PixmapAlloc { size })?;

    let scale_x = size as f32 / tree.size().width();
    let scale_y = size as f32 / tree.size().height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    tracing::debug!(size, "Rasterized");
    Ok(pixmap)
}

/// Render the source and encode the result as PNG bytes.
pub fn rasterize_png(source: &VectorSource, size: u32) -> Result<Vec<u8>> {
    let pixmap = rasterize(source, size)?;
    pixmap.encode_png().map_err(|e| {
        RenderError::PngEncode {
            size,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Render the source to raw RGBA bytes (row-major) for container embedding.
pub fn rasterize_rgba(source: &VectorSource, size: u32) -> Result<Vec<u8>> {
    Ok(rasterize(source, size)?.take())
}
