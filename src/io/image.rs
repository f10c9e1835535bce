//! PNG export of painted canvases

use crate::io::error::{MondrianError, Result, invalid_parameter};
use crate::spatial::Canvas;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Rasterize a canvas into an RGBA image, one pixel per cell
///
/// # Errors
///
/// Returns an error if either canvas dimension does not fit in a `u32`
pub fn canvas_to_image<C: Canvas + ?Sized>(canvas: &C) -> Result<RgbaImage> {
    let width = u32::try_from(canvas.width())
        .map_err(|_overflow| invalid_parameter("width", &canvas.width(), &"exceeds u32 range"))?;
    let height = u32::try_from(canvas.height()).map_err(|_overflow| {
        invalid_parameter("height", &canvas.height(), &"exceeds u32 range")
    })?;

    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let color = canvas.get(y as usize, x as usize).unwrap_or_default();
        Rgba(color.rgba())
    });

    Ok(img)
}

/// Export a canvas as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - A canvas dimension does not fit in a `u32`
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_as_png<C: Canvas + ?Sized>(canvas: &C, output_path: &Path) -> Result<()> {
    let img = canvas_to_image(canvas)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MondrianError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| MondrianError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
