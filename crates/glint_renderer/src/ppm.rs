//! Binary PPM (P6) serialization of a framebuffer.
//!
//! The one and only output format: a `P6` header declaring width, height
//! and a maximum channel value of 255, followed by one raw RGB triple per
//! pixel in row-major order. Colors stay unclamped in the framebuffer;
//! clamping and scaling happen here, at the serialization boundary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::renderer::Framebuffer;
use crate::Color;

/// Errors from the image serialization boundary.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output image could not be written.
    #[error("failed to write output image: {0}")]
    OutputWriteFailed(#[from] std::io::Error),
}

/// Convert a color to an 8-bit RGB triple.
///
/// Each channel is clamped to [0, 1] and scaled to 0-255.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (255.0 * color.x.clamp(0.0, 1.0)) as u8;
    let g = (255.0 * color.y.clamp(0.0, 1.0)) as u8;
    let b = (255.0 * color.z.clamp(0.0, 1.0)) as u8;
    [r, g, b]
}

/// Serialize the framebuffer as binary PPM to any writer.
pub fn write_ppm<W: Write>(framebuffer: &Framebuffer, mut writer: W) -> Result<(), RenderError> {
    write!(
        writer,
        "P6\n{} {}\n255\n",
        framebuffer.width, framebuffer.height
    )?;

    let mut payload = Vec::with_capacity(framebuffer.pixels.len() * 3);
    for &color in &framebuffer.pixels {
        payload.extend_from_slice(&color_to_rgb(color));
    }
    writer.write_all(&payload)?;
    writer.flush()?;

    Ok(())
}

/// Serialize the framebuffer as binary PPM to a file.
pub fn save_ppm(framebuffer: &Framebuffer, path: &Path) -> Result<(), RenderError> {
    let file = File::create(path)?;
    write_ppm(framebuffer, BufWriter::new(file))
}
