// Raster -> PNG. This is the "Download Drawing" button: whatever is on
// screen right now gets written out as a static image.

use crate::color::unpack_rgb;
use crate::error::Error;
use crate::types::FrameBuffer;

use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// File name used when the user doesn't pick one.
pub const DEFAULT_FILENAME: &str = "drawing.png";

/// Unpack 0x00RRGGBB pixels into an `image` RGB buffer.
pub fn to_rgb_image(fb: &FrameBuffer) -> RgbImage {
    ImageBuffer::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let (r, g, b) = unpack_rgb(fb.pixels[y as usize * fb.width + x as usize]);
        Rgb([r, g, b])
    })
}

/// Encode the frame buffer as PNG bytes.
pub fn encode_png(fb: &FrameBuffer) -> Result<Vec<u8>, Error> {
    let mut out = Cursor::new(Vec::new());
    to_rgb_image(fb).write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Encode and write to `path`, replacing any existing file.
pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    let bytes = encode_png(fb)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
