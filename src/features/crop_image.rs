use image::imageops::FilterType;
use image::{ImageFormat, RgbImage};

use crate::error::DecodeError;

/// Side length of the square every image is resized to before analysis.
pub const CANONICAL_SIZE: u32 = 224;

/// An immutable RGB image of a crop or leaf.
///
/// All transforms return a new `CropImage`; the wrapped buffer is never
/// exposed mutably.
#[derive(Debug, Clone, PartialEq)]
pub struct CropImage {
    pixels: RgbImage,
}

impl CropImage {
    /// Decodes JPEG or PNG bytes into an 8-bit RGB image.
    ///
    /// Alpha and grayscale inputs are converted to three channels. Any other
    /// container format is rejected even if the `image` crate recognizes it.
    pub fn decode(bytes: &[u8]) -> Result<CropImage, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        let format = image::guess_format(bytes).map_err(|_| DecodeError::Unrecognized)?;
        match format {
            ImageFormat::Png | ImageFormat::Jpeg => {}
            other => return Err(DecodeError::Unsupported(other)),
        }
        let decoded = image::load_from_memory_with_format(bytes, format)?;
        Ok(CropImage { pixels: decoded.to_rgb8() })
    }

    pub fn from_rgb(pixels: RgbImage) -> CropImage {
        CropImage { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.pixels
    }

    /// Returns a `CANONICAL_SIZE` square copy (Lanczos3). Images that are
    /// already canonical are copied unchanged so their statistics are exact.
    pub fn canonical(&self) -> CropImage {
        if self.pixels.dimensions() == (CANONICAL_SIZE, CANONICAL_SIZE) {
            return self.clone();
        }
        let resized = image::imageops::resize(
            &self.pixels,
            CANONICAL_SIZE,
            CANONICAL_SIZE,
            FilterType::Lanczos3,
        );
        CropImage { pixels: resized }
    }

    /// Flattens the image as R, G, B, ... normalized to [0, 1].
    pub fn normalized(&self) -> Vec<f64> {
        self.pixels
            .pixels()
            .flat_map(|p| p.0.iter().map(|&c| c as f64 / 255.0))
            .collect()
    }
}
