use image::ImageFormat;
use thiserror::Error;

/// Raised when uploaded bytes cannot be turned into a `CropImage`.
///
/// Only JPEG and PNG are accepted. Anything else fails before feature
/// extraction starts, so no partial assessment is ever produced.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("input is empty")]
    Empty,

    #[error("input is not a recognized image format")]
    Unrecognized,

    #[error("unsupported image format {0:?}; upload a JPEG or PNG")]
    Unsupported(ImageFormat),

    #[error("image data is corrupt: {0}")]
    Corrupt(#[from] image::ImageError),
}

/// Raised while loading `agriguard.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
