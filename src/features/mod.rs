pub mod crop_image;
pub mod extract;
pub mod feature_vector;
pub mod hsv;
pub mod strategy;

pub use crop_image::{CropImage, CANONICAL_SIZE};
pub use extract::extract;
pub use feature_vector::FeatureVector;
pub use strategy::FeatureStrategy;
