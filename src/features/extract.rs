use crate::features::crop_image::CropImage;
use crate::features::feature_vector::FeatureVector;
use crate::features::hsv::value_saturation;
use crate::features::strategy::FeatureStrategy;

/// Canonicalizes `image` to 224×224 and computes its feature vector.
///
/// Pure: the input is not modified and equal inputs give bit-identical
/// outputs.
pub fn extract(image: &CropImage, strategy: FeatureStrategy) -> FeatureVector {
    let values = image.canonical().normalized();
    let (brightness, second_stat) = match strategy {
        FeatureStrategy::MeanVariance       => mean_variance(&values),
        FeatureStrategy::HsvValueSaturation => value_saturation_means(&values),
    };
    FeatureVector { brightness, second_stat, strategy }
}

/// Mean and population variance over a flat slice of channel values.
fn mean_variance(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, variance)
}

/// Mean HSV value and mean saturation over a flat R, G, B, ... slice.
fn value_saturation_means(values: &[f64]) -> (f64, f64) {
    let pixels = values.len() / 3;
    if pixels == 0 {
        return (0.0, 0.0);
    }
    let (v_sum, s_sum) = values
        .chunks_exact(3)
        .map(|p| value_saturation(p[0], p[1], p[2]))
        .fold((0.0, 0.0), |(va, sa), (v, s)| (va + v, sa + s));
    let n = pixels as f64;
    (v_sum / n, s_sum / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::crop_image::CANONICAL_SIZE;
    use image::{Rgb, RgbImage};

    fn solid(rgb: [u8; 3]) -> CropImage {
        CropImage::from_rgb(RgbImage::from_pixel(CANONICAL_SIZE, CANONICAL_SIZE, Rgb(rgb)))
    }

    /// Left half `a`, right half `b`.
    fn split(a: [u8; 3], b: [u8; 3]) -> CropImage {
        let img = RgbImage::from_fn(CANONICAL_SIZE, CANONICAL_SIZE, |x, _| {
            if x < CANONICAL_SIZE / 2 { Rgb(a) } else { Rgb(b) }
        });
        CropImage::from_rgb(img)
    }

    #[test]
    fn solid_gray_has_no_variance() {
        let f = extract(&solid([102, 102, 102]), FeatureStrategy::MeanVariance);
        assert!((f.brightness - 0.4).abs() < 1e-12);
        assert!(f.second_stat.abs() < 1e-12);
    }

    #[test]
    fn black_white_split() {
        let f = extract(&split([0, 0, 0], [255, 255, 255]), FeatureStrategy::MeanVariance);
        assert!((f.brightness - 0.5).abs() < 1e-12);
        assert!((f.second_stat - 0.25).abs() < 1e-12);
        assert_eq!(f.strategy, FeatureStrategy::MeanVariance);
    }

    #[test]
    fn hsv_strategy_on_green_leaf() {
        // (51, 204, 102) -> V = 0.8, S = 0.75
        let f = extract(&solid([51, 204, 102]), FeatureStrategy::HsvValueSaturation);
        assert!((f.brightness - 0.8).abs() < 1e-12);
        assert!((f.second_stat - 0.75).abs() < 1e-12);
    }

    #[test]
    fn strategies_disagree_on_same_image() {
        let img = solid([51, 204, 102]);
        let mv  = extract(&img, FeatureStrategy::MeanVariance);
        let hsv = extract(&img, FeatureStrategy::HsvValueSaturation);
        assert!((mv.brightness - 0.466_666_666_666).abs() < 1e-9);
        assert!(mv.brightness < hsv.brightness);
    }

    #[test]
    fn non_canonical_input_is_resized_first() {
        let small = CropImage::from_rgb(RgbImage::from_pixel(20, 30, Rgb([128, 128, 128])));
        let f = extract(&small, FeatureStrategy::MeanVariance);
        assert!((f.brightness - 128.0 / 255.0).abs() < 0.01);
        assert!(f.second_stat < 1e-3);
    }

    #[test]
    fn extraction_is_repeatable() {
        let img = split([30, 200, 60], [180, 90, 20]);
        let a = extract(&img, FeatureStrategy::HsvValueSaturation);
        let b = extract(&img, FeatureStrategy::HsvValueSaturation);
        assert_eq!(a.brightness.to_bits(), b.brightness.to_bits());
        assert_eq!(a.second_stat.to_bits(), b.second_stat.to_bits());
    }
}
