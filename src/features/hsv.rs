/// Converts one normalized RGB triple to `(value, saturation)`.
///
/// Hue is never consumed by the engine so it is not computed.
/// Value is `max(r, g, b)`; saturation is `(max - min) / max`, and 0 for black.
pub fn value_saturation(r: f64, g: f64, b: f64) -> (f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let saturation = if max > 0.0 { (max - min) / max } else { 0.0 };
    (max, saturation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_has_zero_saturation() {
        assert_eq!(value_saturation(0.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn gray_is_unsaturated() {
        let (v, s) = value_saturation(0.5, 0.5, 0.5);
        assert_eq!(v, 0.5);
        assert_eq!(s, 0.0);
    }

    #[test]
    fn pure_green_is_fully_saturated() {
        assert_eq!(value_saturation(0.0, 1.0, 0.0), (1.0, 1.0));
    }

    #[test]
    fn leaf_green() {
        let (v, s) = value_saturation(0.2, 0.8, 0.4);
        assert_eq!(v, 0.8);
        assert!((s - 0.75).abs() < 1e-12);
    }
}
