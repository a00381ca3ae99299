use serde::{Serialize, Deserialize};

/// Inclusive `(min, max)` slider ranges.
pub const TEMPERATURE_RANGE_C: (f64, f64) = (10.0, 45.0);
pub const HUMIDITY_RANGE_PCT:  (f64, f64) = (20.0, 100.0);
pub const WIND_RANGE_KMH:      (f64, f64) = (0.0, 30.0);

/// Field conditions supplied alongside an image.
///
/// Only `wind_speed` influences the advisory plan; temperature and humidity
/// are carried through to the report for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherInput {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// km/h.
    pub wind_speed: f64,
}

impl Default for WeatherInput {
    fn default() -> Self {
        WeatherInput { temperature: 28.0, humidity: 65.0, wind_speed: 6.0 }
    }
}

impl WeatherInput {
    /// Returns a copy with every field pinned into its slider range.
    /// Non-finite values fall back to the default for that field.
    pub fn clamped(&self) -> WeatherInput {
        let d = WeatherInput::default();
        WeatherInput {
            temperature: clamp_or(self.temperature, TEMPERATURE_RANGE_C, d.temperature),
            humidity:    clamp_or(self.humidity, HUMIDITY_RANGE_PCT, d.humidity),
            wind_speed:  clamp_or(self.wind_speed, WIND_RANGE_KMH, d.wind_speed),
        }
    }
}

fn clamp_or(v: f64, (lo, hi): (f64, f64), fallback: f64) -> f64 {
    if v.is_finite() { v.clamp(lo, hi) } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_slider_centres() {
        let w = WeatherInput::default();
        assert_eq!((w.temperature, w.humidity, w.wind_speed), (28.0, 65.0, 6.0));
    }

    #[test]
    fn clamped_pins_out_of_range_values() {
        let w = WeatherInput { temperature: -5.0, humidity: 140.0, wind_speed: 31.5 }.clamped();
        assert_eq!((w.temperature, w.humidity, w.wind_speed), (10.0, 100.0, 30.0));
    }

    #[test]
    fn clamped_keeps_in_range_values() {
        let w = WeatherInput { temperature: 33.0, humidity: 40.0, wind_speed: 12.0 };
        assert_eq!(w.clamped(), w);
    }

    #[test]
    fn nan_falls_back_to_default() {
        let w = WeatherInput { temperature: f64::NAN, humidity: 50.0, wind_speed: f64::INFINITY }.clamped();
        assert_eq!(w.temperature, 28.0);
        assert_eq!(w.wind_speed, 6.0);
    }
}
