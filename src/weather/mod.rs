pub mod weather_input;

pub use weather_input::{WeatherInput, HUMIDITY_RANGE_PCT, TEMPERATURE_RANGE_C, WIND_RANGE_KMH};
