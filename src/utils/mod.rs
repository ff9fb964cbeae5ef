pub mod aqi;
pub mod format;
