//! Core data types shared across the application.

pub mod rgb;

pub use rgb::RgbColor;
