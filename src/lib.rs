//! Folio — themeable terminal portfolio card.
//!
//! This library provides the building blocks for the Folio application:
//! the theme registry, spring-damped pointer tracking, the decorative
//! background compositor, and the page section renderers.

// Module declarations
pub mod config;
pub mod constants;
pub mod content;
pub mod models;
pub mod motion;
pub mod tui;
