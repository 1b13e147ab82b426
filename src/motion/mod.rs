//! Pointer-driven animation: damped springs and the pointer tracker.

pub mod pointer;
pub mod spring;

pub use pointer::{mirror, PointerTracker};
pub use spring::{Spring, SpringPoint};
