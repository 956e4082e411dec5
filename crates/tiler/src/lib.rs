//! Candytrail path tiler - freehand stroke to game tile conversion
//!
//! This crate provides the core path tiling logic for the game board:
//! - [`types`] - Raw input samples, palette colors, and tile records
//! - [`resample`] - Evenly spaced positions along a drawn stroke
//! - [`color`] - Palette assignment under the 7-tile fairness rule
//! - [`validation`] - Structural checks over generated sequences
//! - [`pipeline`] - The combined stroke-to-tiles pipeline
//!
//! Everything here is pure computation over in-memory slices: no I/O,
//! no shared state, no concurrency. The only non-determinism is the
//! color tie-break, which takes an injectable `rand::Rng` so tests can
//! run seeded.

pub mod color;
pub mod constants;
pub mod pipeline;
pub mod resample;
pub mod types;
pub mod validation;

pub use color::*;
pub use constants::*;
pub use pipeline::*;
pub use resample::*;
pub use types::*;
pub use validation::*;
