//! Modified Zobler soil-type grid (0.5°) ingestion and export.
//!
//! Stages, in pipeline order:
//!   `loader` (contizob.half → code matrix) →
//!   `grid` (lat/lon per cell) →
//!   `classes` (code → label) →
//!   `export` (flat CSV).
//!
//! `pipeline` runs them end to end.

pub mod classes;
pub mod coords;
pub mod error;
pub mod export;
pub mod grid;
pub mod loader;
pub mod pipeline;

pub use error::{Result, ZoblerError};
