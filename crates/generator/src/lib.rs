//! # Quotescope Series Generator
//!
//! Produces synthetic daily price series for the analytics pipeline.
//!
//! - **Bounded random walk:** `SeriesGenerator` compounds each close on the
//!   previous rounded close, with uniform noise and a gentle linear drift.
//! - **Injected randomness:** every entry point takes an `rand::Rng`, so a
//!   seeded `StdRng` reproduces a series exactly.
//! - **Anchor points:** `AnchorPoints` overwrites the tail of a generated series
//!   with known closes. It runs after generation and never alters the walk.

pub mod anchors;
pub mod error;
pub mod walk;

pub use anchors::AnchorPoints;
pub use error::GeneratorError;
pub use walk::{SeriesGenerator, WalkParams};
