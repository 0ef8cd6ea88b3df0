//! Shared types and models for the AgriDash farm-monitoring dashboard
//!
//! This crate contains the domain model and the pure computations shared
//! between the backend, the browser front end (via WASM), and tests.

pub mod alerts;
pub mod geometry;
pub mod models;
pub mod types;
pub mod validation;

pub use alerts::*;
pub use geometry::*;
pub use models::*;
pub use types::*;
pub use validation::*;
