//! Step definitions for cumulative flow scenarios.

pub mod then;
pub mod when;
pub mod world;
