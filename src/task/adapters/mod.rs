//! Adapter implementations for task ports and report rendering.

pub mod cloudant;
pub mod marvin;
pub mod memory;
pub mod presentation;
