//! Test utilities for pagekit
//!
//! This crate provides shared testing utilities used across the pagekit
//! workspace: JSON data fixtures, a counting element store standing in
//! for the document, and a deterministic clock for debounce timelines.

mod clock;
mod fixtures;
mod store;

pub use clock::StepClock;
pub use fixtures::{nested_data, simple_data};
pub use store::ElementStore;
