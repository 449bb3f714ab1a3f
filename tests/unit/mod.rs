//! Unit tests exercising each component through the public API.

pub mod selectors;
