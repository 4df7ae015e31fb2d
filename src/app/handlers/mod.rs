//! Action handler implementations
//!
//! Split into categories to keep complexity low.

mod browse;
mod file_ops;
mod volumes;
