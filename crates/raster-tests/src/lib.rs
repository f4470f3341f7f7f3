//! Integration tests for raster-rs crates.
//!
//! This crate contains end-to-end tests that exercise `raster-ops`
//! operations together over `raster-core` buffers.
