//! Swatchpick - perceptual color sampling service
//!
//! Picks representative colors from images and matches them against a
//! numbered reference palette. The algorithms live in `swatch-engine`;
//! this crate adds image decoding, the HTTP API and the CLI.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod export;
pub mod models;
pub mod server;
pub mod services;
