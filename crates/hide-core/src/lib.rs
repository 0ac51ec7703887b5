//! Core data model and value-range extraction for the hide masking engine
//!
//! This crate contains:
//! - `ValueRange`, the (line, start, end) interval handed to renderers
//! - `ValueExtractor`, the per-line `key = value` / `key: value` scanner

pub mod extract;
pub mod range;

pub use extract::ValueExtractor;
pub use range::ValueRange;
