//! Integration tests for chroma-rs crates.
//!
//! End-to-end scenarios that cross crate boundaries: stream bytes through
//! detection into processing, registry matrices through batch conversion
//! and accuracy checks, and platform catalogs loaded from disk.
