//! Integration tests for iris crates.
//!
//! This crate contains end-to-end tests that drive the public boundary of
//! `iris-ops` with buffers built through `iris-core`.

#[cfg(test)]
mod golden;
