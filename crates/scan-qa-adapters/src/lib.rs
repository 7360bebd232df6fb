//! Scan QA Adapters - External adapters for scan-qa.
//!
//! This crate provides the filesystem image source adapter. Decoding is
//! delegated to the `image` crate; the validation core never parses file
//! formats itself.

pub mod fs;

pub use fs::FsImageSource;
