//! Test support utilities for scan-qa.
//!
//! Provides mocks and synthetic image builders for testing the
//! validation pipeline.
//!
//! # Example
//!
//! ```
//! use scan_qa_test_support::{MockImageSource, SyntheticImageBuilder};
//!
//! // Create synthetic test images
//! let sharp = SyntheticImageBuilder::checkerboard(100, 100);
//! let flat = SyntheticImageBuilder::uniform_gray(100, 100, 128);
//!
//! // Create mock image source
//! let source = MockImageSource::new(vec![sharp, flat]);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticImageBuilder;
pub use mocks::{MockImageSource, MockProgressSink, MockResultOutput};
