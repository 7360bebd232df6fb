//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the validation core and
//! external adapters (filesystem sources, progress display, output
//! writers).

mod image_source;
mod progress;
mod result_output;

pub use image_source::ImageSource;
pub use progress::{ProgressEvent, ProgressSink};
pub use result_output::ResultOutput;
