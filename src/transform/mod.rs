//! One-shot image transforms that sit beside the icon pipeline.
//!
//! These operate on single files and carry no state between calls: flatten
//! transparent artwork onto a background colour, strip alpha from existing
//! icons, and print quick pixel statistics.

mod flatten;
mod inspect;
mod strip;

pub use flatten::{flatten_alpha, flatten_pixels, JPEG_QUALITY};
pub use inspect::{image_stats, inspect, ImageStats};
pub use strip::{strip_alpha, strip_alpha_dir, StripOutcome, StripReport};
