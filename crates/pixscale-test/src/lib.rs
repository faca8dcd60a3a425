//! pixscale-test - Regression test framework for pixscale
//!
//! - [`RegParams`] - numbered comparisons that report every failure and
//!   succeed or fail as a whole
//! - [`images`] - deterministic random test images
//! - [`oracle`] - reference resamplers and image statistics computed
//!   independently of the engine
//!
//! # Usage
//!
//! ```ignore
//! use pixscale_test::RegParams;
//!
//! let mut rp = RegParams::new("identity");
//! rp.compare_pixels(&src, &dst);
//! assert!(rp.cleanup());
//! ```

mod error;
pub mod images;
pub mod oracle;
mod params;

pub use error::{TestError, TestResult};
pub use images::RandomImage;
pub use params::RegParams;
