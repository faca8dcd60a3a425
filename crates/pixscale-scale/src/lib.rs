//! pixscale-scale - Scaled-rectangle resampling
//!
//! This crate resizes a rectangle of a source pixel buffer into a rectangle
//! of a destination, clipped to a destination clip rect:
//!
//! - Nearest neighbor
//! - Box sampling (area-weighted averaging)
//! - Bilinear and bicubic (Catmull-Rom) interpolation
//! - Iterative bilinear/bicubic, halving large shrinks step by step
//! - Box+bilinear and box+bicubic, with a box pre-pass for large shrinks
//!
//! All interpolation happens on premultiplied ARGB; the caller's color
//! packing is converted on read and on write-out by a
//! [`pixscale_core::ColorTypeHelper`]. Destination rows may be produced by
//! several threads through a [`pixscale_parallel::Parallelizer`].

mod drawers;
mod error;
mod hybrid;
mod iterative;
pub mod kernels;
mod scaling;
mod splitter;

pub use drawers::{
    BicubicDrawer, BilinearDrawer, BoxsampledDrawer, DEFAULT_BICUBIC_THRESHOLD,
    DEFAULT_BILINEAR_THRESHOLD, DEFAULT_BOXSAMPLED_THRESHOLD, DEFAULT_NEAREST_THRESHOLD,
    NearestDrawer, ScaledRectDrawer,
};
pub use error::{ScaleError, ScaleResult};
pub use hybrid::{BoxSmoothDrawer, Smoothing};
pub use iterative::{IterativeDrawer, halving_plan};
pub use kernels::is_nearest_exact;
pub use scaling::{ScalingDrawer, ScalingType, SplitThresholds, draw_scaled_rect};
