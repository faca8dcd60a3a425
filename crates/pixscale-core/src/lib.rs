//! pixscale-core - Basic data structures for pixel resampling
//!
//! This crate provides the value types and access traits shared by the
//! resampling engine:
//!
//! - [`Rect`] - Integer rectangle regions
//! - [`argb`] - Packed 32-bit color helpers
//! - [`ColorTypeHelper`] - Native color packing and premultiplication
//! - [`SrcPixels`] / [`RowDrawer`] - Pixel source and row sink traits
//! - [`PixelBuffer`] / [`ArraySrcPixels`] - Array-backed implementations

pub mod argb;
pub mod color_type;
pub mod error;
pub mod pixels;
pub mod rect;

pub use color_type::{ChannelMasks, ColorTypeHelper};
pub use error::{Error, Result};
pub use pixels::{ArraySrcPixels, BufferRowDrawer, PixelBuffer, RowDrawer, SrcPixels};
pub use rect::Rect;
