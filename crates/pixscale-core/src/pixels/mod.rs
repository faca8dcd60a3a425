//! Pixel sources and sinks
//!
//! [`SrcPixels`] is the read side of a resampling call and [`RowDrawer`] the
//! write side. Both are addressed in absolute pixel coordinates, and the
//! addressable rectangle may have a negative origin.
//!
//! [`PixelBuffer`] owns its pixels and implements both sides (the write side
//! through [`PixelBuffer::row_drawer`]); [`ArraySrcPixels`] is a borrowed
//! read-only view over caller memory.

mod buffer;

pub use buffer::{ArraySrcPixels, BufferRowDrawer, PixelBuffer};

use crate::Rect;
use crate::error::Result;

/// Read access to a rectangle of 32-bit colors
pub trait SrcPixels: Sync {
    /// The addressable rectangle
    fn rect(&self) -> Rect;

    /// Get the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfRange`] if (x, y) is outside [`Self::rect`].
    fn color32_at(&self, x: i32, y: i32) -> Result<u32>;

    /// The flat backing array, if there is one.
    ///
    /// The color at (x, y) is at index
    /// `(y - rect.y) * scanline_stride + (x - rect.x)`.
    fn color32_arr(&self) -> Option<&[u32]> {
        None
    }

    /// Distance in the backing array between two consecutive rows
    fn scanline_stride(&self) -> usize {
        self.rect().w.max(0) as usize
    }
}

/// Row-oriented write access to a destination
///
/// Implementations must accept concurrent calls that target distinct rows.
/// Rows can arrive in any order.
pub trait RowDrawer: Sync {
    /// Write `row[row_offset..row_offset + length]` to the pixels
    /// `(dst_x..dst_x + length, dst_y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the target span is not addressable or the row
    /// slice is too short.
    fn draw_row(
        &self,
        row: &[u32],
        row_offset: usize,
        dst_x: i32,
        dst_y: i32,
        length: usize,
    ) -> Result<()>;
}
