//! Array-backed pixel buffers

use super::{RowDrawer, SrcPixels};
use crate::Rect;
use crate::error::{Error, Result};
use std::sync::{Mutex, PoisonError};

/// Check that `len` elements hold a `rect` sized image with `stride`.
fn check_layout(rect: Rect, stride: usize, len: usize) -> Result<()> {
    if !rect.is_valid() {
        return Err(Error::InvalidParameter(format!(
            "invalid pixel rect: {:?}",
            rect
        )));
    }
    let w = rect.w as usize;
    let h = rect.h as usize;
    if stride < w {
        return Err(Error::InvalidParameter(format!(
            "scanline stride {} smaller than width {}",
            stride, w
        )));
    }
    let needed = if h == 0 || w == 0 {
        0
    } else {
        stride * (h - 1) + w
    };
    if len < needed {
        return Err(Error::InvalidParameter(format!(
            "pixel array too small: {} < {}",
            len, needed
        )));
    }
    Ok(())
}

#[inline]
fn index_of(rect: &Rect, stride: usize, x: i32, y: i32) -> usize {
    (y - rect.y) as usize * stride + (x - rect.x) as usize
}

/// An owned rectangle of 32-bit colors
///
/// Rows are stored top to bottom, `stride` elements apart. Padding between
/// rows (when `stride > width`) is never read by resampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    rect: Rect,
    stride: usize,
    data: Vec<u32>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer with `stride == width`
    ///
    /// # Errors
    ///
    /// Returns an error if `rect` has negative dimensions.
    pub fn new(rect: Rect) -> Result<Self> {
        Self::with_stride(rect, rect.w.max(0) as usize)
    }

    /// Create a zero-filled buffer with an explicit scanline stride
    pub fn with_stride(rect: Rect, stride: usize) -> Result<Self> {
        check_layout(rect, stride, usize::MAX)?;
        let len = stride * rect.h as usize;
        Ok(Self {
            rect,
            stride,
            data: vec![0; len],
        })
    }

    /// Wrap an existing pixel vector
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is too small for `rect` and `stride`.
    pub fn from_vec(rect: Rect, stride: usize, data: Vec<u32>) -> Result<Self> {
        check_layout(rect, stride, data.len())?;
        Ok(Self { rect, stride, data })
    }

    /// Build a buffer from row slices, with its top-left corner at (x, y)
    ///
    /// # Errors
    ///
    /// Returns an error if the rows don't all have the same length.
    pub fn from_rows(x: i32, y: i32, rows: &[&[u32]]) -> Result<Self> {
        let w = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != w) {
            return Err(Error::InvalidParameter(
                "rows must all have the same length".into(),
            ));
        }
        let data: Vec<u32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::from_vec(Rect::new(x, y, w as i32, rows.len() as i32)?, w, data)
    }

    /// The addressable rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> i32 {
        self.rect.w
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> i32 {
        self.rect.h
    }

    /// Scanline stride in pixels
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw pixel data, including row padding
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Mutable raw pixel data, including row padding
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Get the pixels of row `y` (without padding)
    pub fn row(&self, y: i32) -> Option<&[u32]> {
        if y < self.rect.y || y >= self.rect.bottom() {
            return None;
        }
        let start = index_of(&self.rect, self.stride, self.rect.x, y);
        Some(&self.data[start..start + self.rect.w as usize])
    }

    /// Get the color at (x, y), or `None` when out of range
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if self.rect.contains_point(x, y) {
            Some(self.data[index_of(&self.rect, self.stride, x, y)])
        } else {
            None
        }
    }

    /// Set the color at (x, y)
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if (x, y) is outside the buffer.
    pub fn set(&mut self, x: i32, y: i32, color32: u32) -> Result<()> {
        if !self.rect.contains_point(x, y) {
            return Err(Error::OutOfRange {
                x,
                y,
                rect: self.rect,
            });
        }
        let i = index_of(&self.rect, self.stride, x, y);
        self.data[i] = color32;
        Ok(())
    }

    /// Set every pixel (padding included) to `color32`
    pub fn fill(&mut self, color32: u32) {
        self.data.fill(color32);
    }

    /// Copy a sub-rectangle into a new tightly packed buffer
    ///
    /// # Errors
    ///
    /// Returns an error if `rect` is not contained in this buffer.
    pub fn sub_buffer(&self, rect: Rect) -> Result<PixelBuffer> {
        if !self.rect.contains_rect(&rect) || !rect.is_valid() {
            return Err(Error::InvalidParameter(format!(
                "{:?} not contained in {:?}",
                rect, self.rect
            )));
        }
        let mut data = Vec::with_capacity(rect.area() as usize);
        for y in rect.y..rect.bottom() {
            let start = index_of(&self.rect, self.stride, rect.x, y);
            data.extend_from_slice(&self.data[start..start + rect.w as usize]);
        }
        PixelBuffer::from_vec(rect, rect.w as usize, data)
    }

    /// Borrow as a read-only array view
    pub fn view(&self) -> ArraySrcPixels<'_> {
        ArraySrcPixels {
            rect: self.rect,
            stride: self.stride,
            data: &self.data,
        }
    }

    /// Borrow as a row sink that can be shared across threads
    pub fn row_drawer(&mut self) -> BufferRowDrawer<'_> {
        BufferRowDrawer::new(self.rect, self.stride, &mut self.data)
    }
}

impl SrcPixels for PixelBuffer {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn color32_at(&self, x: i32, y: i32) -> Result<u32> {
        self.get(x, y).ok_or(Error::OutOfRange {
            x,
            y,
            rect: self.rect,
        })
    }

    fn color32_arr(&self) -> Option<&[u32]> {
        Some(&self.data)
    }

    fn scanline_stride(&self) -> usize {
        self.stride
    }
}

/// A read-only view over caller-owned pixels
#[derive(Debug, Clone, Copy)]
pub struct ArraySrcPixels<'a> {
    rect: Rect,
    stride: usize,
    data: &'a [u32],
}

impl<'a> ArraySrcPixels<'a> {
    /// Create a view of `rect` over `data` with the given stride
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is too small for `rect` and `stride`.
    pub fn new(data: &'a [u32], stride: usize, rect: Rect) -> Result<Self> {
        check_layout(rect, stride, data.len())?;
        Ok(Self { rect, stride, data })
    }
}

impl SrcPixels for ArraySrcPixels<'_> {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn color32_at(&self, x: i32, y: i32) -> Result<u32> {
        if !self.rect.contains_point(x, y) {
            return Err(Error::OutOfRange {
                x,
                y,
                rect: self.rect,
            });
        }
        Ok(self.data[index_of(&self.rect, self.stride, x, y)])
    }

    fn color32_arr(&self) -> Option<&[u32]> {
        Some(self.data)
    }

    fn scanline_stride(&self) -> usize {
        self.stride
    }
}

/// A [`RowDrawer`] writing into a pixel array
///
/// Each row sits behind its own lock, so threads drawing distinct rows
/// never wait on each other.
pub struct BufferRowDrawer<'a> {
    rect: Rect,
    rows: Vec<Mutex<&'a mut [u32]>>,
}

impl<'a> BufferRowDrawer<'a> {
    fn new(rect: Rect, stride: usize, data: &'a mut [u32]) -> Self {
        let w = rect.w.max(0) as usize;
        let h = rect.h.max(0) as usize;
        let rows = if w == 0 {
            Vec::new()
        } else {
            data.chunks_mut(stride.max(1))
                .take(h)
                .map(|row| Mutex::new(&mut row[..w]))
                .collect()
        };
        Self { rect, rows }
    }

    /// The writable rectangle
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl RowDrawer for BufferRowDrawer<'_> {
    fn draw_row(
        &self,
        row: &[u32],
        row_offset: usize,
        dst_x: i32,
        dst_y: i32,
        length: usize,
    ) -> Result<()> {
        if length == 0 {
            return Ok(());
        }
        let last_x = dst_x as i64 + length as i64 - 1;
        if !self.rect.contains_point(dst_x, dst_y) || last_x > self.rect.x_max() as i64 {
            return Err(Error::OutOfRange {
                x: dst_x,
                y: dst_y,
                rect: self.rect,
            });
        }
        if row.len() < row_offset + length {
            return Err(Error::InvalidParameter(format!(
                "row too short: {} < {} + {}",
                row.len(),
                row_offset,
                length
            )));
        }

        let start = (dst_x - self.rect.x) as usize;
        let mut line = self.rows[(dst_y - self.rect.y) as usize]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        line[start..start + length].copy_from_slice(&row[row_offset..row_offset + length]);
        Ok(())
    }
}
