//! Regression test parameters and comparisons

use pixscale_core::{PixelBuffer, argb};

/// Regression test parameters
///
/// Tracks the test name, the index of the current comparison and whether
/// every comparison so far succeeded. Failures are reported as they happen
/// and again by [`RegParams::cleanup`].
pub struct RegParams {
    /// Name of the test (e.g., "identity")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if the values differ by at most `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two packed colors channel by channel
    ///
    /// # Returns
    ///
    /// `true` if no channel differs by more than `tolerance`.
    pub fn compare_colors(&mut self, expected: u32, actual: u32, tolerance: u32) -> bool {
        self.index += 1;
        let delta = argb::max_channel_delta(expected, actual);
        if delta > tolerance {
            let msg = format!(
                "Failure in {}_reg: color comparison for index {}\n\
                 expected = {:#010x}, actual = {:#010x}, channel delta {} > {}",
                self.test_name, self.index, expected, actual, delta, tolerance
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two images for exact equality
    ///
    /// Only sizes and pixel values are compared; origins and scanline
    /// strides may differ.
    pub fn compare_pixels(&mut self, expected: &PixelBuffer, actual: &PixelBuffer) -> bool {
        self.compare_pixels_within(expected, actual, 0)
    }

    /// Compare two images, allowing every channel to differ by `tolerance`
    pub fn compare_pixels_within(
        &mut self,
        expected: &PixelBuffer,
        actual: &PixelBuffer,
        tolerance: u32,
    ) -> bool {
        self.index += 1;

        if expected.width() != actual.width() || expected.height() != actual.height() {
            let msg = format!(
                "Failure in {}_reg: pixel comparison for index {} - size mismatch: {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.rect(),
                actual.rect()
            );
            return self.fail(msg);
        }

        let e_rect = expected.rect();
        let a_rect = actual.rect();
        for dy in 0..e_rect.h {
            for dx in 0..e_rect.w {
                let e = expected.get(e_rect.x + dx, e_rect.y + dy);
                let a = actual.get(a_rect.x + dx, a_rect.y + dy);
                let (Some(e), Some(a)) = (e, a) else {
                    continue;
                };
                let delta = argb::max_channel_delta(e, a);
                if delta > tolerance {
                    let msg = format!(
                        "Failure in {}_reg: pixel comparison for index {} - mismatch at ({}, {}): \
                         expected {:#010x}, actual {:#010x}, channel delta {} > {}",
                        self.test_name, self.index, dx, dy, e, a, delta, tolerance
                    );
                    return self.fail(msg);
                }
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixscale_core::Rect;

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.index(), 2);
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_colors() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_colors(0xFF102030, 0xFF112030, 1));
        assert!(!rp.compare_colors(0xFF102030, 0xFF102033, 2));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_pixels_ignores_origin_and_stride() {
        let a = PixelBuffer::from_rows(0, 0, &[&[1, 2], &[3, 4]]).unwrap();
        let b = PixelBuffer::from_vec(Rect::new_unchecked(5, -5, 2, 2), 3, vec![1, 2, 9, 3, 4])
            .unwrap();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_pixels(&a, &b));
        assert!(rp.cleanup());
    }

    #[test]
    fn test_compare_pixels_size_mismatch() {
        let a = PixelBuffer::new(Rect::from_size(2, 2)).unwrap();
        let b = PixelBuffer::new(Rect::from_size(2, 3)).unwrap();
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_pixels(&a, &b));
    }

    #[test]
    fn test_compare_pixels_within() {
        let a = PixelBuffer::from_rows(0, 0, &[&[0xFF808080]]).unwrap();
        let b = PixelBuffer::from_rows(0, 0, &[&[0xFF828080]]).unwrap();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_pixels_within(&a, &b, 2));
        assert!(!rp.compare_pixels_within(&a, &b, 1));
    }
}
