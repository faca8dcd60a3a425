//! Nearest-neighbor index mapping

/// Source index for destination index `i` when `src_span` pixels map onto
/// `dst_span` pixels
///
/// This is `floor((i + 0.5) * src_span / dst_span)`, evaluated exactly in
/// integers. `dst_span` must be positive.
#[inline]
pub fn nearest_index(i: i32, src_span: i32, dst_span: i32) -> i32 {
    let num = (2 * i as i64 + 1) * src_span as i64;
    (num / (2 * dst_span as i64)) as i32
}

/// Check whether both destination spans are whole multiples of the source
/// spans
///
/// An axis counts as exact when its destination span is 0, or when its
/// source span is non-zero and divides the destination span. In that case
/// the source index of destination index `i` is simply `i / (dst / src)`.
pub fn is_nearest_exact(src_w: i32, src_h: i32, dst_w: i32, dst_h: i32) -> bool {
    let exact = |s: i32, d: i32| d == 0 || (s != 0 && d % s == 0);
    exact(src_w, dst_w) && exact(src_h, dst_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_index_upscale() {
        // 2 -> 4: each source pixel is doubled
        let idx: Vec<_> = (0..4).map(|i| nearest_index(i, 2, 4)).collect();
        assert_eq!(idx, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_nearest_index_downscale() {
        // 6 -> 3: centers 1, 3, 5
        let idx: Vec<_> = (0..3).map(|i| nearest_index(i, 6, 3)).collect();
        assert_eq!(idx, vec![1, 3, 5]);
        // 5 -> 2: centers 1.25, 3.75
        let idx: Vec<_> = (0..2).map(|i| nearest_index(i, 5, 2)).collect();
        assert_eq!(idx, vec![1, 3]);
    }

    #[test]
    fn test_nearest_index_identity() {
        for i in 0..17 {
            assert_eq!(nearest_index(i, 17, 17), i);
        }
    }

    #[test]
    fn test_nearest_index_matches_exact_ratio() {
        for s in 1..6 {
            for k in 1..5 {
                let d = s * k;
                assert!(is_nearest_exact(s, s, d, d));
                for i in 0..d {
                    assert_eq!(nearest_index(i, s, d), i / k);
                }
            }
        }
    }

    #[test]
    fn test_is_nearest_exact() {
        assert!(is_nearest_exact(1, 1, 1, 0));
        assert!(is_nearest_exact(0, 1, 0, 1));
        assert!(is_nearest_exact(3, 2, 9, 8));
        assert!(!is_nearest_exact(1, 0, 1, 1));
        assert!(!is_nearest_exact(1, 2, 1, 1));
        assert!(!is_nearest_exact(2, 2, 3, 4));
    }
}
