//! Pagination primitives shared by the search core and the HTTP layer.
//!
//! Page sizes are restricted to a fixed menu; anything else rounds down.

/// Allowed page sizes, ascending.
pub const PAGE_SIZES: [u32; 3] = [10, 20, 50];

/// Default page size when the client supplies none.
pub const DEFAULT_LIMIT: u32 = 20;

/// Clamp a requested page size into `PAGE_SIZES`: values between two
/// members round down to the lower one, values below the minimum become
/// the minimum.
pub fn clamp_limit(requested: u32) -> u32 {
    PAGE_SIZES
        .iter()
        .rev()
        .copied()
        .find(|&s| requested >= s)
        .unwrap_or(PAGE_SIZES[0])
}

/// Clamp a 1-based page index; anything below 1 becomes 1.
pub fn clamp_page(requested: i64) -> u32 {
    if requested < 1 {
        1
    } else {
        requested.min(u32::MAX as i64) as u32
    }
}

/// Offset/limit pair for the store, from a normalized page and limit.
pub fn to_offset(page: u32, limit: u32) -> u64 {
    (page as u64 - 1) * limit as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_rounds_down_to_menu() {
        assert_eq!(clamp_limit(10), 10);
        assert_eq!(clamp_limit(20), 20);
        assert_eq!(clamp_limit(50), 50);
        assert_eq!(clamp_limit(49), 20);
        assert_eq!(clamp_limit(21), 20);
        assert_eq!(clamp_limit(100), 50);
    }

    #[test]
    fn limit_below_minimum_becomes_minimum() {
        assert_eq!(clamp_limit(0), 10);
        assert_eq!(clamp_limit(9), 10);
    }

    #[test]
    fn page_clamps_to_one() {
        assert_eq!(clamp_page(-3), 1);
        assert_eq!(clamp_page(0), 1);
        assert_eq!(clamp_page(7), 7);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(to_offset(1, 20), 0);
        assert_eq!(to_offset(3, 10), 20);
    }
}
