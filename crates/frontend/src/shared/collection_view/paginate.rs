//! Paging of the filtered and sorted rows.
//!
//! Page indices are 1-based. `paginate` does not clamp: callers bring the
//! index into range with [`clamp_page`] first.

use std::num::NonZeroUsize;

#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    pub page_count: usize,
}

/// `max(1, ceil(len / page_size))`
pub fn page_count(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

pub fn clamp_page(page_index: usize, page_count: usize) -> usize {
    page_index.clamp(1, page_count.max(1))
}

/// Slice of `items` shown on page `page_index`. An index outside
/// `[1, page_count]` yields an empty slice.
pub fn paginate<T>(items: &[T], page_index: usize, page_size: NonZeroUsize) -> Page<'_, T> {
    let page_count = page_count(items.len(), page_size);
    let visible = if page_index == 0 {
        &items[..0]
    } else {
        let start = (page_index - 1).saturating_mul(page_size.get());
        let end = start.saturating_add(page_size.get()).min(items.len());
        items.get(start..end).unwrap_or(&items[..0])
    };
    Page {
        visible,
        page_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_twenty_five_rows_by_ten() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 3, size(10));
        assert_eq!(page.page_count, 3);
        assert_eq!(page.visible, &[21, 22, 23, 24, 25]);
        assert_eq!(paginate(&items, 1, size(10)).visible.len(), 10);
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, size(20));
        assert!(page.visible.is_empty());
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_out_of_range_page_is_empty_not_clamped() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 4, size(2)).visible.is_empty());
        assert!(paginate(&items, 0, size(2)).visible.is_empty());
        assert!(paginate(&items, usize::MAX, size(2)).visible.is_empty());
    }

    #[test]
    fn test_pages_cover_every_row_exactly_once() {
        for len in [0usize, 1, 9, 10, 11, 37, 100] {
            let items: Vec<usize> = (0..len).collect();
            for page_size in [1usize, 3, 10, 50] {
                let count = page_count(len, size(page_size));
                let mut seen = Vec::new();
                for index in 1..=count {
                    let page = paginate(&items, index, size(page_size));
                    assert!(page.visible.len() <= page_size);
                    seen.extend_from_slice(page.visible);
                }
                assert_eq!(seen, items, "len={len} page_size={page_size}");
            }
        }
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(5, 0), 1);
    }
}
