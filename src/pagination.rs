//! Pure pagination math for the item list: page slicing, the compressed
//! page-number sequence, and the "Showing X - Y of Z" range summary.
//! Everything here is stateless; the view controller owns which page is
//! current and how many items fit on it.

/// Page sizes the UI lets the user pick from.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 15, 20];

/// Window width below which every page number is shown uncompressed.
const FULL_SEQUENCE_MAX: usize = 7;

/// One entry in a rendered page-number sequence. Ellipsis markers stand
/// for omitted pages and are not navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Number(usize),
    Ellipsis,
}

/// Number of pages needed for `total_items` at `items_per_page` per page.
/// Zero items means zero pages; callers clamp their current page to 1 anyway.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page)
}

/// The sub-slice of `items` shown on 1-based `page`, clipped to bounds.
/// Out-of-range pages yield an empty slice rather than panicking.
pub fn slice_for_page<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// The page-number sequence to display for `current_page` of `total_pages`.
///
/// Seven or fewer pages are shown in full. Beyond that: page 1, an ellipsis
/// when the window has pulled away from the start, a window of up to three
/// pages around the current one, an ellipsis when the window stops short of
/// the end, and the last page.
pub fn page_number_sequence(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages <= FULL_SEQUENCE_MAX {
        return (1..=total_pages).map(PageMarker::Number).collect();
    }

    let mut markers = vec![PageMarker::Number(1)];

    if current_page > 3 {
        markers.push(PageMarker::Ellipsis);
    }

    let start = current_page.saturating_sub(1).max(2);
    let end = (current_page + 1).min(total_pages - 1);
    for page in start..=end {
        markers.push(PageMarker::Number(page));
    }

    if current_page + 2 < total_pages {
        markers.push(PageMarker::Ellipsis);
    }

    markers.push(PageMarker::Number(total_pages));
    markers
}

/// 1-based inclusive display range for the summary line, both ends clamped
/// to `total_items`.
pub fn range_summary(current_page: usize, items_per_page: usize, total_items: usize) -> (usize, usize) {
    let start = ((current_page - 1) * items_per_page + 1).min(total_items);
    let end = (current_page * items_per_page).min(total_items);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbers(markers: &[PageMarker]) -> Vec<usize> {
        markers
            .iter()
            .filter_map(|m| match m {
                PageMarker::Number(n) => Some(*n),
                PageMarker::Ellipsis => None,
            })
            .collect()
    }

    fn ellipsis_count(markers: &[PageMarker]) -> usize {
        markers.iter().filter(|m| **m == PageMarker::Ellipsis).count()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(15, 5), 3);
    }

    #[test]
    fn test_slice_first_and_last_page() {
        let items: Vec<usize> = (1..=15).collect();
        assert_eq!(slice_for_page(&items, 1, 10), &(1..=10).collect::<Vec<_>>()[..]);
        assert_eq!(slice_for_page(&items, 2, 10), &(11..=15).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn test_slice_out_of_range_is_empty() {
        let items: Vec<usize> = (1..=15).collect();
        assert!(slice_for_page(&items, 3, 10).is_empty());
        assert!(slice_for_page(&items, 99, 10).is_empty());
    }

    #[test]
    fn test_sequence_short_shows_everything() {
        let markers = page_number_sequence(3, 7);
        assert_eq!(numbers(&markers), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(ellipsis_count(&markers), 0);
    }

    #[test]
    fn test_sequence_middle_has_two_ellipses() {
        let markers = page_number_sequence(5, 10);
        assert_eq!(
            markers,
            vec![
                PageMarker::Number(1),
                PageMarker::Ellipsis,
                PageMarker::Number(4),
                PageMarker::Number(5),
                PageMarker::Number(6),
                PageMarker::Ellipsis,
                PageMarker::Number(10),
            ]
        );
    }

    #[test]
    fn test_sequence_near_start_has_trailing_ellipsis_only() {
        let markers = page_number_sequence(2, 10);
        assert_eq!(numbers(&markers), vec![1, 2, 3, 10]);
        assert_eq!(ellipsis_count(&markers), 1);
    }

    #[test]
    fn test_sequence_near_end_has_leading_ellipsis_only() {
        let markers = page_number_sequence(9, 10);
        assert_eq!(numbers(&markers), vec![1, 8, 9, 10]);
        assert_eq!(ellipsis_count(&markers), 1);
    }

    #[test]
    fn test_sequence_boundary_current_page_three() {
        // current == 3 keeps the leading window attached to page 1
        let markers = page_number_sequence(3, 10);
        assert_eq!(numbers(&markers), vec![1, 2, 3, 4, 10]);
        assert_eq!(ellipsis_count(&markers), 1);
    }

    #[test]
    fn test_range_summary_middle_page() {
        assert_eq!(range_summary(2, 10, 45), (11, 20));
    }

    #[test]
    fn test_range_summary_clamps_to_total() {
        assert_eq!(range_summary(2, 10, 15), (11, 15));
        // page past the data clamps both ends
        assert_eq!(range_summary(4, 10, 15), (15, 15));
    }

    #[test]
    fn test_range_summary_empty_list() {
        assert_eq!(range_summary(1, 10, 0), (0, 0));
    }
}
