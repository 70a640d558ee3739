use crate::models::Listing;
use serde::{Deserialize, Serialize};

/// Listings shown per page, matching the catalogue grid
pub const PAGE_SIZE: usize = 9;

/// One visible page of an ordered listing set
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub items: Vec<&'a Listing>,
    /// Total page count; an empty result still counts as one page so the
    /// toolbar can show "Page 1 sur 1".
    pub total_pages: usize,
    pub current_page: usize,
}

/// Entry in the page-number strip
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PageToken {
    Number(usize),
    Ellipsis,
}

/// Slice an ordered listing set into its `page_number`-th page (1-based).
///
/// Out-of-range page numbers yield an empty page rather than an error;
/// clamping is the caller's affair.
pub fn paginate<'a>(listings: &[&'a Listing], page_size: usize, page_number: usize) -> Page<'a> {
    let total_pages = listings.len().div_ceil(page_size).max(1);
    let start = page_number.saturating_sub(1).saturating_mul(page_size);
    let items = if page_number == 0 || start >= listings.len() {
        Vec::new()
    } else {
        let end = (start + page_size).min(listings.len());
        listings[start..end].to_vec()
    };
    Page {
        items,
        total_pages,
        current_page: page_number,
    }
}

/// Page-number strip with collapsed ranges, e.g. `1 2 3 4 … 10`.
///
/// The shape of this strip is a visible navigation contract:
/// - up to 5 pages: every number;
/// - near the start: first four numbers, ellipsis, last;
/// - near the end: first, ellipsis, last four numbers;
/// - otherwise: first, ellipsis, the current page with both neighbours,
///   ellipsis, last.
pub fn page_numbers(total_pages: usize, current_page: usize) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Number};

    if total_pages <= 5 {
        return (1..=total_pages).map(Number).collect();
    }

    if current_page <= 3 {
        vec![
            Number(1),
            Number(2),
            Number(3),
            Number(4),
            Ellipsis,
            Number(total_pages),
        ]
    } else if current_page >= total_pages - 2 {
        vec![
            Number(1),
            Ellipsis,
            Number(total_pages - 3),
            Number(total_pages - 2),
            Number(total_pages - 1),
            Number(total_pages),
        ]
    } else {
        vec![
            Number(1),
            Ellipsis,
            Number(current_page - 1),
            Number(current_page),
            Number(current_page + 1),
            Ellipsis,
            Number(total_pages),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_fixtures::listing;
    use PageToken::{Ellipsis, Number};

    #[test]
    fn pages_are_disjoint_ordered_and_covering() {
        let all: Vec<_> = (0..23).map(|i| listing(&format!("l{i}"), i)).collect();
        let refs: Vec<_> = all.iter().collect();

        let first = paginate(&refs, PAGE_SIZE, 1);
        assert_eq!(first.total_pages, 3);

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let p = paginate(&refs, PAGE_SIZE, page);
            seen.extend(p.items.iter().map(|l| l.id.clone()));
        }
        let expected: Vec<_> = refs.iter().map(|l| l.id.clone()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let all = vec![listing("a", 1)];
        let refs: Vec<_> = all.iter().collect();
        let page = paginate(&refs, PAGE_SIZE, 7);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 7);
    }

    #[test]
    fn empty_result_is_one_empty_page() {
        let refs: Vec<&Listing> = Vec::new();
        let page = paginate(&refs, PAGE_SIZE, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn short_strips_show_every_page() {
        assert_eq!(
            page_numbers(3, 2),
            vec![Number(1), Number(2), Number(3)]
        );
        assert_eq!(
            page_numbers(5, 5),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5)]
        );
    }

    #[test]
    fn strip_collapses_near_the_start() {
        assert_eq!(
            page_numbers(10, 1),
            vec![Number(1), Number(2), Number(3), Number(4), Ellipsis, Number(10)]
        );
        assert_eq!(
            page_numbers(10, 3),
            vec![Number(1), Number(2), Number(3), Number(4), Ellipsis, Number(10)]
        );
    }

    #[test]
    fn strip_collapses_near_the_end() {
        assert_eq!(
            page_numbers(10, 10),
            vec![Number(1), Ellipsis, Number(7), Number(8), Number(9), Number(10)]
        );
        assert_eq!(
            page_numbers(10, 8),
            vec![Number(1), Ellipsis, Number(7), Number(8), Number(9), Number(10)]
        );
    }

    #[test]
    fn strip_collapses_both_sides_in_the_middle() {
        assert_eq!(
            page_numbers(10, 5),
            vec![
                Number(1),
                Ellipsis,
                Number(4),
                Number(5),
                Number(6),
                Ellipsis,
                Number(10)
            ]
        );
    }
}
