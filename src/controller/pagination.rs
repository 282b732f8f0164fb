use serde::Serialize;

/// One entry in the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageLink {
    Page(u32),
    Ellipsis,
}

/// Everything needed to draw the pagination bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationControls {
    pub current: u32,
    pub links: Vec<PageLink>,
    /// Target of the "previous" control; `None` when disabled
    pub previous: Option<u32>,
    /// Target of the "next" control; `None` when disabled
    pub next: Option<u32>,
}

impl PaginationControls {
    /// Controls for a result set, or `None` when there is at most one page
    pub fn new(current_page: u32, total_pages: u32) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }
        let current = current_page.clamp(1, total_pages);
        Some(Self {
            current,
            links: compute_pagination_window(current, total_pages),
            previous: (current > 1).then(|| current - 1),
            next: (current < total_pages).then(|| current + 1),
        })
    }
}

/// Page links around `current_page`: first and last page always, up to three
/// neighbours in between, and an ellipsis for each hidden run.
///
/// Output is strictly ascending and never repeats a page number.
pub fn compute_pagination_window(current_page: u32, total_pages: u32) -> Vec<PageLink> {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);
    let mut links = vec![PageLink::Page(1)];

    if current > 3 {
        links.push(PageLink::Ellipsis);
    }

    for page in current.saturating_sub(1)..=current + 1 {
        if page > 1 && page < total {
            links.push(PageLink::Page(page));
        }
    }

    if current + 2 < total {
        links.push(PageLink::Ellipsis);
    }

    if total > 1 {
        links.push(PageLink::Page(total));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::PageLink::{Ellipsis, Page};
    use super::*;

    fn pages(links: &[PageLink]) -> Vec<u32> {
        links
            .iter()
            .filter_map(|l| match l {
                Page(n) => Some(*n),
                Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn single_page_hides_controls() {
        assert_eq!(PaginationControls::new(1, 1), None);
        assert_eq!(PaginationControls::new(1, 0), None);
    }

    #[test]
    fn middle_page_has_both_ellipses() {
        assert_eq!(
            compute_pagination_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn first_page_has_no_leading_ellipsis() {
        assert_eq!(
            compute_pagination_window(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn last_page_has_no_trailing_ellipsis() {
        assert_eq!(
            compute_pagination_window(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
        assert_eq!(
            compute_pagination_window(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn two_pages() {
        let controls = PaginationControls::new(1, 2).unwrap();
        assert_eq!(controls.links, vec![Page(1), Page(2)]);
        assert_eq!(controls.previous, None);
        assert_eq!(controls.next, Some(2));

        let controls = PaginationControls::new(2, 2).unwrap();
        assert_eq!(controls.previous, Some(1));
        assert_eq!(controls.next, None);
    }

    #[test]
    fn windows_are_ascending_without_duplicates() {
        for total in 1..=15 {
            for current in 1..=total {
                let links = compute_pagination_window(current, total);
                let numbers = pages(&links);
                assert!(
                    numbers.windows(2).all(|w| w[0] < w[1]),
                    "window({}, {}) = {:?}",
                    current,
                    total,
                    links
                );
                assert_eq!(numbers.first(), Some(&1));
                assert_eq!(numbers.last(), Some(&total));
                assert!(numbers.contains(&current));
                assert!(!links.windows(2).any(|w| w == [Ellipsis, Ellipsis]));
            }
        }
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(
            compute_pagination_window(40, 4),
            vec![Page(1), Ellipsis, Page(3), Page(4)]
        );
    }
}
