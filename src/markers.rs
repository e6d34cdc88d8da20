//! Compressed page-number bar
//!
//! A navigation bar shows page 1, a small window around the current page and
//! the last page; gaps in between are collapsed into ellipsis markers.

use serde::Serialize;

/// One entry of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageMarker {
    /// A clickable page number.
    Number { value: u64 },
    /// A non-clickable gap between two visible page numbers.
    Ellipsis,
}

/// Build the marker sequence for a navigation bar.
///
/// Emission order: page 1, a gap marker when the window sits past page 3,
/// the window `[current-1, current+1]` restricted to `[2, total-1]`, a gap
/// marker when at least page `total - 2` is hidden, then the last page.
/// Duplicates are dropped, first occurrence kept.
pub fn page_markers(current_page: u64, total_pages: u64) -> Vec<PageMarker> {
    let mut markers = Vec::new();
    push_unique(&mut markers, PageMarker::Number { value: 1 });

    if current_page > 3 {
        push_unique(&mut markers, PageMarker::Ellipsis);
    }

    let window_start = current_page.saturating_sub(1).max(2);
    let window_end = (current_page + 1).min(total_pages.saturating_sub(1));
    for value in window_start..=window_end {
        push_unique(&mut markers, PageMarker::Number { value });
    }

    if current_page + 2 < total_pages {
        push_unique(&mut markers, PageMarker::Ellipsis);
    }

    if total_pages > 1 {
        push_unique(&mut markers, PageMarker::Number { value: total_pages });
    }

    markers
}

fn push_unique(markers: &mut Vec<PageMarker>, marker: PageMarker) {
    if !markers.contains(&marker) {
        markers.push(marker);
    }
}

#[cfg(test)]
mod tests {
    use super::PageMarker::{Ellipsis, Number};
    use super::*;

    #[test]
    fn single_page_is_just_page_one() {
        assert_eq!(page_markers(1, 1), vec![Number { value: 1 }]);
    }

    #[test]
    fn two_pages_have_no_gap() {
        let want = vec![Number { value: 1 }, Number { value: 2 }];
        assert_eq!(page_markers(1, 2), want);
        assert_eq!(page_markers(2, 2), want);
    }

    #[test]
    fn first_of_five_pages() {
        assert_eq!(
            page_markers(1, 5),
            vec![Number { value: 1 }, Number { value: 2 }, Ellipsis, Number { value: 5 }]
        );
    }

    #[test]
    fn last_of_five_pages() {
        assert_eq!(
            page_markers(5, 5),
            vec![Number { value: 1 }, Ellipsis, Number { value: 4 }, Number { value: 5 }]
        );
    }

    #[test]
    fn middle_of_five_pages_shows_every_page() {
        assert_eq!(
            page_markers(3, 5),
            vec![
                Number { value: 1 },
                Number { value: 2 },
                Number { value: 3 },
                Number { value: 4 },
                Number { value: 5 },
            ]
        );
    }

    #[test]
    fn middle_of_ten_pages_keeps_one_gap_marker() {
        // both gap guards fire; dedup keeps the first gap marker only
        assert_eq!(
            page_markers(5, 10),
            vec![
                Number { value: 1 },
                Ellipsis,
                Number { value: 4 },
                Number { value: 5 },
                Number { value: 6 },
                Number { value: 10 },
            ]
        );
    }

    #[test]
    fn near_edge_pages_gap_only_on_the_far_side() {
        assert_eq!(
            page_markers(2, 5),
            vec![
                Number { value: 1 },
                Number { value: 2 },
                Number { value: 3 },
                Ellipsis,
                Number { value: 5 },
            ]
        );
        assert_eq!(
            page_markers(4, 5),
            vec![
                Number { value: 1 },
                Ellipsis,
                Number { value: 3 },
                Number { value: 4 },
                Number { value: 5 },
            ]
        );
    }

    #[test]
    fn starts_with_one_and_ends_with_last_page() {
        for total_pages in 1..=30u64 {
            for current in 1..=total_pages {
                let markers = page_markers(current, total_pages);
                assert_eq!(markers[0], Number { value: 1 });
                if total_pages > 1 {
                    assert_eq!(*markers.last().unwrap(), Number { value: total_pages });
                }
            }
        }
    }

    #[test]
    fn no_value_repeats_and_no_adjacent_gap_markers() {
        for total_pages in 1..=30u64 {
            for current in 1..=total_pages {
                let markers = page_markers(current, total_pages);
                for (i, marker) in markers.iter().enumerate() {
                    assert!(
                        !markers[..i].contains(marker),
                        "duplicate {:?} at current={} total={}",
                        marker,
                        current,
                        total_pages
                    );
                }
            }
        }
    }
}
