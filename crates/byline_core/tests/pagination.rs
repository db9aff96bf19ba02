use byline_core::{change_page, page_bounds, page_labels, total_pages, visible_slice, PageLabel};

use PageLabel::{Ellipsis, Page};

#[test]
fn total_pages_is_at_least_one() {
    assert_eq!(total_pages(0, 5), 1);
    assert_eq!(total_pages(1, 5), 1);
    assert_eq!(total_pages(5, 5), 1);
    assert_eq!(total_pages(6, 5), 2);
    assert_eq!(total_pages(23, 5), 5);
    assert_eq!(total_pages(25, 5), 5);
    assert_eq!(total_pages(26, 5), 6);
    assert_eq!(total_pages(0, 1), 1);
}

#[test]
#[should_panic(expected = "page_size must be positive")]
fn zero_page_size_is_a_caller_bug() {
    total_pages(10, 0);
}

#[test]
#[should_panic(expected = "pages are 1-indexed")]
fn page_zero_is_a_caller_bug() {
    page_bounds(10, 0, 5);
}

#[test]
fn slices_partition_the_catalog() {
    let items: Vec<u32> = (1..=23).collect();

    let mut rebuilt = Vec::new();
    for page in 1..=total_pages(items.len(), 5) {
        let slice = visible_slice(&items, page, 5);
        assert!(slice.len() <= 5);
        rebuilt.extend_from_slice(slice);
    }
    assert_eq!(rebuilt, items);
}

#[test]
fn last_page_holds_the_remainder() {
    let items: Vec<u32> = (1..=23).collect();
    assert_eq!(visible_slice(&items, 5, 5), &[21, 22, 23]);
}

#[test]
fn page_past_the_end_is_empty_not_an_error() {
    let items: Vec<u32> = (1..=23).collect();
    assert!(visible_slice(&items, 6, 5).is_empty());
    assert!(visible_slice(&items, 100, 5).is_empty());
    assert_eq!(page_bounds(23, 6, 5), 23..23);
}

#[test]
fn change_page_accepts_only_in_range_requests() {
    assert_eq!(change_page(1, 5), Some(1));
    assert_eq!(change_page(3, 5), Some(3));
    assert_eq!(change_page(5, 5), Some(5));
    assert_eq!(change_page(0, 5), None);
    assert_eq!(change_page(6, 5), None);
    assert_eq!(change_page(99, 5), None);
}

#[test]
fn short_page_ranges_are_listed_flat() {
    assert_eq!(page_labels(1, 1), vec![Page(1)]);
    assert_eq!(page_labels(2, 3), vec![Page(1), Page(2), Page(3)]);
    assert_eq!(
        page_labels(4, 5),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
    );
}

#[test]
fn labels_near_the_start_collapse_the_tail() {
    let expected = vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)];
    assert_eq!(page_labels(1, 10), expected);
    assert_eq!(page_labels(2, 10), expected);
    assert_eq!(page_labels(3, 10), expected);
}

#[test]
fn labels_in_the_middle_keep_the_neighbourhood() {
    assert_eq!(
        page_labels(5, 10),
        vec![
            Page(1),
            Ellipsis,
            Page(4),
            Page(5),
            Page(6),
            Ellipsis,
            Page(10)
        ]
    );
}

#[test]
fn labels_near_the_end_collapse_the_head() {
    let expected = vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)];
    assert_eq!(page_labels(8, 10), expected);
    assert_eq!(page_labels(9, 10), expected);
    assert_eq!(page_labels(10, 10), expected);
}

#[test]
fn first_and_last_pages_are_always_reachable() {
    for total in 2..=12 {
        for current in 1..=total {
            let labels = page_labels(current, total);
            let numeric: Vec<usize> = labels.iter().filter_map(|label| label.page()).collect();
            assert_eq!(numeric.first(), Some(&1), "cp={current} tp={total}");
            assert_eq!(numeric.last(), Some(&total), "cp={current} tp={total}");
            assert!(
                numeric.contains(&current),
                "current page missing for cp={current} tp={total}"
            );
        }
    }
}

#[test]
fn empty_catalog_defaults() {
    let items: Vec<u32> = Vec::new();
    assert_eq!(total_pages(items.len(), 5), 1);
    assert!(visible_slice(&items, 1, 5).is_empty());
    assert_eq!(page_labels(1, 1), vec![Page(1)]);
}
