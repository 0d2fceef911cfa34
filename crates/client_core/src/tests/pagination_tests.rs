use super::*;

#[test]
fn total_pages_is_ceiling_with_floor_of_one() {
    assert_eq!(Pagination::total_pages_for(0, 10), 1);
    assert_eq!(Pagination::total_pages_for(1, 10), 1);
    assert_eq!(Pagination::total_pages_for(10, 10), 1);
    assert_eq!(Pagination::total_pages_for(11, 10), 2);
    assert_eq!(Pagination::total_pages_for(25, 10), 3);
    assert_eq!(Pagination::total_pages_for(46, 10), 5);
}

#[test]
fn go_to_clamps_into_valid_range() {
    let mut pagination = Pagination::default();
    pagination.set_item_count(25);

    assert!(pagination.go_to(4));
    assert_eq!(pagination.current_page(), 3);
    assert!(!pagination.has_next());

    assert!(pagination.go_to(0));
    assert_eq!(pagination.current_page(), 1);
    assert!(!pagination.has_previous());
}

#[test]
fn go_to_same_page_reports_no_move() {
    let mut pagination = Pagination::default();
    pagination.set_item_count(25);
    assert!(!pagination.go_to(1));
    assert!(pagination.go_to(2));
    assert!(!pagination.go_to(2));
}

#[test]
fn window_covers_partial_last_page() {
    let mut pagination = Pagination::default();
    pagination.set_item_count(25);
    assert_eq!(pagination.window(), 0..10);

    pagination.go_to(3);
    assert_eq!(pagination.window(), 20..25);
}

#[test]
fn window_is_empty_without_items() {
    let pagination = Pagination::default();
    assert_eq!(pagination.window(), 0..0);
    assert_eq!(pagination.total_pages(), 1);
    assert_eq!(pagination.page_numbers().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn shrinking_item_count_pulls_cursor_back() {
    let mut pagination = Pagination::default();
    pagination.set_item_count(21);
    pagination.go_to(3);

    assert!(pagination.set_item_count(20));
    assert_eq!(pagination.current_page(), 2);
    assert!(!pagination.set_item_count(15));
    assert_eq!(pagination.current_page(), 2);
}
