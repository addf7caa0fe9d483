use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(10, 20, 3, 2);
    assert!(r.contains(Pos::new(10, 20)));
    assert!(r.contains(Pos::new(12, 21)));

    assert!(!r.contains(Pos::new(13, 20)));
    assert!(!r.contains(Pos::new(12, 22)));
    assert!(!r.contains(Pos::new(9, 20)));
}

#[test]
fn rect_empty_never_contains() {
    assert!(!Rect::new(0, 0, 0, 10).contains(Pos::new(0, 0)));
    assert!(!Rect::new(0, 0, 10, 0).contains(Pos::new(0, 0)));
}

#[test]
fn row_picks_single_line_strip() {
    let r = Rect::new(2, 4, 10, 3);
    assert_eq!(r.row(0), Rect::new(2, 4, 10, 1));
    assert_eq!(r.row(2), Rect::new(2, 6, 10, 1));
    assert!(r.row(3).is_empty());
}

#[test]
fn distance_is_manhattan() {
    assert_eq!(Pos::new(1, 1).distance(Pos::new(4, 3)), 5);
    assert_eq!(Pos::new(4, 3).distance(Pos::new(1, 1)), 5);
}

#[test]
fn inset_shrinks_rect() {
    let r = Rect::new(0, 0, 10, 5);
    assert_eq!(r.inset(Insets::all(1)), Rect::new(1, 1, 8, 3));
    assert_eq!(r.inset(Insets::xy(2, 0)), Rect::new(2, 0, 6, 5));
}

#[test]
fn inset_saturates_to_empty() {
    let r = Rect::new(0, 0, 2, 2);
    assert!(r.inset(Insets::all(3)).is_empty());
}

#[test]
fn intersect_returns_overlap() {
    let a = Rect::new(0, 0, 5, 5);
    let b = Rect::new(3, 3, 5, 5);
    assert_eq!(a.intersect(b), Rect::new(3, 3, 2, 2));
}

#[test]
fn intersect_disjoint_is_empty() {
    let a = Rect::new(0, 0, 2, 2);
    let b = Rect::new(5, 5, 2, 2);
    assert!(a.intersect(b).is_empty());
}

#[test]
fn split_top_and_bottom() {
    let r = Rect::new(0, 0, 10, 5);
    let (top, rest) = r.split_top(2);
    assert_eq!(top, Rect::new(0, 0, 10, 2));
    assert_eq!(rest, Rect::new(0, 2, 10, 3));

    let (rest, bottom) = r.split_bottom(2);
    assert_eq!(rest, Rect::new(0, 0, 10, 3));
    assert_eq!(bottom, Rect::new(0, 3, 10, 2));
}

#[test]
fn split_right_keeps_remainder_on_the_left() {
    let r = Rect::new(0, 0, 10, 5);
    let (rest, right) = r.split_right(4);
    assert_eq!(rest, Rect::new(0, 0, 6, 5));
    assert_eq!(right, Rect::new(6, 0, 4, 5));
}

#[test]
fn centered_row_clamps_to_bounds() {
    let r = Rect::new(0, 0, 10, 5);
    assert_eq!(r.centered_row(2, 4), Rect::new(3, 2, 4, 1));
    assert_eq!(r.centered_row(0, 100), Rect::new(0, 0, 10, 1));
}
