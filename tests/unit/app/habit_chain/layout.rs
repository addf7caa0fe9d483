use super::*;

#[test]
fn wrap_keeps_short_text_on_one_line() {
    assert_eq!(
        wrap_words("I stretch, then I journal.", 40),
        vec!["I stretch, then I journal.".to_string()]
    );
}

#[test]
fn wrap_breaks_between_words() {
    assert_eq!(
        wrap_words("I A, then I B", 8),
        vec!["I A,".to_string(), "then I B".to_string()]
    );
}

#[test]
fn wrap_hard_breaks_long_words() {
    assert_eq!(
        wrap_words("I abcdefghij", 4),
        vec!["I".to_string(), "abcd".to_string(), "efgh".to_string(), "ij".to_string()]
    );
}

#[test]
fn wrap_with_zero_width_yields_nothing() {
    assert!(wrap_words("I stretch", 0).is_empty());
}

#[test]
fn layout_stacks_sections_top_to_bottom() {
    let area = Rect::new(0, 0, 80, 24);
    let layout = compute(area, "I A, then I B.");

    assert_eq!(layout.title.y, 0);
    assert_eq!(layout.tagline.y, 1);
    assert_eq!(layout.chain_card.y, HEADER_HEIGHT);
    assert_eq!(layout.chain_card.h, 3);
    assert_eq!(layout.chain_lines, vec!["I A, then I B.".to_string()]);
    assert_eq!(layout.input_card.y, layout.chain_card.bottom());
    assert_eq!(layout.list_card.y, layout.input_card.bottom());
    assert_eq!(layout.list_card.bottom(), layout.status.y);
    assert_eq!(layout.status.y, 23);
    assert_eq!(layout.list_inner.h, layout.list_card.h - 2);
}

#[test]
fn add_button_sits_right_of_input_field() {
    let layout = compute(Rect::new(0, 0, 80, 24), "");
    assert_eq!(layout.add_button.w, ADD_BUTTON_LABEL.len() as u16);
    assert_eq!(layout.add_button.y, layout.input_field.y);
    assert!(layout.input_field.right() < layout.add_button.x);
    assert_eq!(layout.add_button.right(), layout.input_card.right() - 2);
}

#[test]
fn wide_terminals_center_the_content() {
    let layout = compute(Rect::new(0, 0, 200, 30), "");
    assert_eq!(layout.chain_card.w, MAX_CONTENT_WIDTH);
    assert_eq!(layout.chain_card.x, (200 - MAX_CONTENT_WIDTH) / 2);
}

#[test]
fn chain_card_leaves_room_for_the_list() {
    let sentence = "I x, then I y, ".repeat(60);
    let layout = compute(Rect::new(0, 0, 40, 20), &sentence);
    assert!(layout.list_inner.h >= 3);
}

#[test]
fn cut_chain_ends_with_ellipsis() {
    let sentence = "I x, then I y, ".repeat(60);
    let layout = compute(Rect::new(0, 0, 40, 20), &sentence);
    let last = layout.chain_lines.last().unwrap();
    assert!(last.ends_with('…'));
    assert!(UnicodeWidthStr::width(last.as_str()) <= 36);
}

#[test]
fn truncate_lines_marks_only_real_cuts() {
    let mut lines = vec!["I a,".to_string(), "then I b.".to_string()];
    truncate_lines(&mut lines, 2, 10);
    assert_eq!(lines, vec!["I a,".to_string(), "then I b.".to_string()]);

    let mut lines = vec!["I a, then".to_string(), "I b.".to_string()];
    truncate_lines(&mut lines, 1, 9);
    assert_eq!(lines, vec!["I a, the…".to_string()]);

    let mut lines = vec!["I a,".to_string(), "then I b.".to_string()];
    truncate_lines(&mut lines, 1, 10);
    assert_eq!(lines, vec!["I a,…".to_string()]);
}

#[test]
fn input_window_scrolls_to_keep_cursor_visible() {
    assert_eq!(input_window("abc", 3, 10), ("abc".to_string(), 3));
    assert_eq!(input_window("abcdef", 6, 4), ("def".to_string(), 3));
    assert_eq!(input_window("abcdef", 0, 4), ("abcd".to_string(), 0));
    assert_eq!(input_window("abc", 1, 0), (String::new(), 0));
}
