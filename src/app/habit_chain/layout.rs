//! Screen geometry for the habit chain view.

use crate::ui::core::geom::{Insets, Rect};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub(super) const HEADER_HEIGHT: u16 = 3;
pub(super) const INPUT_CARD_HEIGHT: u16 = 3;
pub(super) const STATUS_HEIGHT: u16 = 1;
pub(super) const MAX_CONTENT_WIDTH: u16 = 96;
pub(super) const ADD_BUTTON_LABEL: &str = "[ + Add Habit ]";
pub(super) const REMOVE_LABEL: &str = "[x]";
const ELLIPSIS: &str = "…";
const ELLIPSIS_WIDTH: usize = 1;
/// Rows the list card keeps for itself before the chain card may grow.
const MIN_LIST_ROWS: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Layout {
    pub title: Rect,
    pub tagline: Rect,
    pub chain_card: Rect,
    pub chain_inner: Rect,
    pub chain_lines: Vec<String>,
    pub input_card: Rect,
    pub input_field: Rect,
    pub add_button: Rect,
    pub list_card: Rect,
    pub list_inner: Rect,
    pub status: Rect,
}

pub(super) fn compute(area: Rect, sentence: &str) -> Layout {
    let content_w = area.w.min(MAX_CONTENT_WIDTH);
    let content = Rect::new(
        area.x.saturating_add((area.w - content_w) / 2),
        area.y,
        content_w,
        area.h,
    );

    let (body, status) = content.split_bottom(STATUS_HEIGHT);
    let (header, body) = body.split_top(HEADER_HEIGHT);
    let title = header.row(0);
    let tagline = header.row(1);

    let card_inset = Insets::all(1);
    let text_w = content_w.saturating_sub(4) as usize;
    let mut chain_lines = wrap_words(sentence, text_w);
    let reserved = INPUT_CARD_HEIGHT + MIN_LIST_ROWS + 2 + 2;
    let max_lines = body.h.saturating_sub(reserved).max(1) as usize;
    truncate_lines(&mut chain_lines, max_lines, text_w);
    let chain_h = (chain_lines.len().max(1) as u16).saturating_add(2);

    let (chain_card, body) = body.split_top(chain_h);
    let chain_inner = chain_card.inset(card_inset).inset(Insets::xy(1, 0));

    let (input_card, list_card) = body.split_top(INPUT_CARD_HEIGHT);
    let input_row = input_card.inset(card_inset).inset(Insets::xy(1, 0));
    let button_w = ADD_BUTTON_LABEL.len() as u16;
    let (input_rest, add_button) = input_row.split_right(button_w);
    let input_field = input_rest.inset(Insets {
        right: 1,
        ..Insets::default()
    });

    let list_inner = list_card.inset(card_inset);

    Layout {
        title,
        tagline,
        chain_card,
        chain_inner,
        chain_lines,
        input_card,
        input_field,
        add_button,
        list_card,
        list_inner,
        status,
    }
}

/// Greedy word wrap to `width` columns. Words wider than a line are broken by grapheme.
/// Keeps the first `max_lines` lines; a cut ends the last kept line with `…`.
pub(super) fn truncate_lines(lines: &mut Vec<String>, max_lines: usize, width: usize) {
    if lines.len() <= max_lines {
        return;
    }
    lines.truncate(max_lines);
    let Some(last) = lines.last_mut() else {
        return;
    };
    if width == 0 {
        last.clear();
        return;
    }

    let mut kept = String::new();
    let mut kept_w = 0usize;
    for g in last.graphemes(true) {
        let g_w = UnicodeWidthStr::width(g);
        if kept_w + g_w + ELLIPSIS_WIDTH > width {
            break;
        }
        kept.push_str(g);
        kept_w += g_w;
    }
    kept.truncate(kept.trim_end().len());
    kept.push_str(ELLIPSIS);
    *last = kept;
}

pub(super) fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let mut line = String::new();
    let mut line_w = 0usize;
    for word in text.split_whitespace() {
        let word_w = UnicodeWidthStr::width(word);
        if line_w > 0 && line_w + 1 + word_w > width {
            lines.push(std::mem::take(&mut line));
            line_w = 0;
        }

        if word_w > width {
            for g in word.graphemes(true) {
                let g_w = UnicodeWidthStr::width(g);
                if line_w > 0 && line_w + g_w > width {
                    lines.push(std::mem::take(&mut line));
                    line_w = 0;
                }
                line.push_str(g);
                line_w += g_w;
            }
            continue;
        }

        if line_w > 0 {
            line.push(' ');
            line_w += 1;
        }
        line.push_str(word);
        line_w += word_w;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Slice of `text` that fits in `width` columns while keeping byte offset `cursor` visible.
///
/// Returns the visible text and the cursor column relative to its start.
pub(super) fn input_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let cursor = cursor.min(text.len());
    let before_w = UnicodeWidthStr::width(&text[..cursor]);
    // One column stays free for the cursor at the end.
    let skip_w = before_w.saturating_sub(width - 1);

    let mut skipped = 0usize;
    let mut visible = String::new();
    let mut visible_w = 0usize;
    for g in text.graphemes(true) {
        let g_w = UnicodeWidthStr::width(g);
        if skipped < skip_w {
            skipped += g_w;
            continue;
        }
        if visible_w + g_w > width {
            break;
        }
        visible.push_str(g);
        visible_w += g_w;
    }
    (visible, before_w - skipped.min(before_w))
}

#[cfg(test)]
#[path = "../../../tests/unit/app/habit_chain/layout.rs"]
mod tests;
