use super::layout::{self, Layout, ADD_BUTTON_LABEL, REMOVE_LABEL};
use super::HabitChainApp;
use crate::app::theme::UiTheme;
use crate::kernel::chain::{format_chain, step_prefix};
use crate::kernel::{Action as KernelAction, AppState, FocusTarget};
use crate::models::HabitId;
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Insets, Pos, Rect};
use crate::ui::core::id::{Id, IdPath};
use crate::ui::core::painter::{BorderKind, Painter};
use crate::ui::core::runtime::UiRuntime;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::tree::{Node, NodeKind, Sense, UiTree};
use unicode_width::UnicodeWidthStr;

const ID_ROOT: &str = "habitchain";

const TITLE: &str = "Habit Stack Builder";
const TAGLINE: &str = "Create powerful habit chains by linking new habits to existing routines.";
const CHAIN_TITLE: &str = " Your Habit Chain ";
const INPUT_TITLE: &str = " Add New Habit ";
const INPUT_PLACEHOLDER: &str = "e.g., brush my teeth, do 10 pushups, make coffee...";
const LIST_TITLE: &str = " Reorder Your Habits (Drag & Drop) ";
const EMPTY_LIST_TITLE: &str = "No habits yet";
const EMPTY_LIST_HINT: &str = "Start building your habit chain by adding your first habit above.";
const DRAG_HANDLE: &str = "⋮⋮";

pub(super) fn habit_row_id(habit: HabitId) -> Id {
    IdPath::root(ID_ROOT)
        .push_str("row")
        .push_u64(habit.get())
        .finish()
}

pub(super) fn remove_button_id(habit: HabitId) -> Id {
    IdPath::root(ID_ROOT)
        .push_str("remove")
        .push_u64(habit.get())
        .finish()
}

pub(super) fn input_id() -> Id {
    IdPath::root(ID_ROOT).push_str("input").finish()
}

pub(super) fn add_button_id() -> Id {
    IdPath::root(ID_ROOT).push_str("add").finish()
}

pub(super) fn render(app: &mut HabitChainApp, backend: &mut dyn Backend, area: Rect) {
    let sentence = format_chain(app.store.state().habits.as_slice());
    let layout = layout::compute(area, &sentence);
    let _ = app.dispatch_kernel(KernelAction::ListSetViewHeight {
        height: layout.list_inner.h as usize,
    });

    app.painter.clear();
    app.ui_tree.clear();
    app.painter.fill_rect(area, Style::default());

    let state = app.store.state();
    let painter = &mut app.painter;
    let tree = &mut app.ui_tree;
    let theme = &app.theme;
    let runtime = &app.ui_runtime;

    paint_header(painter, theme, &layout);
    paint_chain(painter, theme, state, &layout);
    let cursor = paint_input(painter, tree, theme, runtime, state, &layout);
    paint_list(painter, tree, theme, runtime, state, &layout);
    paint_status(painter, theme, state, &layout);

    backend.draw(area, app.painter.cmds());
    backend.set_cursor(cursor);
    app.cursor = cursor;
    app.last_layout = Some(layout);
}

fn text_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

fn paint_centered(painter: &mut Painter, row: Rect, text: &str, style: Style) {
    let strip = row.centered_row(row.y, text_width(text));
    painter.text_clipped(Pos::new(strip.x, strip.y), text, style, row);
}

fn paint_card(painter: &mut Painter, theme: &UiTheme, card: Rect, title: &str, focused: bool) {
    painter.border(card, theme.border_style(focused), BorderKind::Rounded);
    if card.w > 4 {
        let title_style = if focused {
            theme.title_style().fg(theme.accent_fg)
        } else {
            theme.title_style()
        };
        let clip = Rect::new(card.x + 2, card.y, card.w - 4, 1);
        painter.text_clipped(Pos::new(clip.x, clip.y), title, title_style, clip);
    }
}

fn paint_header(painter: &mut Painter, theme: &UiTheme, layout: &Layout) {
    paint_centered(
        painter,
        layout.title,
        TITLE,
        Style::default().fg(theme.accent_fg).add_mod(Mod::BOLD),
    );
    paint_centered(painter, layout.tagline, TAGLINE, theme.muted_style());
}

fn paint_chain(painter: &mut Painter, theme: &UiTheme, state: &AppState, layout: &Layout) {
    paint_card(painter, theme, layout.chain_card, CHAIN_TITLE, false);

    let style = if state.habits.is_empty() {
        theme.muted_style().add_mod(Mod::ITALIC)
    } else {
        Style::default().fg(theme.chain_fg).add_mod(Mod::BOLD)
    };
    for (i, line) in layout.chain_lines.iter().enumerate() {
        let row = layout.chain_inner.row(i as u16);
        painter.text_clipped(Pos::new(row.x, row.y), line.as_str(), style, row);
    }
}

fn paint_input(
    painter: &mut Painter,
    tree: &mut UiTree,
    theme: &UiTheme,
    runtime: &UiRuntime,
    state: &AppState,
    layout: &Layout,
) -> Option<Pos> {
    let focused = state.ui.focus == FocusTarget::Input;
    paint_card(painter, theme, layout.input_card, INPUT_TITLE, focused);

    let field = layout.input_field;
    let mut cursor = None;
    if state.input.is_empty() {
        painter.text_clipped(
            Pos::new(field.x, field.y),
            INPUT_PLACEHOLDER,
            theme.muted_style(),
            field,
        );
        if focused && !field.is_empty() {
            cursor = Some(Pos::new(field.x, field.y));
        }
    } else {
        let (visible, col) =
            layout::input_window(state.input.text(), state.input.cursor(), field.w as usize);
        painter.text_clipped(Pos::new(field.x, field.y), visible, Style::default(), field);
        if focused && !field.is_empty() {
            cursor = Some(Pos::new(field.x.saturating_add(col as u16), field.y));
        }
    }

    let mut button_style = Style::default()
        .fg(theme.button_fg)
        .bg(theme.button_bg)
        .add_mod(Mod::BOLD);
    if runtime.hovered() == Some(add_button_id()) {
        button_style = button_style.add_mod(Mod::UNDERLINE);
    }
    painter.text_clipped(
        Pos::new(layout.add_button.x, layout.add_button.y),
        ADD_BUTTON_LABEL,
        button_style,
        layout.add_button,
    );

    tree.push(Node {
        id: input_id(),
        rect: field,
        layer: 0,
        z: 0,
        sense: Sense::HOVER | Sense::CLICK,
        kind: NodeKind::HabitInput,
    });
    tree.push(Node {
        id: add_button_id(),
        rect: layout.add_button,
        layer: 0,
        z: 0,
        sense: Sense::HOVER | Sense::CLICK,
        kind: NodeKind::AddButton,
    });

    cursor
}

fn paint_list(
    painter: &mut Painter,
    tree: &mut UiTree,
    theme: &UiTheme,
    runtime: &UiRuntime,
    state: &AppState,
    layout: &Layout,
) {
    let focused = state.ui.focus == FocusTarget::List;
    paint_card(painter, theme, layout.list_card, LIST_TITLE, focused);

    let inner = layout.list_inner;
    let len = state.habits.len();
    if len == 0 {
        if inner.h > 0 {
            paint_centered(painter, inner.row(0), EMPTY_LIST_TITLE, theme.title_style());
        }
        if inner.h > 1 {
            paint_centered(painter, inner.row(1), EMPTY_LIST_HINT, theme.muted_style());
        }
        return;
    }

    let drag_source = state.drag.source();
    let drag_over = runtime.drag_over();
    let first = state.ui.list_scroll.min(len);
    let last = (first + inner.h as usize).min(len);

    for (offset, index) in (first..last).enumerate() {
        let Some(record) = state.habits.get(index) else {
            break;
        };
        let row = inner.row(offset as u16);
        let row_id = habit_row_id(record.id);
        let remove_id = remove_button_id(record.id);

        let mut row_style = Style::default();
        if drag_over == Some(row_id) {
            row_style = row_style.bg(theme.drop_target_bg);
        } else if focused && drag_source.is_none() && state.ui.selected == index {
            row_style = row_style.bg(theme.selected_bg);
        }
        if drag_source == Some(index) {
            row_style = row_style.add_mod(Mod::DIM);
        }
        painter.fill_rect(row, row_style);

        let (label_area, remove_area) = row
            .inset(Insets::xy(1, 0))
            .split_right(text_width(REMOVE_LABEL));
        let label_clip = Rect::new(
            label_area.x,
            label_area.y,
            label_area.w.saturating_sub(1),
            label_area.h,
        );

        painter.text_clipped(
            Pos::new(label_clip.x, label_clip.y),
            DRAG_HANDLE,
            row_style.patch(theme.muted_style()),
            label_clip,
        );
        let label = format!("{}  {}{}", index + 1, step_prefix(index), record.name);
        let label_x = label_clip.x.saturating_add(text_width(DRAG_HANDLE) + 1);
        painter.text_clipped(
            Pos::new(label_x, label_clip.y),
            label,
            row_style,
            label_clip,
        );

        let mut remove_style = row_style.patch(Style::default().fg(theme.remove_fg));
        if runtime.hovered() == Some(remove_id) {
            remove_style = remove_style.add_mod(Mod::BOLD | Mod::REVERSE);
        }
        painter.text_clipped(
            Pos::new(remove_area.x, remove_area.y),
            REMOVE_LABEL,
            remove_style,
            remove_area,
        );

        tree.push(Node {
            id: row_id,
            rect: row,
            layer: 0,
            z: 0,
            sense: Sense::HOVER | Sense::CLICK | Sense::DRAG_SOURCE | Sense::DROP_TARGET,
            kind: NodeKind::HabitRow {
                index,
                habit: record.id,
            },
        });
        tree.push(Node {
            id: remove_id,
            rect: remove_area,
            layer: 0,
            z: 0,
            sense: Sense::HOVER | Sense::CLICK,
            kind: NodeKind::RemoveButton { habit: record.id },
        });
    }

    if len > inner.h as usize && layout.list_card.w > 4 {
        let range = format!(" {}-{} of {} ", first + 1, last, len);
        let w = text_width(&range);
        let x = layout
            .list_card
            .right()
            .saturating_sub(w.saturating_add(2));
        let y = layout.list_card.bottom().saturating_sub(1);
        painter.text_clipped(Pos::new(x, y), range, theme.muted_style(), layout.list_card);
    }
}

fn status_hint(state: &AppState) -> &'static str {
    if state.drag.is_dragging() {
        return "Release over a habit to drop it there · Esc cancel";
    }
    match state.ui.focus {
        FocusTarget::Input => "Enter add · Tab/↓ habits · Esc clear · Ctrl+Q quit",
        FocusTarget::List => {
            "↑/↓ select · Alt+↑/↓ move · d remove · drag to reorder · Tab input · Ctrl+Q quit"
        }
    }
}

fn paint_status(painter: &mut Painter, theme: &UiTheme, state: &AppState, layout: &Layout) {
    let status = layout.status;
    if status.is_empty() {
        return;
    }

    let count = match state.habits.len() {
        1 => "1 habit".to_string(),
        n => format!("{n} habits"),
    };
    let count_w = text_width(&count);
    let (hint_area, count_area) = status.split_right(count_w);

    painter.text_clipped(
        Pos::new(hint_area.x, hint_area.y),
        status_hint(state),
        theme.muted_style(),
        Rect::new(hint_area.x, hint_area.y, hint_area.w.saturating_sub(1), 1),
    );
    painter.text_clipped(
        Pos::new(count_area.x, count_area.y),
        count,
        Style::default().fg(theme.accent_fg),
        count_area,
    );
}
