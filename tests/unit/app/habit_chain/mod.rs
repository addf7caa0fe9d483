use super::*;
use crate::core::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crate::kernel::services::ports::KeybindingRule;
use crate::ui::backend::test::TestBackend;

fn key(code: KeyCode, modifiers: KeyModifiers) -> InputEvent {
    InputEvent::Key(KeyEvent::press(code, modifiers))
}

fn mouse(kind: MouseEventKind, pos: Pos) -> InputEvent {
    InputEvent::Mouse(MouseEvent {
        kind,
        column: pos.x,
        row: pos.y,
        modifiers: KeyModifiers::NONE,
    })
}

fn type_text(app: &mut HabitChainApp, text: &str) {
    for ch in text.chars() {
        app.handle_input(&key(KeyCode::Char(ch), KeyModifiers::NONE));
    }
}

fn draw(app: &mut HabitChainApp, backend: &mut TestBackend) {
    let area = backend.area();
    app.render(backend, area);
}

fn row_pos(app: &HabitChainApp, index: usize) -> Pos {
    let layout = app.last_layout.as_ref().unwrap();
    let offset = index - app.state().ui.list_scroll;
    let row = layout.list_inner.row(offset as u16);
    Pos::new(row.x + 3, row.y)
}

fn seeded(names: &[&str]) -> (HabitChainApp, TestBackend) {
    let mut app = HabitChainApp::new(HabitList::from_names(names.iter().copied()));
    let mut backend = TestBackend::new(80, 24);
    draw(&mut app, &mut backend);
    (app, backend)
}

#[test]
fn empty_state_shows_placeholders() {
    let (_app, backend) = seeded(&[]);
    let buf = backend.buffer();

    assert!(buf.contains_text("Habit Stack Builder"));
    assert!(buf.contains_text("Your Habit Chain"));
    assert!(buf.contains_text("Start building your habit chain..."));
    assert!(buf.contains_text("e.g., brush my teeth, do 10 pushups, make coffee..."));
    assert!(buf.contains_text("[ + Add Habit ]"));
    assert!(buf.contains_text("No habits yet"));
    assert!(buf.contains_text("0 habits"));
}

#[test]
fn typing_and_enter_adds_a_habit() {
    let (mut app, mut backend) = seeded(&[]);
    type_text(&mut app, "stretch");
    let result = app.handle_input(&key(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(app.state().habits.names(), vec!["stretch"]);
    assert!(app.state().input.is_empty());

    draw(&mut app, &mut backend);
    assert!(backend.buffer().contains_text("I stretch"));
    assert!(backend.buffer().contains_text("1  I stretch"));
    assert!(!backend.buffer().contains_text("No habits yet"));
}

#[test]
fn rows_use_then_prefix_after_the_first() {
    let (_app, backend) = seeded(&["stretch", "drink water", "journal"]);
    let buf = backend.buffer();

    assert!(buf.contains_text("I stretch, then I drink water, then I journal."));
    assert!(buf.contains_text("⋮⋮ 1  I stretch"));
    assert!(buf.contains_text("⋮⋮ 2  Then I drink water"));
    assert!(buf.contains_text("⋮⋮ 3  Then I journal"));
    assert!(buf.contains_text("[x]"));
}

#[test]
fn clicking_add_button_submits_input() {
    let (mut app, mut backend) = seeded(&[]);
    type_text(&mut app, "journal");
    draw(&mut app, &mut backend);

    let button = app.last_layout.as_ref().unwrap().add_button;
    let pos = Pos::new(button.x + 2, button.y);
    app.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), pos));
    app.handle_input(&mouse(MouseEventKind::Up(MouseButton::Left), pos));

    assert_eq!(app.state().habits.names(), vec!["journal"]);
    assert_eq!(app.focus(), FocusTarget::Input);
}

#[test]
fn clicking_remove_button_removes_that_habit() {
    let (mut app, _backend) = seeded(&["A", "B", "C"]);
    let layout = app.last_layout.as_ref().unwrap();
    let row = layout.list_inner.row(1);
    let pos = Pos::new(row.right() - 3, row.y);

    app.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), pos));
    app.handle_input(&mouse(MouseEventKind::Up(MouseButton::Left), pos));

    assert_eq!(app.state().habits.names(), vec!["A", "C"]);
}

#[test]
fn mouse_drag_reorders_rows() {
    let (mut app, mut backend) = seeded(&["A", "B", "C"]);
    let from = row_pos(&app, 0);
    let to = row_pos(&app, 2);

    app.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), from));
    app.handle_input(&mouse(MouseEventKind::Drag(MouseButton::Left), to));
    assert_eq!(app.state().drag.source(), Some(0));

    app.handle_input(&mouse(MouseEventKind::Up(MouseButton::Left), to));
    assert!(!app.state().drag.is_dragging());
    assert_eq!(app.state().habits.names(), vec!["B", "C", "A"]);

    draw(&mut app, &mut backend);
    assert!(backend.buffer().contains_text("I B, then I C, then I A."));
}

#[test]
fn drag_over_row_highlights_drop_target() {
    let (mut app, mut backend) = seeded(&["A", "B", "C"]);
    let from = row_pos(&app, 0);
    let to = row_pos(&app, 1);

    app.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), from));
    app.handle_input(&mouse(MouseEventKind::Drag(MouseButton::Left), to));
    draw(&mut app, &mut backend);

    let theme = UiTheme::default();
    let target = backend.buffer().cell(to.x, to.y).unwrap();
    assert_eq!(target.style.bg, Some(theme.drop_target_bg));
    let source = backend.buffer().cell(from.x, from.y).unwrap();
    assert!(source.style.mods.contains(crate::ui::core::style::Mod::DIM));
    assert!(backend.buffer().contains_text("Release over a habit"));
}

#[test]
fn escape_cancels_mouse_drag() {
    let (mut app, _backend) = seeded(&["A", "B", "C"]);
    let from = row_pos(&app, 0);
    let to = row_pos(&app, 2);

    app.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), from));
    app.handle_input(&mouse(MouseEventKind::Drag(MouseButton::Left), to));
    app.handle_input(&key(KeyCode::Esc, KeyModifiers::NONE));
    assert!(!app.state().drag.is_dragging());

    app.handle_input(&mouse(MouseEventKind::Up(MouseButton::Left), to));
    assert_eq!(app.state().habits.names(), vec!["A", "B", "C"]);
}

#[test]
fn keyboard_reorder_in_list() {
    let (mut app, _backend) = seeded(&["A", "B", "C"]);
    app.handle_input(&key(KeyCode::Tab, KeyModifiers::NONE));
    assert_eq!(app.focus(), FocusTarget::List);

    app.handle_input(&key(KeyCode::Down, KeyModifiers::ALT));
    assert_eq!(app.state().habits.names(), vec!["B", "A", "C"]);
    assert_eq!(app.state().ui.selected, 1);

    app.handle_input(&key(KeyCode::Char('d'), KeyModifiers::NONE));
    assert_eq!(app.state().habits.names(), vec!["B", "C"]);
}

#[test]
fn letters_in_list_do_not_type() {
    let (mut app, _backend) = seeded(&["A"]);
    app.handle_input(&key(KeyCode::Tab, KeyModifiers::NONE));
    let result = app.handle_input(&key(KeyCode::Char('z'), KeyModifiers::NONE));
    assert_eq!(result, EventResult::Ignored);
    assert!(app.state().input.is_empty());
}

#[test]
fn ctrl_q_quits() {
    let (mut app, _backend) = seeded(&[]);
    let result = app.handle_input(&key(KeyCode::Char('q'), KeyModifiers::CONTROL));
    assert_eq!(result, EventResult::Quit);
    assert!(app.should_quit());
}

#[test]
fn key_release_is_ignored() {
    let (mut app, _backend) = seeded(&[]);
    let event = InputEvent::Key(KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
    });
    assert_eq!(app.handle_input(&event), EventResult::Ignored);
    assert!(app.state().input.is_empty());
}

#[test]
fn cursor_follows_input_text() {
    let (mut app, mut backend) = seeded(&[]);
    type_text(&mut app, "abc");
    draw(&mut app, &mut backend);

    let field = app.last_layout.as_ref().unwrap().input_field;
    assert_eq!(backend.cursor(), Some(Pos::new(field.x + 3, field.y)));
    assert_eq!(app.cursor_position(), backend.cursor());

    app.handle_input(&key(KeyCode::Tab, KeyModifiers::NONE));
    draw(&mut app, &mut backend);
    assert_eq!(backend.cursor(), None);
}

#[test]
fn paste_goes_to_input() {
    let (mut app, _backend) = seeded(&[]);
    app.handle_input(&key(KeyCode::Tab, KeyModifiers::NONE));
    app.handle_input(&InputEvent::Paste("make coffee".to_string()));

    assert_eq!(app.focus(), FocusTarget::Input);
    assert_eq!(app.state().input.text(), "make coffee");
}

#[test]
fn wheel_scrolls_long_lists() {
    let names: Vec<String> = (0..30).map(|i| format!("habit {i}")).collect();
    let mut app = HabitChainApp::new(HabitList::from_names(names.iter().map(String::as_str)));
    let mut backend = TestBackend::new(80, 24);
    draw(&mut app, &mut backend);

    let list = app.last_layout.as_ref().unwrap().list_inner;
    let pos = Pos::new(list.x + 2, list.y + 1);
    app.handle_input(&mouse(MouseEventKind::ScrollDown, pos));
    app.handle_input(&mouse(MouseEventKind::ScrollDown, pos));
    assert_eq!(app.state().ui.list_scroll, 2);

    draw(&mut app, &mut backend);
    assert!(backend.buffer().contains_text("3  Then I habit 2"));
    assert!(!backend.buffer().contains_text("1  I habit 0"));
    assert!(backend.buffer().contains_text("of 30"));
}

#[test]
fn settings_override_keys_and_threshold() {
    let settings = Settings {
        keybindings: vec![KeybindingRule {
            key: "ctrl+x".to_string(),
            command: "quit".to_string(),
            context: None,
        }],
        drag_threshold: Some(5),
        ..Settings::default()
    };
    let mut app = HabitChainApp::with_settings(HabitList::from_names(["A", "B", "C"]), Some(&settings));
    let mut backend = TestBackend::new(80, 24);
    draw(&mut app, &mut backend);

    let from = row_pos(&app, 0);
    let to = row_pos(&app, 2);
    app.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), from));
    app.handle_input(&mouse(MouseEventKind::Drag(MouseButton::Left), to));
    assert!(!app.state().drag.is_dragging());

    let result = app.handle_input(&key(KeyCode::Char('x'), KeyModifiers::CONTROL));
    assert_eq!(result, EventResult::Quit);
}
