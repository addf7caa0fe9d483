use super::dnd_rules::{drop_intent, DropIntent, HABIT_DND_RULES};
use super::HabitChainApp;
use crate::core::event::{
    InputEvent, Key, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use crate::core::view::EventResult;
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::{Action as KernelAction, FocusTarget};
use crate::ui::core::geom::Pos;
use crate::ui::core::id::Id;
use crate::ui::core::input::UiEvent;
use crate::ui::core::tree::NodeKind;

const SCROLL_STEP: isize = 1;

pub(super) fn handle_input(app: &mut HabitChainApp, event: &InputEvent) -> EventResult {
    let changed = match event {
        InputEvent::Key(key_event) => return handle_key_event(app, key_event),
        InputEvent::Paste(text) => {
            let mut changed = app.dispatch_kernel(KernelAction::SetFocus(FocusTarget::Input));
            changed |= app.dispatch_kernel(KernelAction::InputPaste(text.clone()));
            changed
        }
        InputEvent::Mouse(mouse_event) => handle_mouse(app, event, mouse_event),
        InputEvent::Resize(..) => true,
        InputEvent::FocusLost => {
            app.ui_runtime.reset_pointer_state();
            app.dispatch_kernel(KernelAction::DragCancel)
        }
        InputEvent::FocusGained => false,
    };

    if app.should_quit {
        EventResult::Quit
    } else if changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

fn keybinding_context(focus: FocusTarget) -> KeybindingContext {
    match focus {
        FocusTarget::Input => KeybindingContext::Input,
        FocusTarget::List => KeybindingContext::List,
    }
}

fn handle_key_event(app: &mut HabitChainApp, key_event: &KeyEvent) -> EventResult {
    if key_event.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }

    let focus = app.store.state().ui.focus;
    let key: Key = (*key_event).into();

    if let Some(cmd) = app.keybindings.resolve(keybinding_context(focus), &key).copied() {
        if cmd == Command::Escape && app.ui_runtime.is_dragging() {
            app.ui_runtime.reset_pointer_state();
        }
        let _ = app.dispatch_kernel(KernelAction::RunCommand(cmd));
        if app.should_quit {
            return EventResult::Quit;
        }
        return EventResult::Consumed;
    }

    match (focus, key_event.typed_char()) {
        (FocusTarget::Input, Some(ch)) => {
            let _ = app.dispatch_kernel(KernelAction::InputInsert(ch));
            EventResult::Consumed
        }
        _ => EventResult::Ignored,
    }
}

fn handle_mouse(app: &mut HabitChainApp, event: &InputEvent, mouse_event: &MouseEvent) -> bool {
    let pos = Pos::new(mouse_event.column, mouse_event.row);
    let over_list = app
        .last_layout
        .as_ref()
        .is_some_and(|layout| layout.list_card.contains(pos));

    match mouse_event.kind {
        MouseEventKind::ScrollUp if over_list => {
            return app.dispatch_kernel(KernelAction::ListScroll {
                delta: -SCROLL_STEP,
            });
        }
        MouseEventKind::ScrollDown if over_list => {
            return app.dispatch_kernel(KernelAction::ListScroll { delta: SCROLL_STEP });
        }
        _ => {}
    }

    let ui_out = app
        .ui_runtime
        .on_input(event, &app.ui_tree, &HABIT_DND_RULES);
    let mut changed = ui_out.needs_redraw;
    for ui_event in ui_out.events {
        changed |= handle_ui_event(app, ui_event);
    }
    changed
}

fn node_kind(app: &HabitChainApp, id: Id) -> Option<NodeKind> {
    app.ui_tree.node(id).map(|node| node.kind)
}

fn handle_ui_event(app: &mut HabitChainApp, event: UiEvent) -> bool {
    match event {
        UiEvent::HoverChanged { .. } => false,
        UiEvent::Click {
            id,
            button: MouseButton::Left,
            ..
        } => match node_kind(app, id) {
            Some(NodeKind::HabitRow { index, .. }) => {
                app.dispatch_kernel(KernelAction::SelectRow { index })
            }
            Some(NodeKind::RemoveButton { habit }) => {
                app.dispatch_kernel(KernelAction::RemoveHabit { id: habit })
            }
            Some(NodeKind::HabitInput) => {
                app.dispatch_kernel(KernelAction::SetFocus(FocusTarget::Input))
            }
            Some(NodeKind::AddButton) => {
                let mut changed = app.dispatch_kernel(KernelAction::SubmitInput);
                changed |= app.dispatch_kernel(KernelAction::SetFocus(FocusTarget::Input));
                changed
            }
            None => false,
        },
        UiEvent::Click { .. } => false,
        UiEvent::DragStart { id, .. } => match node_kind(app, id) {
            Some(NodeKind::HabitRow { index, .. }) => {
                app.dispatch_kernel(KernelAction::DragStart { index })
            }
            _ => false,
        },
        UiEvent::DragMove { over, .. } => match over.and_then(|id| node_kind(app, id)) {
            Some(NodeKind::HabitRow { index, .. }) => {
                app.dispatch_kernel(KernelAction::DragOver { index })
            }
            _ => false,
        },
        UiEvent::Drop {
            payload, target, ..
        } => {
            let intent = node_kind(app, target).and_then(|kind| drop_intent(&payload, kind));
            match intent {
                Some(DropIntent::ReorderHabit { from, to }) => {
                    tracing::debug!(from, to, "habit dropped");
                    app.dispatch_kernel(KernelAction::DragDrop { index: to })
                }
                None => false,
            }
        }
        // Also reached after a drop; cancelling an idle drag is a no-op.
        UiEvent::DragEnd { .. } => app.dispatch_kernel(KernelAction::DragCancel),
    }
}
