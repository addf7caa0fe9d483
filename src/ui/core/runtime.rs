use super::geom::Pos;
use super::id::Id;
use super::input::{DragPayload, UiEvent};
use super::tree::{Node, Sense, UiTree};
use crate::core::event::{InputEvent, MouseButton, MouseEventKind};

/// Cells the pointer must travel while pressed before a press turns into a drag.
pub const DEFAULT_DRAG_THRESHOLD: u16 = 1;

/// App-specific drag-and-drop policy consulted by [`UiRuntime`].
pub trait DragDropRules {
    fn payload_for_source(&self, source: &Node) -> Option<DragPayload>;

    fn can_drop(&self, payload: &DragPayload, target: &Node) -> bool;
}

#[derive(Debug, Clone)]
pub struct UiRuntimeOutput {
    pub events: Vec<UiEvent>,
    pub needs_redraw: bool,
}

impl UiRuntimeOutput {
    pub fn empty() -> Self {
        Self {
            events: Vec::new(),
            needs_redraw: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PressedState {
    button: MouseButton,
    start: Pos,
    click: Option<Id>,
    drag_source: Option<Node>,
}

#[derive(Debug, Clone)]
struct DragSession {
    source: Id,
    payload: Option<DragPayload>,
    over: Option<Id>,
}

/// Turns raw mouse input into hover, click and drag-and-drop events against a [`UiTree`].
#[derive(Debug)]
pub struct UiRuntime {
    hovered: Option<Id>,
    pressed: Option<PressedState>,
    drag: Option<DragSession>,
    drag_threshold: u16,
}

impl Default for UiRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRuntime {
    pub fn new() -> Self {
        Self::with_drag_threshold(DEFAULT_DRAG_THRESHOLD)
    }

    pub fn with_drag_threshold(drag_threshold: u16) -> Self {
        Self {
            hovered: None,
            pressed: None,
            drag: None,
            drag_threshold,
        }
    }

    pub fn hovered(&self) -> Option<Id> {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_source(&self) -> Option<Id> {
        self.drag.as_ref().map(|d| d.source)
    }

    pub fn drag_payload(&self) -> Option<&DragPayload> {
        self.drag.as_ref()?.payload.as_ref()
    }

    pub fn drag_over(&self) -> Option<Id> {
        self.drag.as_ref()?.over
    }

    pub fn reset_pointer_state(&mut self) {
        self.pressed = None;
        self.drag = None;
    }

    pub fn on_input(
        &mut self,
        input: &InputEvent,
        tree: &UiTree,
        rules: &dyn DragDropRules,
    ) -> UiRuntimeOutput {
        let mut out = UiRuntimeOutput::empty();

        let InputEvent::Mouse(me) = input else {
            return out;
        };

        let pos = Pos::new(me.column, me.row);

        let next_hover = tree.hit_test_with_sense(pos, Sense::HOVER).map(|n| n.id);
        if next_hover != self.hovered {
            out.events.push(UiEvent::HoverChanged {
                from: self.hovered,
                to: next_hover,
                pos,
            });
            self.hovered = next_hover;
            out.needs_redraw = true;
        }

        match me.kind {
            MouseEventKind::Down(button) => {
                let click = tree.hit_test_with_sense(pos, Sense::CLICK).map(|n| n.id);
                let drag_source = tree.hit_test_with_sense(pos, Sense::DRAG_SOURCE).copied();
                self.pressed = Some(PressedState {
                    button,
                    start: pos,
                    click,
                    drag_source,
                });
                self.drag = None;
            }
            MouseEventKind::Up(button) => {
                let pressed = self.pressed.take();

                if let Some(drag) = self.drag.take() {
                    // Drop (if any) is reported before DragEnd.
                    if let (Some(payload), Some(target)) = (drag.payload, drag.over) {
                        out.events.push(UiEvent::Drop {
                            payload,
                            target,
                            pos,
                        });
                    }
                    out.events.push(UiEvent::DragEnd {
                        id: drag.source,
                        pos,
                    });
                    out.needs_redraw = true;
                } else if let Some(pressed) = pressed.filter(|p| p.button == button) {
                    let released_on = tree.hit_test_with_sense(pos, Sense::CLICK).map(|n| n.id);
                    if let Some(id) = pressed.click.filter(|id| released_on == Some(*id)) {
                        out.events.push(UiEvent::Click { id, button, pos });
                        out.needs_redraw = true;
                    }
                }
            }
            MouseEventKind::Drag(_) => {
                let Some(pressed) = self.pressed else {
                    return out;
                };

                if self.drag.is_none() {
                    if pressed.start.distance(pos) < self.drag_threshold as u32 {
                        return out;
                    }
                    let Some(source) = pressed.drag_source else {
                        return out;
                    };

                    self.drag = Some(DragSession {
                        source: source.id,
                        payload: rules.payload_for_source(&source),
                        over: None,
                    });
                    out.events.push(UiEvent::DragStart {
                        id: source.id,
                        pos: pressed.start,
                    });
                }

                if let Some(drag) = &mut self.drag {
                    let over = drag.payload.as_ref().and_then(|payload| {
                        tree.hit_test_with_sense_where(pos, Sense::DROP_TARGET, |n| {
                            rules.can_drop(payload, n)
                        })
                        .map(|n| n.id)
                    });
                    drag.over = over;

                    out.events.push(UiEvent::DragMove {
                        id: drag.source,
                        pos,
                        over,
                    });
                    out.needs_redraw = true;
                }
            }
            MouseEventKind::Moved
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollDown
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => {}
        }

        out
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/runtime.rs"]
mod tests;
