use super::geom::Pos;
use super::id::Id;
use crate::core::event::MouseButton;
use crate::models::HabitId;

/// What a drag session carries from its source to a drop target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragPayload {
    Habit { from_index: usize, habit: HabitId },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    HoverChanged {
        from: Option<Id>,
        to: Option<Id>,
        pos: Pos,
    },
    Click {
        id: Id,
        button: MouseButton,
        pos: Pos,
    },
    DragStart {
        id: Id,
        pos: Pos,
    },
    DragMove {
        id: Id,
        pos: Pos,
        over: Option<Id>,
    },
    DragEnd {
        id: Id,
        pos: Pos,
    },
    Drop {
        payload: DragPayload,
        target: Id,
        pos: Pos,
    },
}
