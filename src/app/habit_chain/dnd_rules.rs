use crate::ui::core::input::DragPayload;
use crate::ui::core::runtime::DragDropRules;
use crate::ui::core::tree::{Node, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DropIntent {
    ReorderHabit { from: usize, to: usize },
}

#[derive(Debug, Clone, Copy, Default)]
pub(super) struct HabitDragDropRules;

pub(super) const HABIT_DND_RULES: HabitDragDropRules = HabitDragDropRules;

pub(super) fn drag_payload_for_source(kind: NodeKind) -> Option<DragPayload> {
    match kind {
        NodeKind::HabitRow { index, habit } => Some(DragPayload::Habit {
            from_index: index,
            habit,
        }),
        _ => None,
    }
}

pub(super) fn drop_intent(payload: &DragPayload, target_kind: NodeKind) -> Option<DropIntent> {
    match (payload, target_kind) {
        (DragPayload::Habit { from_index, .. }, NodeKind::HabitRow { index, .. }) => {
            Some(DropIntent::ReorderHabit {
                from: *from_index,
                to: index,
            })
        }
        _ => None,
    }
}

impl DragDropRules for HabitDragDropRules {
    fn payload_for_source(&self, source: &Node) -> Option<DragPayload> {
        drag_payload_for_source(source.kind)
    }

    fn can_drop(&self, payload: &DragPayload, target: &Node) -> bool {
        drop_intent(payload, target.kind).is_some()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/habit_chain/dnd_rules.rs"]
mod tests;
