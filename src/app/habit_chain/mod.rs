//! The habit chain view: owns the store and routes input and rendering through it.

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::kernel::services::adapters::{apply_keybinding_rules, KeybindingService};
use crate::kernel::services::ports::Settings;
use crate::kernel::{Action as KernelAction, AppState, Effect as KernelEffect, FocusTarget, Store};
use crate::models::HabitList;
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::runtime::{UiRuntime, DEFAULT_DRAG_THRESHOLD};
use crate::ui::core::tree::UiTree;

mod dnd_rules;
mod input;
mod layout;
mod render;

pub struct HabitChainApp {
    store: Store,
    ui_runtime: UiRuntime,
    ui_tree: UiTree,
    painter: Painter,
    keybindings: KeybindingService,
    theme: UiTheme,
    last_layout: Option<layout::Layout>,
    cursor: Option<Pos>,
    should_quit: bool,
}

impl HabitChainApp {
    pub fn new(habits: HabitList) -> Self {
        Self::with_settings(habits, None)
    }

    pub fn with_settings(habits: HabitList, settings: Option<&Settings>) -> Self {
        let mut keybindings = KeybindingService::new();
        let mut theme = UiTheme::default();
        let mut drag_threshold = DEFAULT_DRAG_THRESHOLD;

        if let Some(settings) = settings {
            apply_keybinding_rules(&mut keybindings, &settings.keybindings);
            theme.apply_settings(&settings.theme);
            if let Some(threshold) = settings.drag_threshold {
                drag_threshold = threshold;
            }
        }

        Self {
            store: Store::new(AppState::new(habits)),
            ui_runtime: UiRuntime::with_drag_threshold(drag_threshold),
            ui_tree: UiTree::new(),
            painter: Painter::new(),
            keybindings,
            theme,
            last_layout: None,
            cursor: None,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: KernelEffect) {
        match effect {
            KernelEffect::Quit => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
        }
    }
}

impl View for HabitChainApp {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        render::render(self, backend, area);
    }

    fn cursor_position(&self) -> Option<Pos> {
        self.cursor
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/habit_chain/mod.rs"]
mod tests;
