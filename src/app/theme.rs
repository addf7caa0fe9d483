//! UI theme: configurable colors kept in one place instead of scattered through rendering.

use crate::kernel::services::ports::ThemeSettings;
use crate::ui::core::style::{Color, Mod, Style};

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub accent_fg: Color,
    pub header_fg: Color,
    pub muted_fg: Color,
    pub border: Color,
    pub focus_border: Color,
    pub chain_fg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub selected_bg: Color,
    pub drop_target_bg: Color,
    pub remove_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            accent_fg: Color::Indexed(5),       // Magenta
            header_fg: Color::Indexed(15),      // White
            muted_fg: Color::Indexed(8),        // DarkGray
            border: Color::Indexed(8),          // DarkGray
            focus_border: Color::Indexed(5),    // Magenta
            chain_fg: Color::Indexed(15),       // White
            button_bg: Color::Indexed(5),       // Magenta
            button_fg: Color::Indexed(15),      // White
            selected_bg: Color::Indexed(8),     // DarkGray
            drop_target_bg: Color::Indexed(4),  // Blue
            remove_fg: Color::Indexed(1),       // Red
        }
    }
}

impl UiTheme {
    /// Overrides colors named in `settings`; values that do not parse keep the current color.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        apply(&mut self.accent_fg, &settings.accent_fg);
        apply(&mut self.header_fg, &settings.header_fg);
        apply(&mut self.muted_fg, &settings.muted_fg);
        apply(&mut self.border, &settings.border);
        apply(&mut self.focus_border, &settings.focus_border);
        apply(&mut self.chain_fg, &settings.chain_fg);
        apply(&mut self.button_bg, &settings.button_bg);
        apply(&mut self.button_fg, &settings.button_fg);
        apply(&mut self.selected_bg, &settings.selected_bg);
        apply(&mut self.drop_target_bg, &settings.drop_target_bg);
        apply(&mut self.remove_fg, &settings.remove_fg);
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.focus_border } else { self.border };
        Style::default().fg(color)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.header_fg).add_mod(Mod::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted_fg)
    }
}

fn apply(slot: &mut Color, value: &Option<String>) {
    let Some(value) = value else {
        return;
    };
    match parse_color(value) {
        Some(color) => *slot = color,
        None => tracing::warn!(color = %value, "unknown theme color ignored"),
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" | "dark_grey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
