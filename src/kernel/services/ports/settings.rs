use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub theme: ThemeSettings,
    /// Cells the pointer must travel before a pressed row starts dragging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drag_threshold: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    /// Command name, or an empty string to remove the binding.
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_target_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            accent_fg: Some("magenta".to_string()),
            header_fg: Some("white".to_string()),
            muted_fg: Some("dark_gray".to_string()),
            border: Some("dark_gray".to_string()),
            focus_border: Some("magenta".to_string()),
            chain_fg: Some("white".to_string()),
            button_bg: Some("magenta".to_string()),
            button_fg: Some("white".to_string()),
            selected_bg: Some("dark_gray".to_string()),
            drop_target_bg: Some("blue".to_string()),
            remove_fg: Some("red".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
