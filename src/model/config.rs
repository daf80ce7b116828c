use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::gesture::SwipeDirection;

/// Configuration from reveal.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    #[serde(default)]
    pub direction: SwipeDirection,
    /// Fraction of the reveal width a released row must reach to stay open
    #[serde(default = "default_open_threshold")]
    pub open_threshold: f32,
    /// Forced close and tap-to-close animation length
    #[serde(default = "default_close_duration_ms")]
    pub close_duration_ms: u64,
    /// Release settle animation length
    #[serde(default = "default_settle_duration_ms")]
    pub settle_duration_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        GestureConfig {
            direction: SwipeDirection::Left,
            open_threshold: default_open_threshold(),
            close_duration_ms: default_close_duration_ms(),
            settle_duration_ms: default_settle_duration_ms(),
        }
    }
}

impl GestureConfig {
    pub fn close_duration(&self) -> Duration {
        Duration::from_millis(self.close_duration_ms)
    }

    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }
}

fn default_open_threshold() -> f32 {
    0.5
}

fn default_close_duration_ms() -> u64 {
    300
}

fn default_settle_duration_ms() -> u64 {
    200
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Label of the hidden edit button
    #[serde(default = "default_edit_label")]
    pub edit_label: String,
    /// Label of the hidden delete button
    #[serde(default = "default_delete_label")]
    pub delete_label: String,
    #[serde(default = "default_true")]
    pub show_hints: bool,
    /// Hex color overrides keyed by theme slot (e.g. `delete = "#FF4444"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            edit_label: default_edit_label(),
            delete_label: default_delete_label(),
            show_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_edit_label() -> String {
    "Edit".into()
}

fn default_delete_label() -> String {
    "Delete".into()
}

fn default_true() -> bool {
    true
}
