//! Surface configuration and keyboard shortcuts.

use crate::error::CanvasResult;
use crate::input::KeyEvent;
use crate::tags::Tag;
use serde::{Deserialize, Serialize};

/// Editing commands reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Delete every element.
    ClearAll,
    /// Delete the element under the pointer.
    DeleteCurrent,
    /// Select every element.
    SelectAll,
}

impl Command {
    pub fn description(&self) -> &'static str {
        match self {
            Command::ClearAll => "Delete all shapes",
            Command::DeleteCurrent => "Delete the shape under the pointer",
            Command::SelectAll => "Select all shapes",
        }
    }
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
    pub command: Command,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, ctrl: bool, shift: bool, command: Command) -> Self {
        Self {
            key: key.into(),
            ctrl,
            shift,
            command,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+A").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key.as_str());
        parts.join("+")
    }

    /// Key names compare case-insensitively.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key.eq_ignore_ascii_case(&event.key)
            && self.ctrl == event.modifiers.ctrl
            && self.shift == event.modifiers.shift
    }
}

/// Keyboard shortcut table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    shortcuts: Vec<Shortcut>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            shortcuts: vec![
                Shortcut::new("F1", false, false, Command::ClearAll),
                Shortcut::new("Delete", false, false, Command::DeleteCurrent),
                Shortcut::new("A", true, false, Command::SelectAll),
            ],
        }
    }
}

impl KeyBindings {
    pub fn new(shortcuts: Vec<Shortcut>) -> Self {
        Self { shortcuts }
    }

    /// First command bound to this key press.
    pub fn resolve(&self, event: &KeyEvent) -> Option<Command> {
        self.shortcuts
            .iter()
            .find(|s| s.matches(event))
            .map(|s| s.command)
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    /// One line per shortcut, for help overlays.
    pub fn describe(&self) -> Vec<String> {
        self.shortcuts
            .iter()
            .map(|s| format!("{:20} {}", s.format(), s.command.description()))
            .collect()
    }
}

/// Defaults and behavior knobs of a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Color of shapes drawn with [`crate::surface::DrawingSurface::default_style`].
    pub default_color: String,
    pub default_width: f64,
    /// How far from a shape the pointer may be and still count as over it.
    pub close_enough: f64,
    /// Tag marking the elements a drag will move.
    pub selection_tag: String,
    pub key_bindings: KeyBindings,
}

impl SurfaceConfig {
    pub const DEFAULT_COLOR: &'static str = "blue";
    pub const DEFAULT_WIDTH: f64 = 1.0;
    pub const DEFAULT_CLOSE_ENOUGH: f64 = 1.0;
    pub const DEFAULT_SELECTION_TAG: &'static str = "selected";

    /// Parse a configuration, filling missing fields with defaults.
    pub fn from_json(json: &str) -> CanvasResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.selection_tag()?;
        Ok(config)
    }

    pub fn to_json(&self) -> CanvasResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The selection tag, validated.
    pub fn selection_tag(&self) -> CanvasResult<Tag> {
        Tag::new(self.selection_tag.clone())
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            default_color: Self::DEFAULT_COLOR.to_string(),
            default_width: Self::DEFAULT_WIDTH,
            close_enough: Self::DEFAULT_CLOSE_ENOUGH,
            selection_tag: Self::DEFAULT_SELECTION_TAG.to_string(),
            key_bindings: KeyBindings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CanvasError;
    use crate::input::Modifiers;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.resolve(&KeyEvent::plain("F1")), Some(Command::ClearAll));
        assert_eq!(
            bindings.resolve(&KeyEvent::plain("Delete")),
            Some(Command::DeleteCurrent)
        );
        assert_eq!(
            bindings.resolve(&KeyEvent::new("a", Modifiers::CTRL)),
            Some(Command::SelectAll)
        );
        // Plain "a" is just typing
        assert_eq!(bindings.resolve(&KeyEvent::plain("a")), None);
    }

    #[test]
    fn test_shortcut_format() {
        assert_eq!(Shortcut::new("A", true, false, Command::SelectAll).format(), "Ctrl+A");
        assert_eq!(Shortcut::new("F1", false, false, Command::ClearAll).format(), "F1");
        assert_eq!(KeyBindings::default().describe().len(), 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SurfaceConfig::from_json(r#"{ "default_color": "red", "close_enough": 3.0 }"#)
            .unwrap();
        assert_eq!(config.default_color, "red");
        assert!((config.close_enough - 3.0).abs() < f64::EPSILON);
        assert_eq!(config.selection_tag, "selected");
        assert_eq!(config.key_bindings, KeyBindings::default());
    }

    #[test]
    fn test_custom_bindings_from_json() {
        let json = r#"{ "key_bindings": [ { "key": "Escape", "command": "ClearAll" } ] }"#;
        let config = SurfaceConfig::from_json(json).unwrap();
        assert_eq!(
            config.key_bindings.resolve(&KeyEvent::plain("escape")),
            Some(Command::ClearAll)
        );
        assert_eq!(config.key_bindings.resolve(&KeyEvent::plain("F1")), None);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            SurfaceConfig::from_json(r#"{ "selection_tag": "7" }"#),
            Err(CanvasError::NumericTag(_))
        ));
        assert!(matches!(
            SurfaceConfig::from_json("not json"),
            Err(CanvasError::Config(_))
        ));
    }

    #[test]
    fn test_json_round_trip_keeps_bindings() {
        let config = SurfaceConfig::default();
        let back = SurfaceConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }
}
