//! Keyboard actions for the demo window
//!
//! Actions pair an id with a shortcut and an enable condition. Keys are
//! sampled once per frame into a [`KeyInput`] so trigger checks don't touch
//! the window directly.
//!
//! # Example
//! ```ignore
//! let mut registry = ActionRegistry::new();
//! registry.register(Action::new("demo.save")
//!     .label("Save")
//!     .shortcut(Shortcut::ctrl(KeyCode::S))
//!     .enabled_when(|ctx| ctx.example_enabled));
//!
//! let keys = KeyInput::sample();
//! for id in registry.process_triggers(&ctx, &keys) { /* ... */ }
//! ```

use macroquad::prelude::{is_key_down, is_key_pressed, KeyCode};
use std::collections::HashMap;

pub const ACTION_SAVE: &str = "demo.save";
pub const ACTION_RESET: &str = "demo.reset";
pub const ACTION_TOGGLE_EXAMPLE: &str = "demo.toggle_example";

/// A keyboard shortcut (key + modifiers)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub key: KeyCode,
    pub ctrl: bool, // Cmd on Mac
    pub shift: bool,
}

impl Shortcut {
    /// Create a shortcut with just a key (no modifiers)
    pub fn key(key: KeyCode) -> Self {
        Self { key, ctrl: false, shift: false }
    }

    /// Create a shortcut with Ctrl/Cmd + key
    pub fn ctrl(key: KeyCode) -> Self {
        Self { key, ctrl: true, shift: false }
    }

    pub fn matches(&self, keys: &KeyInput) -> bool {
        keys.pressed.contains(&self.key) && self.ctrl == keys.ctrl && self.shift == keys.shift
    }

    /// Format shortcut for display (e.g., "Ctrl+S")
    pub fn display(&self) -> String {
        let mut out = String::new();
        if self.ctrl {
            out.push_str(if cfg!(target_os = "macos") { "⌘" } else { "Ctrl+" });
        }
        if self.shift {
            out.push_str(if cfg!(target_os = "macos") { "⇧" } else { "Shift+" });
        }
        out.push_str(key_name(self.key));
        out
    }
}

fn key_name(key: KeyCode) -> &'static str {
    match key {
        KeyCode::S => "S",
        KeyCode::R => "R",
        KeyCode::F1 => "F1",
        KeyCode::Escape => "Esc",
        _ => "?",
    }
}

/// Keys that went down this frame plus held modifiers
#[derive(Debug, Clone, Default)]
pub struct KeyInput {
    pub pressed: Vec<KeyCode>,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyInput {
    /// Keys the demo listens for
    const WATCHED: [KeyCode; 3] = [KeyCode::S, KeyCode::R, KeyCode::F1];

    /// Read the current frame's keyboard state from the window
    pub fn sample() -> Self {
        Self {
            pressed: Self::WATCHED.into_iter().filter(|k| is_key_pressed(*k)).collect(),
            ctrl: is_key_down(KeyCode::LeftControl)
                || is_key_down(KeyCode::RightControl)
                || is_key_down(KeyCode::LeftSuper)
                || is_key_down(KeyCode::RightSuper),
            shift: is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
        }
    }
}

/// Context for checking action enable conditions
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    /// Example options are registered with the form
    pub example_enabled: bool,
}

type EnableFn = fn(&ActionContext) -> bool;

fn always_enabled(_: &ActionContext) -> bool {
    true
}

/// A registered action
#[derive(Clone)]
pub struct Action {
    pub id: &'static str,
    pub label: &'static str,
    pub shortcut: Option<Shortcut>,
    enabled_fn: EnableFn,
}

impl Action {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            label: "",
            shortcut: None,
            enabled_fn: always_enabled,
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn shortcut(mut self, shortcut: Shortcut) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn enabled_when(mut self, f: EnableFn) -> Self {
        self.enabled_fn = f;
        self
    }

    pub fn is_enabled(&self, ctx: &ActionContext) -> bool {
        (self.enabled_fn)(ctx)
    }

    /// Check if this action's shortcut is pressed and action is enabled
    pub fn is_triggered(&self, ctx: &ActionContext, keys: &KeyInput) -> bool {
        self.is_enabled(ctx) && self.shortcut.as_ref().is_some_and(|s| s.matches(keys))
    }

    /// Label with shortcut hint
    pub fn hint(&self) -> String {
        match &self.shortcut {
            Some(shortcut) => format!("{}: {}", shortcut.display(), self.label),
            None => self.label.to_string(),
        }
    }
}

/// Registry of every action the window responds to
pub struct ActionRegistry {
    actions: HashMap<&'static str, Action>,
    /// Registration order, for stable hint listings
    order: Vec<&'static str>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register an action, replacing any with the same id
    pub fn register(&mut self, action: Action) {
        if self.actions.insert(action.id, action.clone()).is_none() {
            self.order.push(action.id);
        }
    }

    pub fn triggered(&self, id: &str, ctx: &ActionContext, keys: &KeyInput) -> bool {
        self.actions.get(id).is_some_and(|a| a.is_triggered(ctx, keys))
    }

    /// Ids of every action triggered this frame, in registration order
    pub fn process_triggers(&self, ctx: &ActionContext, keys: &KeyInput) -> Vec<&'static str> {
        self.order
            .iter()
            .filter(|id| self.triggered(id, ctx, keys))
            .copied()
            .collect()
    }

    /// Hints for enabled actions, in registration order
    pub fn hints(&self, ctx: &ActionContext) -> Vec<String> {
        self.order
            .iter()
            .filter_map(|id| self.actions.get(id))
            .filter(|a| a.is_enabled(ctx))
            .map(Action::hint)
            .collect()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Actions of the demo window
pub fn demo_actions() -> Vec<Action> {
    vec![
        Action::new(ACTION_TOGGLE_EXAMPLE)
            .label("Toggle example options")
            .shortcut(Shortcut::key(KeyCode::F1)),
        Action::new(ACTION_SAVE)
            .label("Save")
            .shortcut(Shortcut::ctrl(KeyCode::S))
            .enabled_when(|ctx| ctx.example_enabled),
        Action::new(ACTION_RESET)
            .label("Reset")
            .shortcut(Shortcut::ctrl(KeyCode::R))
            .enabled_when(|ctx| ctx.example_enabled),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ActionRegistry {
        let mut registry = ActionRegistry::new();
        for action in demo_actions() {
            registry.register(action);
        }
        registry
    }

    fn keys(pressed: &[KeyCode], ctrl: bool) -> KeyInput {
        KeyInput {
            pressed: pressed.to_vec(),
            ctrl,
            shift: false,
        }
    }

    #[test]
    fn test_modifiers_must_match() {
        let save = Shortcut::ctrl(KeyCode::S);
        assert!(save.matches(&keys(&[KeyCode::S], true)));
        assert!(!save.matches(&keys(&[KeyCode::S], false)));
        assert!(!Shortcut::key(KeyCode::F1).matches(&keys(&[KeyCode::F1], true)));
    }

    #[test]
    fn test_save_needs_example_enabled() {
        let registry = registry();
        let pressed = keys(&[KeyCode::S], true);
        let off = ActionContext { example_enabled: false };
        let on = ActionContext { example_enabled: true };
        assert!(registry.process_triggers(&off, &pressed).is_empty());
        assert_eq!(registry.process_triggers(&on, &pressed), vec![ACTION_SAVE]);
    }

    #[test]
    fn test_toggle_always_available() {
        let registry = registry();
        let ctx = ActionContext::default();
        assert!(registry.triggered(ACTION_TOGGLE_EXAMPLE, &ctx, &keys(&[KeyCode::F1], false)));
        assert_eq!(registry.hints(&ctx), vec!["F1: Toggle example options".to_string()]);
    }

    #[test]
    fn test_reregister_keeps_order() {
        let mut registry = registry();
        registry.register(Action::new(ACTION_TOGGLE_EXAMPLE).label("Again"));
        let ctx = ActionContext { example_enabled: true };
        assert_eq!(registry.hints(&ctx)[0], "Again");
        assert_eq!(registry.hints(&ctx).len(), 3);
    }
}
