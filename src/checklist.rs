//! Caller-owned checklist toggle state.

use crate::block::ChecklistItem;
use rustc_hash::FxBuildHasher as FastHashBuilder;
use std::collections::HashMap;

/// Toggle overrides for checklist items, keyed by each item's stable key.
///
/// The parser bakes the default checked state into every item; this
/// store holds the host's overrides on top of those defaults. Because
/// item keys replay deterministically, the store survives re-parses of
/// the same document without desyncing from content. The parser itself
/// never reads or writes this state.
#[derive(Debug, Default)]
pub struct ChecklistState {
    overrides: HashMap<u32, bool, FastHashBuilder>,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective checked state: the override if present, otherwise the
    /// state parsed from the document.
    pub fn is_checked(&self, item: &ChecklistItem<'_>) -> bool {
        self.overrides
            .get(&item.key)
            .copied()
            .unwrap_or(item.checked)
    }

    /// Flip an item's effective state.
    pub fn toggle(&mut self, item: &ChecklistItem<'_>) {
        let flipped = !self.is_checked(item);
        self.overrides.insert(item.key, flipped);
    }

    /// Set an item's state directly by key.
    pub fn set(&mut self, key: u32, checked: bool) {
        self.overrides.insert(key, checked);
    }

    /// Drop all overrides, reverting every item to its parsed default.
    pub fn clear(&mut self) {
        self.overrides.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(key: u32, checked: bool) -> ChecklistItem<'static> {
        ChecklistItem {
            checked,
            spans: Vec::new(),
            key,
        }
    }

    #[test]
    fn test_default_state_from_item() {
        let state = ChecklistState::new();
        assert!(!state.is_checked(&item(0, false)));
        assert!(state.is_checked(&item(1, true)));
    }

    #[test]
    fn test_toggle_flips_effective_state() {
        let mut state = ChecklistState::new();
        let it = item(7, true);
        state.toggle(&it);
        assert!(!state.is_checked(&it));
        state.toggle(&it);
        assert!(state.is_checked(&it));
    }

    #[test]
    fn test_clear_restores_defaults() {
        let mut state = ChecklistState::new();
        let it = item(3, false);
        state.toggle(&it);
        assert!(state.is_checked(&it));
        state.clear();
        assert!(!state.is_checked(&it));
        assert!(state.is_empty());
    }

    #[test]
    fn test_override_is_keyed_not_positional() {
        let mut state = ChecklistState::new();
        state.set(5, true);
        assert!(state.is_checked(&item(5, false)));
        assert!(!state.is_checked(&item(6, false)));
    }
}
