//! Logical input queried by the engine
//!
//! Key-code mapping belongs to the embedding program; the engine only asks
//! whether a semantic key is held.

use std::collections::HashSet;

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Fire,
}

/// A semantic key: an action for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub player: usize,
    pub action: Action,
}

impl Key {
    pub const fn new(player: usize, action: Action) -> Self {
        Self { player, action }
    }
}

/// Read-only view of the current key state
pub trait InputState {
    fn is_down(&self, key: Key) -> bool;

    fn any_down(&self, keys: &[Key]) -> bool {
        keys.iter().any(|&key| self.is_down(key))
    }
}

/// Simple held-key set, for drivers and tests
#[derive(Debug, Clone, Default)]
pub struct KeySet {
    held: HashSet<Key>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }
}

impl InputState for KeySet {
    fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keys = KeySet::new();
        let fire = Key::new(1, Action::Fire);
        keys.press(fire);
        keys.press(Key::new(0, Action::Left));
        assert!(keys.is_down(fire));
        assert!(keys.any_down(&[Key::new(0, Action::Fire), fire]));

        keys.release(fire);
        assert!(!keys.is_down(fire));
        assert!(!keys.any_down(&[Key::new(0, Action::Fire), fire]));
        assert!(keys.is_down(Key::new(0, Action::Left)));
    }
}
