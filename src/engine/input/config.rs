// Movement key bindings and remapping

use super::action::{default_movement_bindings, Direction, KEY_PRIORITY};
use super::keyboard::KeyState;
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps keys to walking directions
#[derive(Debug, Clone)]
pub struct MovementBindings {
    /// Mapping from keys to directions
    bindings: HashMap<KeyCode, Direction>,

    /// Reverse mapping for quick lookups (direction -> all keys)
    direction_to_keys: HashMap<Direction, Vec<KeyCode>>,
}

impl MovementBindings {
    /// Create an empty binding table
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            direction_to_keys: HashMap::new(),
        }
    }

    /// Create a binding table from a list of bindings
    pub fn from_bindings(bindings: Vec<(KeyCode, Direction)>) -> Self {
        let mut config = Self::new();
        for (key, direction) in bindings {
            config.bind(key, direction);
        }
        config
    }

    /// Bind a key to a direction
    pub fn bind(&mut self, key: KeyCode, direction: Direction) {
        // A key drives at most one direction
        self.unbind(key);

        self.bindings.insert(key, direction);
        self.direction_to_keys
            .entry(direction)
            .or_insert_with(Vec::new)
            .push(key);
    }

    fn unbind(&mut self, key: KeyCode) {
        if let Some(direction) = self.bindings.remove(&key) {
            if let Some(keys) = self.direction_to_keys.get_mut(&direction) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.direction_to_keys.remove(&direction);
                }
            }
        }
    }

    /// Get the direction bound to a key
    pub fn direction_for(&self, key: KeyCode) -> Option<Direction> {
        self.bindings.get(&key).copied()
    }

    /// Get all keys bound to a direction
    pub fn keys_for(&self, direction: Direction) -> &[KeyCode] {
        self.direction_to_keys
            .get(&direction)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check if a key drives movement
    pub fn is_movement_key(&self, key: KeyCode) -> bool {
        self.bindings.contains_key(&key)
    }

    /// Pick the direction the held keys ask for.
    ///
    /// When several directions are held the first one in priority order wins
    /// (up, down, left, right), so multi-key presses resolve deterministically.
    pub fn resolve(&self, keys: &KeyState) -> Option<Direction> {
        KEY_PRIORITY
            .into_iter()
            .find(|direction| keys.any_held(self.keys_for(*direction)))
    }
}

impl Default for MovementBindings {
    fn default() -> Self {
        Self::from_bindings(default_movement_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = MovementBindings::default();
        assert_eq!(bindings.direction_for(KeyCode::KeyW), Some(Direction::Up));
        assert_eq!(bindings.direction_for(KeyCode::ArrowDown), Some(Direction::Down));
        assert_eq!(bindings.direction_for(KeyCode::KeyA), Some(Direction::Left));
        assert_eq!(bindings.direction_for(KeyCode::ArrowRight), Some(Direction::Right));
        assert_eq!(bindings.direction_for(KeyCode::Space), None);
    }

    #[test]
    fn test_keys_for_direction() {
        let bindings = MovementBindings::default();
        let keys = bindings.keys_for(Direction::Left);
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&KeyCode::KeyA));
        assert!(keys.contains(&KeyCode::ArrowLeft));
    }

    #[test]
    fn test_rebind_key() {
        let mut bindings = MovementBindings::default();
        bindings.bind(KeyCode::KeyW, Direction::Down);

        assert_eq!(bindings.direction_for(KeyCode::KeyW), Some(Direction::Down));
        assert_eq!(bindings.keys_for(Direction::Up), &[KeyCode::ArrowUp]);
    }

    #[test]
    fn test_rebinding_last_key_empties_direction() {
        let mut bindings = MovementBindings::default();
        bindings.bind(KeyCode::KeyD, Direction::Up);
        bindings.bind(KeyCode::ArrowRight, Direction::Up);

        assert!(bindings.keys_for(Direction::Right).is_empty());
        assert_eq!(bindings.keys_for(Direction::Up).len(), 3);
    }

    #[test]
    fn test_resolve_single_key() {
        let bindings = MovementBindings::default();
        let mut keys = KeyState::new();
        keys.press(KeyCode::ArrowLeft);
        assert_eq!(bindings.resolve(&keys), Some(Direction::Left));
    }

    #[test]
    fn test_resolve_priority() {
        let bindings = MovementBindings::default();
        let mut keys = KeyState::new();

        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::KeyW);
        assert_eq!(bindings.resolve(&keys), Some(Direction::Up));

        keys.release(KeyCode::KeyW);
        keys.press(KeyCode::ArrowDown);
        assert_eq!(bindings.resolve(&keys), Some(Direction::Down));

        keys.release(KeyCode::ArrowDown);
        keys.press(KeyCode::KeyD);
        assert_eq!(bindings.resolve(&keys), Some(Direction::Left));
    }

    #[test]
    fn test_resolve_ignores_unbound_keys() {
        let bindings = MovementBindings::default();
        let mut keys = KeyState::new();
        keys.press(KeyCode::Space);
        assert_eq!(bindings.resolve(&keys), None);
    }
}
