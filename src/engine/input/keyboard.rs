// Held-key tracking

use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// The set of keys currently held down.
///
/// Every key is tracked, movement or not; bindings decide which ones matter.
#[derive(Debug, Default, Clone)]
pub struct KeyState {
    held: HashSet<KeyCode>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key press. Repeats are harmless.
    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    /// Register a key release
    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Check if a key is currently held
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Check if any of the given keys is held
    pub fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.is_held(*key))
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Forget every held key
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyState::new();
        keys.press(KeyCode::KeyW);
        assert!(keys.is_held(KeyCode::KeyW));

        keys.release(KeyCode::KeyW);
        assert!(!keys.is_held(KeyCode::KeyW));
        assert!(keys.is_empty());
    }

    #[test]
    fn test_repeat_press_is_idempotent() {
        let mut keys = KeyState::new();
        keys.press(KeyCode::ArrowUp);
        keys.press(KeyCode::ArrowUp);
        assert_eq!(keys.len(), 1);

        keys.release(KeyCode::ArrowUp);
        assert!(!keys.is_held(KeyCode::ArrowUp));
    }

    #[test]
    fn test_release_unheld_key() {
        let mut keys = KeyState::new();
        keys.release(KeyCode::KeyQ);
        assert!(keys.is_empty());
    }

    #[test]
    fn test_any_held() {
        let mut keys = KeyState::new();
        keys.press(KeyCode::ArrowLeft);
        assert!(keys.any_held(&[KeyCode::KeyA, KeyCode::ArrowLeft]));
        assert!(!keys.any_held(&[KeyCode::KeyD, KeyCode::ArrowRight]));
    }

    #[test]
    fn test_clear() {
        let mut keys = KeyState::new();
        keys.press(KeyCode::KeyW);
        keys.press(KeyCode::Space);
        keys.clear();
        assert!(keys.is_empty());
    }

    const KEYS: [KeyCode; 10] = [
        KeyCode::KeyW,
        KeyCode::KeyA,
        KeyCode::KeyS,
        KeyCode::KeyD,
        KeyCode::ArrowUp,
        KeyCode::ArrowLeft,
        KeyCode::ArrowDown,
        KeyCode::ArrowRight,
        KeyCode::Space,
        KeyCode::KeyQ,
    ];

    proptest! {
        #[test]
        fn prop_key_state_matches_held_keys(
            events in prop::collection::vec((0usize..KEYS.len(), any::<bool>()), 0..64)
        ) {
            let mut keys = KeyState::new();
            let mut expected = HashSet::new();

            for (index, pressed) in events {
                let key = KEYS[index];
                if pressed {
                    keys.press(key);
                    expected.insert(key);
                } else {
                    keys.release(key);
                    expected.remove(&key);
                }
            }

            prop_assert_eq!(&keys.held, &expected);
        }
    }
}
