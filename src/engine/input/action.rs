// Movement directions, intents and default key bindings

use winit::keyboard::KeyCode;

/// Direction the mascot faces and walks in.
///
/// The discriminant doubles as the sprite-sheet row holding that direction's
/// walk cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down = 0,
    Up = 1,
    Right = 2,
    Left = 3,
}

impl Direction {
    /// All directions, in sprite-sheet row order
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// Sprite-sheet row for this direction
    pub fn row(self) -> u32 {
        self as u32
    }
}

/// A request from the input tracker to the pose resolver.
///
/// Input handlers never write the pose themselves; they hand one of these to
/// the resolver, which is the only code allowed to change pose and motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Face the direction and start walking
    Move(Direction),
    /// Stop walking; the renderer drops back to the idle frame on its next draw
    Stop,
    /// Stop walking and snap to the idle frame right away
    Halt,
}

/// Default movement bindings (WASD and arrow keys).
///
/// The order of directions here is the keyboard priority used when several
/// movement keys are held: up, down, left, right.
pub fn default_movement_bindings() -> Vec<(KeyCode, Direction)> {
    vec![
        (KeyCode::KeyW, Direction::Up),
        (KeyCode::ArrowUp, Direction::Up),
        (KeyCode::KeyS, Direction::Down),
        (KeyCode::ArrowDown, Direction::Down),
        (KeyCode::KeyA, Direction::Left),
        (KeyCode::ArrowLeft, Direction::Left),
        (KeyCode::KeyD, Direction::Right),
        (KeyCode::ArrowRight, Direction::Right),
    ]
}

/// Keyboard priority when more than one direction is held
pub const KEY_PRIORITY: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_rows() {
        assert_eq!(Direction::Down.row(), 0);
        assert_eq!(Direction::Up.row(), 1);
        assert_eq!(Direction::Right.row(), 2);
        assert_eq!(Direction::Left.row(), 3);
    }

    #[test]
    fn test_default_bindings_cover_eight_keys() {
        let bindings = default_movement_bindings();
        assert_eq!(bindings.len(), 8);

        for direction in Direction::ALL {
            let keys = bindings.iter().filter(|(_, d)| *d == direction).count();
            assert_eq!(keys, 2, "{:?} should have a letter key and an arrow key", direction);
        }
    }

    #[test]
    fn test_no_duplicate_keys_in_defaults() {
        let bindings = default_movement_bindings();
        let mut seen = std::collections::HashSet::new();
        for (key, _) in bindings {
            assert!(seen.insert(key), "Duplicate key found in default bindings");
        }
    }

    #[test]
    fn test_key_priority_covers_all_directions() {
        for direction in Direction::ALL {
            assert!(KEY_PRIORITY.contains(&direction));
        }
        assert_eq!(KEY_PRIORITY[0], Direction::Up);
    }
}
