// Mascot pose, motion and state machine

use crate::engine::input::Direction;
use log::debug;

/// Which sprite-sheet cell is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pose {
    /// Facing direction; selects the sprite-sheet row
    pub direction: Direction,
    /// Frame within the walk cycle; selects the sprite-sheet column
    pub column: u32,
}

impl Pose {
    pub fn row(&self) -> u32 {
        self.direction.row()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            direction: Direction::Down,
            column: 0,
        }
    }
}

/// Pose plus whether the mascot is walking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Motion {
    pub pose: Pose,
    pub moving: bool,
}

/// Observable state of the mascot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterState {
    /// Standing still on the idle frame
    #[default]
    Idle,
    MovingUp,
    MovingDown,
    MovingLeft,
    MovingRight,
}

impl CharacterState {
    /// State for a given motion
    pub fn from_motion(motion: &Motion) -> Self {
        if !motion.moving {
            return Self::Idle;
        }
        match motion.pose.direction {
            Direction::Up => Self::MovingUp,
            Direction::Down => Self::MovingDown,
            Direction::Left => Self::MovingLeft,
            Direction::Right => Self::MovingRight,
        }
    }
}

/// Tracks state transitions frame to frame
#[derive(Debug, Default)]
pub struct CharacterStateMachine {
    current_state: CharacterState,
    frames_in_state: u64,
}

impl CharacterStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state
    pub fn state(&self) -> CharacterState {
        self.current_state
    }

    /// Bring the state in line with the motion after a frame
    pub fn sync(&mut self, motion: &Motion) {
        let next = CharacterState::from_motion(motion);
        if next == self.current_state {
            self.frames_in_state += 1;
        } else {
            debug!(
                "Mascot {:?} -> {:?} after {} frames",
                self.current_state, next, self.frames_in_state
            );
            self.current_state = next;
            self.frames_in_state = 0;
        }
    }
}
