// Pose resolution - the single writer of pose and motion

use super::state::Motion;
use crate::engine::input::{InputTracker, Intent};

/// Turns input state into the intent for this frame and applies intents.
///
/// Both the per-frame resolve and the immediate intents from input handlers
/// go through `apply`, so there is exactly one path that mutates motion.
#[derive(Debug, Default, Clone, Copy)]
pub struct PoseResolver;

impl PoseResolver {
    pub fn new() -> Self {
        Self
    }

    /// Decide this frame's intent.
    ///
    /// Active pointer steering wins and the keyboard is ignored; otherwise the
    /// held movement keys decide in priority order, and nothing held means stop.
    pub fn resolve(&self, input: &InputTracker) -> Intent {
        if let Some(quadrant) = input.pointer().steering() {
            return Intent::Move(quadrant.direction());
        }

        match input.bindings().resolve(input.keys()) {
            Some(direction) => Intent::Move(direction),
            None => Intent::Stop,
        }
    }

    /// Apply an intent to the motion
    pub fn apply(&self, intent: Intent, motion: &mut Motion) {
        match intent {
            Intent::Move(direction) => {
                motion.pose.direction = direction;
                motion.moving = true;
            }
            Intent::Stop => motion.moving = false,
            Intent::Halt => {
                motion.moving = false;
                motion.pose.column = 0;
            }
        }
    }

    /// Resolve and apply in one go
    pub fn update(&self, input: &InputTracker, motion: &mut Motion) {
        self.apply(self.resolve(input), motion);
    }
}
