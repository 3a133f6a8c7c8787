// Mascot character
//
// This module contains everything related to the walking mascot:
// - Pose, motion and the observable state machine
// - Sprite-sheet layout and walk-cycle timing
// - Pose resolution from keyboard and pointer input
// - Boundary clamping against the drawing surface
// - The `CharAnimation` component tying it together

pub mod animation;
pub mod bounds;
pub mod character;
pub mod resolver;
pub mod state;

// Re-export commonly used types
pub use animation::SpriteSheetConfig;
pub use bounds::SpriteMargins;
pub use character::{CharAnimation, CharAnimationSettings};
