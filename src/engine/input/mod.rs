// Input handling system
//
// Keyboard and pointer input for the mascot, turned into movement intents.
//
// ## Architecture
//
// - `action`: Directions, intents and default key bindings
// - `config`: Movement key bindings and remapping
// - `keyboard`: Held-key state
// - `pointer`: Pointer quadrants and steering lock
// - `manager`: The input tracker coordinating everything
//
// ## Usage Example
//
// ```rust
// use engine::input::InputTracker;
//
// let mut tracker = InputTracker::default();
// tracker.attach();
//
// // In your event loop, forward window events
// if let Some(intent) = tracker.process_window_event(&event, mascot_position) {
//     resolver.apply(intent, &mut motion);
// }
//
// // On teardown
// tracker.detach();
// ```

pub mod action;
pub mod config;
pub mod keyboard;
pub mod manager;
pub mod pointer;

// Re-export commonly used types
pub use action::{default_movement_bindings, Direction, Intent};
pub use config::MovementBindings;
pub use manager::InputTracker;
