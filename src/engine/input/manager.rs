// Input tracker - turns window events into movement intents

use super::action::Intent;
use super::config::MovementBindings;
use super::keyboard::KeyState;
use super::pointer::{PointerState, Quadrant};
use glam::Vec2;
use log::{debug, info};
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Owns keyboard and pointer state for one mascot.
///
/// The tracker is created detached; it only reacts to events between
/// `attach` and `detach`. Handlers return the `Intent` the event implies,
/// which the caller applies immediately.
#[derive(Debug)]
pub struct InputTracker {
    bindings: MovementBindings,
    keys: KeyState,
    pointer: PointerState,
    attached: bool,

    /// Last cursor position in surface coordinates
    cursor: Vec2,

    /// Physical window pixels -> surface units
    surface_scale: Vec2,
}

impl InputTracker {
    /// Create a detached tracker with the given bindings
    pub fn new(bindings: MovementBindings) -> Self {
        Self {
            bindings,
            keys: KeyState::new(),
            pointer: PointerState::new(),
            attached: false,
            cursor: Vec2::ZERO,
            surface_scale: Vec2::ONE,
        }
    }

    /// Start listening for input
    pub fn attach(&mut self) {
        if !self.attached {
            self.attached = true;
            info!("Input tracker attached");
        }
    }

    /// Stop listening and drop all held input
    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            if !self.keys.is_empty() {
                debug!("Dropping {} held keys", self.keys.len());
                self.keys.clear();
            }
            self.pointer.reset();
            info!("Input tracker detached");
        }
    }

    /// Set the factor converting physical window pixels to surface units
    pub fn set_surface_scale(&mut self, scale: Vec2) {
        self.surface_scale = scale;
    }

    /// Key pressed anywhere in the window
    pub fn on_key_down(&mut self, key: KeyCode) -> Option<Intent> {
        if !self.attached {
            return None;
        }

        self.keys.press(key);
        self.bindings.direction_for(key).map(Intent::Move)
    }

    /// Key released anywhere in the window
    pub fn on_key_up(&mut self, key: KeyCode) -> Option<Intent> {
        if !self.attached {
            return None;
        }

        self.keys.release(key);
        self.bindings.is_movement_key(key).then_some(Intent::Halt)
    }

    /// Primary button pressed at `point`; `position` is where the mascot stands
    pub fn on_pointer_down(&mut self, point: Vec2, position: Vec2) -> Option<Intent> {
        if !self.attached {
            return None;
        }

        let quadrant = Quadrant::of(point, position);
        if self.pointer.press(quadrant) {
            debug!("Pointer locked toward {:?}", quadrant);
            Some(Intent::Move(quadrant.direction()))
        } else {
            debug!("Pointer lock released");
            None
        }
    }

    /// Primary button released
    pub fn on_pointer_up(&mut self) {
        if self.attached && self.pointer.is_active() {
            debug!("Pointer tracking off");
            self.pointer.release();
        }
    }

    /// Pointer moved to `point`; `position` is where the mascot stands
    pub fn on_pointer_move(&mut self, point: Vec2, position: Vec2) {
        if self.attached {
            self.pointer.hover(Quadrant::of(point, position));
        }
    }

    /// Dispatch a winit window event to the matching handler
    pub fn process_window_event(&mut self, event: &WindowEvent, position: Vec2) -> Option<Intent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => self.process_keyboard_event(event),
            WindowEvent::CursorMoved { position: cursor, .. } => {
                self.cursor = Vec2::new(cursor.x as f32, cursor.y as f32) * self.surface_scale;
                self.on_pointer_move(self.cursor, position);
                None
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.on_pointer_down(self.cursor, position),
                ElementState::Released => {
                    self.on_pointer_up();
                    None
                }
            },
            _ => None,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) -> Option<Intent> {
        // Only physical keys carry a stable identity
        let PhysicalKey::Code(key) = event.physical_key else {
            return None;
        };

        match event.state {
            ElementState::Pressed => self.on_key_down(key),
            ElementState::Released => self.on_key_up(key),
        }
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn bindings(&self) -> &MovementBindings {
        &self.bindings
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new(MovementBindings::default())
    }
}
