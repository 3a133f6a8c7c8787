// Pointer (mouse) steering state

use super::action::Direction;
use glam::Vec2;

/// Zone of a point relative to the mascot.
///
/// Zero offsets count as right (x) and down (y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    RightUp,
    LeftUp,
    LeftDown,
    RightDown,
}

impl Quadrant {
    /// Quadrant of `point` as seen from `origin`, in surface coordinates
    pub fn of(point: Vec2, origin: Vec2) -> Self {
        let offset = point - origin;
        match (offset.x >= 0.0, offset.y < 0.0) {
            (true, true) => Self::RightUp,
            (false, true) => Self::LeftUp,
            (false, false) => Self::LeftDown,
            (true, false) => Self::RightDown,
        }
    }

    /// Walking direction the quadrant steers toward
    pub fn direction(self) -> Direction {
        match self {
            Self::RightUp => Direction::Up,
            Self::LeftUp => Direction::Left,
            Self::LeftDown => Direction::Down,
            Self::RightDown => Direction::Right,
        }
    }
}

/// Pointer steering state.
///
/// A press locks in a direction (`held`); moving the pointer afterwards keeps
/// updating `hover`, which takes over while tracking stays active.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PointerState {
    active: bool,
    held: Option<Quadrant>,
    hover: Option<Quadrant>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a button press in `quadrant`.
    ///
    /// Pressing the quadrant that is already held releases the lock and turns
    /// tracking off. Returns whether tracking is active afterwards.
    pub fn press(&mut self, quadrant: Quadrant) -> bool {
        if self.held == Some(quadrant) {
            self.active = false;
            self.held = None;
            self.hover = None;
        } else {
            self.active = true;
            self.held = Some(quadrant);
            self.hover = Some(quadrant);
        }
        self.active
    }

    /// Register a button release. The held direction is kept.
    pub fn release(&mut self) {
        self.active = false;
    }

    /// Register pointer motion, button held or not
    pub fn hover(&mut self, quadrant: Quadrant) {
        self.hover = Some(quadrant);
    }

    /// Whether pointer steering currently overrides the keyboard
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn held(&self) -> Option<Quadrant> {
        self.held
    }

    pub fn hovered(&self) -> Option<Quadrant> {
        self.hover
    }

    /// Quadrant steering the mascot this frame, if tracking is active.
    /// Hover wins over the direction locked in at press time.
    pub fn steering(&self) -> Option<Quadrant> {
        if !self.is_active() {
            return None;
        }
        self.hovered().or(self.held())
    }

    /// Drop all pointer state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
