// The animated mascot

use super::animation::{SpriteAnimator, SpriteSheetConfig};
use super::bounds::{BoundaryClamper, MovementBounds, SpriteMargins};
use super::resolver::PoseResolver;
use super::state::{CharacterState, CharacterStateMachine, Motion};
use crate::engine::assets::SpriteSheet;
use crate::engine::input::{InputTracker, Intent, MovementBindings};
use crate::engine::renderer::{DrawSurface, Sprite, SpriteRenderer};
use glam::Vec2;
use image::Rgba;
use log::info;
use winit::event::WindowEvent;

/// Everything needed to build a mascot
#[derive(Debug, Clone)]
pub struct CharAnimationSettings {
    pub surface_size: Vec2,
    pub background: Rgba<u8>,
    pub sheet: SpriteSheetConfig,
    pub start_position: Vec2,
    /// Distance walked per frame
    pub speed: f32,
    /// Display frames per walk-cycle frame
    pub frames_per_column: u32,
    pub margins: SpriteMargins,
    pub horizontal_inset: f32,
}

impl Default for CharAnimationSettings {
    fn default() -> Self {
        Self {
            surface_size: Vec2::new(150.0, 500.0),
            background: Rgba([0x24, 0x9e, 0x8c, 0xff]),
            sheet: SpriteSheetConfig::standard_character(),
            start_position: Vec2::new(30.0, 30.0),
            speed: 10.0,
            frames_per_column: 3,
            margins: SpriteMargins::default(),
            horizontal_inset: 40.0,
        }
    }
}

/// A sprite mascot walking around a fixed-size surface.
///
/// Lifecycle: `mount` starts listening for input, `set_sprite` hands over
/// the decoded sheet, `tick` runs one frame, `unmount` releases input.
/// Without a sprite sheet `tick` draws nothing.
pub struct CharAnimation {
    position: Vec2,
    motion: Motion,
    state_machine: CharacterStateMachine,
    animator: SpriteAnimator,
    resolver: PoseResolver,
    clamper: BoundaryClamper,
    input: InputTracker,
    renderer: SpriteRenderer,
    sheet_config: SpriteSheetConfig,
    sheet: Option<SpriteSheet>,
}

impl CharAnimation {
    pub fn new(settings: CharAnimationSettings, bindings: MovementBindings) -> Self {
        let bounds = MovementBounds::new(
            settings.surface_size,
            settings.sheet.draw_size,
            settings.margins,
            settings.horizontal_inset,
        );

        Self {
            position: settings.start_position,
            motion: Motion::default(),
            state_machine: CharacterStateMachine::new(),
            animator: SpriteAnimator::new(settings.sheet.columns, settings.frames_per_column),
            resolver: PoseResolver::new(),
            clamper: BoundaryClamper::new(bounds, settings.speed),
            input: InputTracker::new(bindings),
            renderer: SpriteRenderer::new(settings.background),
            sheet_config: settings.sheet,
            sheet: None,
        }
    }

    /// Start listening for input
    pub fn mount(&mut self) {
        self.input.attach();
        let bounds = self.clamper.bounds();
        info!(
            "Mascot mounted at ({}, {}), walkable area ({}, {})..({}, {})",
            self.position.x,
            self.position.y,
            bounds.min.x,
            bounds.min.y,
            bounds.max.x,
            bounds.max.y
        );
    }

    /// Release input; the mascot stops reacting to events
    pub fn unmount(&mut self) {
        self.input.detach();
        info!("Mascot unmounted");
    }

    /// Hand over the decoded sprite sheet
    pub fn set_sprite(&mut self, sheet: SpriteSheet) {
        self.sheet = Some(sheet);
    }

    /// Feed a window event; any resulting intent takes effect immediately
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        let intent = self.input.process_window_event(event, self.position);
        self.apply(intent);
    }

    fn apply(&mut self, intent: Option<Intent>) {
        if let Some(intent) = intent {
            self.resolver.apply(intent, &mut self.motion);
        }
    }

    /// Run one frame: resolve input, draw, advance the walk cycle, then move
    /// and clamp. Returns false if there is no sprite sheet to draw yet.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let Some(sheet) = &self.sheet else {
            return false;
        };

        self.resolver.update(&self.input, &mut self.motion);

        let sprite = Sprite::new(
            self.sheet_config.frame_rect(&self.motion.pose),
            self.position,
            self.sheet_config.draw_size,
        );
        self.renderer.render(surface, sheet, &sprite);

        self.animator.advance(&mut self.motion.pose, self.motion.moving);
        self.clamper.step(&mut self.position, self.motion.pose.direction, self.motion.moving);

        self.state_machine.sync(&self.motion);
        true
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn state(&self) -> CharacterState {
        self.state_machine.state()
    }

    pub fn input_mut(&mut self) -> &mut InputTracker {
        &mut self.input
    }
}
