// Window-level glue: owns the mascot, the canvas and the presenter

use crate::config::AnimationConfig;
use crate::engine::assets::{AssetLoader, LoadState, PendingSprite};
use crate::engine::game_loop::FrameScheduler;
use crate::engine::renderer::{Canvas, Renderer};
use crate::game::characters::CharAnimation;
use anyhow::{Context, Result};
use glam::Vec2;
use log::{error, info, warn};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopWindowTarget};
use winit::window::Window;

/// How often to check on the sprite loader while it runs
const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    window: Arc<Window>,
    renderer: Renderer,
    canvas: Canvas,
    mascot: CharAnimation,
    scheduler: FrameScheduler,
    pending_sprite: Option<PendingSprite>,
}

impl App {
    pub fn new(window: Arc<Window>, config: &AnimationConfig) -> Result<Self> {
        let settings = config
            .animation_settings()
            .context("Invalid animation settings")?;

        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            config.surface.width,
            config.surface.height,
        ))?;

        let loader = AssetLoader::new(&config.sprite.asset_root);
        let pending_sprite = loader
            .spawn_sprite_sheet(&config.sprite.file)
            .context("Failed to start sprite loader")?;

        let mut mascot = CharAnimation::new(settings, config.movement_bindings());
        mascot.mount();

        let mut app = Self {
            canvas: Canvas::new(config.surface.width, config.surface.height),
            window,
            renderer,
            mascot,
            scheduler: FrameScheduler::new(),
            pending_sprite: Some(pending_sprite),
        };
        let size = app.renderer.size();
        app.update_surface_scale(size);

        Ok(app)
    }

    /// Handle one event from the winit loop
    pub fn handle_event(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        match event {
            Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                self.handle_window_event(event, elwt)
            }
            Event::AboutToWait => self.about_to_wait(elwt),
            _ => {}
        }
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down...");
                self.shutdown();
                elwt.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.renderer.resize(physical_size);
                self.update_surface_scale(physical_size);
            }
            WindowEvent::RedrawRequested => self.redraw(elwt),
            other => self.mascot.handle_window_event(&other),
        }
    }

    /// One refresh callback: one animation cycle, then ask for the next
    fn redraw(&mut self, elwt: &EventLoopWindowTarget<()>) {
        if !self.scheduler.begin_frame() {
            return;
        }

        if self.mascot.tick(&mut self.canvas) {
            if let Err(err) = self.renderer.render(&self.canvas) {
                match err.downcast_ref::<wgpu::SurfaceError>() {
                    Some(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        self.renderer.reconfigure()
                    }
                    Some(wgpu::SurfaceError::OutOfMemory) => {
                        error!("Out of GPU memory, shutting down");
                        self.shutdown();
                        elwt.exit();
                        return;
                    }
                    _ => warn!("Frame skipped: {}", err),
                }
            }
        }

        if self.scheduler.should_request_next() {
            self.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let Some(pending) = self.pending_sprite.as_mut() else {
            return;
        };

        match pending.poll() {
            LoadState::Pending => {
                elwt.set_control_flow(ControlFlow::WaitUntil(Instant::now() + LOAD_POLL_INTERVAL));
            }
            LoadState::Loaded(sheet) => {
                self.pending_sprite = None;
                self.mascot.set_sprite(sheet);
                self.scheduler.start();
                elwt.set_control_flow(ControlFlow::Wait);
                self.window.request_redraw();
            }
            LoadState::Failed(err) => {
                // Nothing to draw; the window stays open and inert
                warn!("Sprite sheet unavailable, mascot stays hidden: {}", err);
                self.pending_sprite = None;
                elwt.set_control_flow(ControlFlow::Wait);
            }
        }
    }

    fn update_surface_scale(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        let scale = Vec2::new(
            self.canvas.width() as f32 / size.width as f32,
            self.canvas.height() as f32 / size.height as f32,
        );
        self.mascot.input_mut().set_surface_scale(scale);
    }

    fn shutdown(&mut self) {
        self.scheduler.stop();
        self.mascot.unmount();
        info!(
            "Ran {} frames in {:.1?} ({:.1} fps), mascot {:?} at ({}, {})",
            self.scheduler.frame_count(),
            self.scheduler.elapsed(),
            self.scheduler.fps(),
            self.mascot.state(),
            self.mascot.position().x,
            self.mascot.position().y
        );
    }
}
