use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;
use winit::{dpi::LogicalSize, event_loop::EventLoop, window::WindowBuilder};

mod app;
mod config;
mod core;
mod engine;
mod game;

use app::App;
use config::AnimationConfig;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Calendar Mascot...");

    let config = AnimationConfig::load_default().context("Failed to load configuration")?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Calendar Mascot")
            .with_inner_size(LogicalSize::new(config.surface.width, config.surface.height))
            .with_resizable(false)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut app = App::new(window, &config)?;

    event_loop
        .run(move |event, elwt| app.handle_event(event, elwt))
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
