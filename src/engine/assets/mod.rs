// Asset loading
//
// Finds, decodes and hands over the mascot's sprite sheet. Decoding runs off
// the event-loop thread; the result comes back through `PendingSprite`.

mod loader;
mod sheet;

pub use loader::{AssetLoader, LoadState, PendingSprite};
pub use sheet::SpriteSheet;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Unsupported asset format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
