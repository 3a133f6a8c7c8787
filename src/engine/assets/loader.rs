// Asset loading functionality

use super::{AssetError, SpriteSheet};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Directory under the asset root holding textures
const TEXTURE_DIRECTORY: &str = "textures";

/// File extensions the sprite decoder accepts
const TEXTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Asset loader responsible for finding and loading asset files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for a texture
    pub fn resolve_texture_path(&self, name: &str) -> PathBuf {
        self.base_path.join(TEXTURE_DIRECTORY).join(name)
    }

    /// Load texture bytes from disk
    pub fn load_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve_texture_path(name);

        let supported = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| TEXTURE_EXTENSIONS.contains(&ext.as_str()));
        if !supported {
            return Err(AssetError::UnsupportedFormat(name.to_string()));
        }

        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        std::fs::read(&path)
            .map_err(|e| AssetError::LoadError(format!("Failed to read {}: {}", name, e)))
    }

    /// Load and decode a sprite sheet on the calling thread
    pub fn load_sprite_sheet(&self, name: &str) -> Result<SpriteSheet, AssetError> {
        let bytes = self.load_bytes(name)?;
        SpriteSheet::from_bytes(&bytes)
    }

    /// Start loading a sprite sheet on a background thread
    pub fn spawn_sprite_sheet(&self, name: &str) -> Result<PendingSprite, AssetError> {
        let (sender, receiver) = mpsc::channel();
        let loader = self.clone();
        let file = name.to_string();

        thread::Builder::new()
            .name("sprite-loader".to_string())
            .spawn(move || {
                // The receiver may already be gone if the window closed first
                let _ = sender.send(loader.load_sprite_sheet(&file));
            })?;

        Ok(PendingSprite {
            name: name.to_string(),
            receiver: Some(receiver),
        })
    }
}

/// Outcome of polling a pending sprite sheet
#[derive(Debug)]
pub enum LoadState {
    /// Still decoding
    Pending,
    /// Decoded and handed over; later polls report `Pending` forever
    Loaded(SpriteSheet),
    /// Load failed; later polls report `Pending` forever
    Failed(AssetError),
}

/// A sprite sheet being decoded in the background
#[derive(Debug)]
pub struct PendingSprite {
    name: String,
    receiver: Option<Receiver<Result<SpriteSheet, AssetError>>>,
}

impl PendingSprite {
    /// Check whether the sprite sheet has finished loading, without blocking
    pub fn poll(&mut self) -> LoadState {
        let Some(receiver) = &self.receiver else {
            return LoadState::Pending;
        };

        let state = match receiver.try_recv() {
            Err(TryRecvError::Empty) => return LoadState::Pending,
            Ok(Ok(sheet)) => {
                info!(
                    "Sprite sheet {} loaded ({}x{})",
                    self.name,
                    sheet.width(),
                    sheet.height()
                );
                LoadState::Loaded(sheet)
            }
            Ok(Err(err)) => LoadState::Failed(err),
            Err(TryRecvError::Disconnected) => LoadState::Failed(AssetError::LoadError(format!(
                "loader thread for {} exited without a result",
                self.name
            ))),
        };

        self.receiver = None;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageOutputFormat, Rgba, RgbaImage};
    use std::time::{Duration, Instant};

    fn temp_asset_root(tag: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!(
            "calendar-mascot-{}-{}",
            tag,
            std::process::id()
        ));
        std::fs::create_dir_all(root.join(TEXTURE_DIRECTORY)).unwrap();
        root
    }

    fn write_sheet(root: &Path, name: &str) {
        let image = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
        let mut file = std::fs::File::create(root.join(TEXTURE_DIRECTORY).join(name)).unwrap();
        image.write_to(&mut file, ImageOutputFormat::Png).unwrap();
    }

    fn poll_until_done(pending: &mut PendingSprite) -> LoadState {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match pending.poll() {
                LoadState::Pending if Instant::now() < deadline => {
                    thread::sleep(Duration::from_millis(5))
                }
                state => return state,
            }
        }
    }

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/assets");
        let path = loader.resolve_texture_path("mascot.png");

        assert_eq!(path, PathBuf::from("/game/assets/textures/mascot.png"));
    }

    #[test]
    fn test_missing_texture() {
        let loader = AssetLoader::new("/definitely/not/here");
        assert!(matches!(
            loader.load_bytes("mascot.png"),
            Err(AssetError::NotFound(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let loader = AssetLoader::new(".");
        assert!(matches!(
            loader.load_bytes("mascot.gif"),
            Err(AssetError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_sprite_sheet() {
        let root = temp_asset_root("sync");
        write_sheet(&root, "mascot.png");

        let loader = AssetLoader::new(&root);
        let sheet = loader.load_sprite_sheet("mascot.png").unwrap();
        assert_eq!(sheet.width(), 4);

        std::fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_background_load() {
        let root = temp_asset_root("async");
        write_sheet(&root, "mascot.png");

        let loader = AssetLoader::new(&root);
        let mut pending = loader.spawn_sprite_sheet("mascot.png").unwrap();

        assert!(matches!(poll_until_done(&mut pending), LoadState::Loaded(_)));
        assert!(pending.receiver.is_none());
        assert!(matches!(pending.poll(), LoadState::Pending));

        std::fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_background_load_failure() {
        let loader = AssetLoader::new("/definitely/not/here");
        let mut pending = loader.spawn_sprite_sheet("mascot.png").unwrap();

        assert!(matches!(
            poll_until_done(&mut pending),
            LoadState::Failed(AssetError::NotFound(_))
        ));
    }
}
