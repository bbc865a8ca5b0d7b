/// Photo assets on disk
///
/// This module handles:
/// - Resolving photo sources against the asset root
/// - Keeping one image handle per photo for the renderer
/// - Probing the files in the background (probe.rs)

pub mod probe;

use iced::widget::image::Handle;
use std::path::{Path, PathBuf};

use crate::state::data::{Photo, PHOTO_COUNT};

/// Resolve a photo source ("/images/1.jpg") against the asset root
pub fn resolve(root: &Path, src: &str) -> PathBuf {
    root.join(src.trim_start_matches('/'))
}

/// Image handles for every photo, indexed by photo position
///
/// Handles are built once so the renderer's image cache keys stay stable
/// across frames.
#[derive(Debug, Clone)]
pub struct Assets {
    paths: [PathBuf; PHOTO_COUNT],
    handles: [Handle; PHOTO_COUNT],
}

impl Assets {
    pub fn new(root: &Path, photos: &[Photo; PHOTO_COUNT]) -> Self {
        let paths: [PathBuf; PHOTO_COUNT] =
            std::array::from_fn(|i| resolve(root, photos[i].src));
        let handles = std::array::from_fn(|i| Handle::from_path(&paths[i]));

        Self { paths, handles }
    }

    pub fn handle(&self, index: usize) -> &Handle {
        &self.handles[index % PHOTO_COUNT]
    }

    pub fn paths(&self) -> &[PathBuf; PHOTO_COUNT] {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::PHOTOS;

    #[test]
    fn test_resolve_strips_leading_slash() {
        let path = resolve(Path::new("/srv/site"), "/images/7.png");
        assert_eq!(path, PathBuf::from("/srv/site/images/7.png"));
    }

    #[test]
    fn test_paths_follow_photo_order() {
        let assets = Assets::new(Path::new("public"), &PHOTOS);

        assert_eq!(assets.paths()[0], PathBuf::from("public/images/1.jpg"));
        assert_eq!(assets.paths()[11], PathBuf::from("public/images/12.jpg"));
    }
}
