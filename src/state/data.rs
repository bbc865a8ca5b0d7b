/// Shared data structures for the gallery
///
/// The photo list is fixed at compile time. A photo has no identity
/// beyond its position in `PHOTOS`.

/// Number of photos in the gallery
pub const PHOTO_COUNT: usize = 12;

/// Size category of a tile in the masonry grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSize {
    Small,
    Medium,
    Large,
}

impl TileSize {
    /// Resting (width, height) of a tile in logical pixels
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            TileSize::Small => (220.0, 180.0),
            TileSize::Medium => (280.0, 240.0),
            TileSize::Large => (360.0, 320.0),
        }
    }
}

/// A single photo in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    /// Source path relative to the asset root (e.g., "/images/1.jpg")
    pub src: &'static str,
    /// Alternative text
    pub alt: &'static str,
    /// Caption shown on hover
    pub caption: &'static str,
    /// Tile size in the grid
    pub size: TileSize,
}

const fn photo(src: &'static str, alt: &'static str, caption: &'static str, size: TileSize) -> Photo {
    Photo { src, alt, caption, size }
}

/// The gallery's photos, in display order
pub static PHOTOS: [Photo; PHOTO_COUNT] = [
    photo("/images/1.jpg", "Memory 1", "Beautiful moments together", TileSize::Large),
    photo("/images/2.jpg", "Memory 2", "Precious times", TileSize::Medium),
    photo("/images/3.jpg", "Memory 3", "Unforgettable day", TileSize::Medium),
    photo("/images/4.jpg", "Memory 4", "Sweet memories", TileSize::Small),
    photo("/images/5.jpg", "Memory 5", "Cherished moments", TileSize::Large),
    photo("/images/6.jpg", "Memory 6", "Happy times", TileSize::Medium),
    photo("/images/7.png", "Memory 7", "Special memories", TileSize::Small),
    photo("/images/8.png", "Memory 8", "Wonderful moments", TileSize::Medium),
    photo("/images/9.png", "Memory 9", "Joyful times", TileSize::Large),
    photo("/images/10.jpg", "Memory 10", "Sweet surprises", TileSize::Small),
    photo("/images/11.jpg", "Memory 11", "Beautiful memories", TileSize::Medium),
    photo("/images/12.jpg", "Memory 12", "Forever moments", TileSize::Medium),
];

/// Index of the photo after `index`, wrapping to the first
pub fn next_index(index: usize) -> usize {
    (index + 1) % PHOTO_COUNT
}

/// Index of the photo before `index`, wrapping to the last
pub fn prev_index(index: usize) -> usize {
    (index + PHOTO_COUNT - 1) % PHOTO_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_are_unique() {
        for (i, a) in PHOTOS.iter().enumerate() {
            for b in &PHOTOS[i + 1..] {
                assert_ne!(a.src, b.src);
            }
        }
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(next_index(PHOTO_COUNT - 1), 0);
        assert_eq!(prev_index(0), PHOTO_COUNT - 1);
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        for i in 0..PHOTO_COUNT {
            assert_eq!(prev_index(next_index(i)), i);
            assert_eq!(next_index(prev_index(i)), i);
        }
    }
}
