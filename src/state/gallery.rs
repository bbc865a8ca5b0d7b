use std::time::{Duration, Instant};

use crate::anim::easing::DEFAULT_OVERSHOOT;
use crate::anim::{Animated, Ease, Props, TweenSpec};

use super::data::{Photo, PHOTOS, PHOTO_COUNT};
use super::lightbox::{Direction, Lightbox};
use super::scroll::PageScroll;

const REVEAL_DURATION: Duration = Duration::from_millis(600);
const REVEAL_STAGGER: Duration = Duration::from_millis(120);
const REVEAL_DELAY: Duration = Duration::from_millis(200);
/// How far below its resting place a tile starts the reveal
const REVEAL_RISE: f32 = 50.0;

/// Tile properties before the reveal animation
const HIDDEN_TILE: Props = Props {
    opacity: 0.0,
    x: 0.0,
    y: REVEAL_RISE,
    scale: 0.8,
};

/// Keys the lightbox responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Gallery widget state: tiles, the reveal latch and the lightbox
#[derive(Debug)]
pub struct Gallery {
    /// One animation handle per photo, indexed by photo position
    tiles: [Animated; PHOTO_COUNT],
    /// Set once the reveal animation has been started
    revealed: bool,
    hovered: Option<usize>,
    lightbox: Lightbox,
    scroll: PageScroll,
}

impl Gallery {
    /// Create a gallery whose lightbox locks `scroll` while open
    pub fn new(scroll: PageScroll) -> Self {
        Self {
            tiles: [Animated::new(HIDDEN_TILE); PHOTO_COUNT],
            revealed: false,
            hovered: None,
            lightbox: Lightbox::default(),
            scroll,
        }
    }

    pub fn photos(&self) -> &'static [Photo; PHOTO_COUNT] {
        &PHOTOS
    }

    /// Update the activation flag.
    ///
    /// The first time the gallery becomes active the staggered reveal starts.
    /// Returns `true` on that call only.
    pub fn set_active(&mut self, active: bool, now: Instant) -> bool {
        if !active || self.revealed {
            return false;
        }

        self.revealed = true;
        let reveal = TweenSpec::new(HIDDEN_TILE, Props::REST, REVEAL_DURATION)
            .delay(REVEAL_DELAY)
            .ease(Ease::BackOut(DEFAULT_OVERSHOOT));

        for (tile, tween) in self
            .tiles
            .iter_mut()
            .zip(reveal.stagger(PHOTO_COUNT, REVEAL_STAGGER, now))
        {
            tile.play(tween);
        }

        tracing::info!(tiles = PHOTO_COUNT, "revealing gallery");
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Open the lightbox on photo `index`
    pub fn open(&mut self, index: usize, now: Instant) {
        self.lightbox.open(index, &self.scroll, now);
    }

    pub fn close(&mut self) -> bool {
        self.lightbox.close()
    }

    pub fn next(&mut self, now: Instant) -> bool {
        self.lightbox.navigate(Direction::Next, now)
    }

    pub fn prev(&mut self, now: Instant) -> bool {
        self.lightbox.navigate(Direction::Previous, now)
    }

    /// Route a key press to the lightbox. Returns `false` if it was ignored.
    pub fn handle_key(&mut self, key: GalleryKey, now: Instant) -> bool {
        if !self.lightbox.is_open() {
            return false;
        }

        match key {
            GalleryKey::Escape => self.close(),
            GalleryKey::ArrowLeft => self.prev(now),
            GalleryKey::ArrowRight => self.next(now),
        }
    }

    pub fn hover(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Clear the hover, unless the pointer has already entered another tile
    pub fn unhover(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Advance every running animation to `now`
    pub fn tick(&mut self, now: Instant) {
        for tile in &mut self.tiles {
            tile.settle(now);
        }
        self.lightbox.tick(now);
    }

    pub fn is_animating(&self) -> bool {
        self.tiles.iter().any(Animated::is_animating) || self.lightbox.is_animating()
    }

    /// Animated properties of tile `index`
    pub fn tile(&self, index: usize, now: Instant) -> Props {
        self.tiles[index % PHOTO_COUNT].value(now)
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn scroll(&self) -> &PageScroll {
        &self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(gallery: &mut Gallery, mut now: Instant) -> Instant {
        while gallery.is_animating() {
            now += Duration::from_millis(16);
            gallery.tick(now);
        }
        now
    }

    #[test]
    fn test_tiles_hidden_until_active() {
        let gallery = Gallery::new(PageScroll::new());
        let now = Instant::now();

        assert!(!gallery.is_revealed());
        for i in 0..PHOTO_COUNT {
            assert_eq!(gallery.tile(i, now).opacity, 0.0);
        }
    }

    #[test]
    fn test_reveal_fires_once() {
        let mut gallery = Gallery::new(PageScroll::new());
        let now = Instant::now();

        assert!(!gallery.set_active(false, now));
        assert!(gallery.set_active(true, now));
        assert!(gallery.is_revealed());

        let now = settle(&mut gallery, now);
        assert!(!gallery.set_active(false, now));
        assert!(!gallery.set_active(true, now));
        assert!(!gallery.is_animating());
    }

    #[test]
    fn test_reveal_is_staggered() {
        let mut gallery = Gallery::new(PageScroll::new());
        let now = Instant::now();
        gallery.set_active(true, now);

        // Tile 0 starts after the initial delay, tile 1 one stagger step later
        let probe = now + REVEAL_DELAY + REVEAL_STAGGER;
        assert!(gallery.tile(0, probe).opacity > 0.0);
        assert_eq!(gallery.tile(1, probe), HIDDEN_TILE);

        let done = settle(&mut gallery, now);
        for i in 0..PHOTO_COUNT {
            assert_eq!(gallery.tile(i, done), Props::REST);
        }
    }

    #[test]
    fn test_keys_ignored_when_closed() {
        let mut gallery = Gallery::new(PageScroll::new());
        let now = Instant::now();

        for key in [GalleryKey::Escape, GalleryKey::ArrowLeft, GalleryKey::ArrowRight] {
            assert!(!gallery.handle_key(key, now));
        }
        assert!(!gallery.lightbox().is_open());
        assert!(!gallery.scroll().is_locked());
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut gallery = Gallery::new(PageScroll::new());
        let now = Instant::now();

        gallery.open(0, now);
        let now = settle(&mut gallery, now);

        assert!(gallery.handle_key(GalleryKey::ArrowLeft, now));
        let now = settle(&mut gallery, now);
        assert_eq!(gallery.lightbox().index(), Some(PHOTO_COUNT - 1));

        assert!(gallery.handle_key(GalleryKey::ArrowRight, now));
        let now = settle(&mut gallery, now);
        assert_eq!(gallery.lightbox().index(), Some(0));

        assert!(gallery.handle_key(GalleryKey::Escape, now));
        assert!(!gallery.lightbox().is_open());
        assert!(!gallery.scroll().is_locked());
    }

    #[test]
    fn test_scroll_locked_iff_open() {
        let scroll = PageScroll::new();
        let mut gallery = Gallery::new(scroll.clone());
        let now = Instant::now();

        gallery.open(5, now);
        assert!(scroll.is_locked());
        gallery.next(now);
        assert!(scroll.is_locked());
        gallery.close();
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_teardown_restores_scroll() {
        let scroll = PageScroll::new();
        let mut gallery = Gallery::new(scroll.clone());

        gallery.open(7, Instant::now());
        assert!(scroll.is_locked());

        drop(gallery);
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_hover_tracking() {
        let mut gallery = Gallery::new(PageScroll::new());

        gallery.hover(2);
        gallery.hover(3);
        gallery.unhover(2);
        assert_eq!(gallery.hovered(), Some(3));

        gallery.unhover(3);
        assert_eq!(gallery.hovered(), None);
    }
}
