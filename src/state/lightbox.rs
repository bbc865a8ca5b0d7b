use std::time::{Duration, Instant};

use crate::anim::easing::DEFAULT_OVERSHOOT;
use crate::anim::{Animated, Ease, Props, TweenSpec};

use super::data::{next_index, prev_index, PHOTO_COUNT};
use super::scroll::{PageScroll, ScrollGuard};

const OPEN_DURATION: Duration = Duration::from_millis(400);
const SLIDE_OUT_DURATION: Duration = Duration::from_millis(200);
const SLIDE_IN_DURATION: Duration = Duration::from_millis(300);
/// Horizontal travel of a slide transition in logical pixels
const SLIDE_DISTANCE: f32 = 100.0;

/// Navigation direction inside the lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    fn step(self, index: usize) -> usize {
        match self {
            Direction::Next => next_index(index),
            Direction::Previous => prev_index(index),
        }
    }

    /// Where the outgoing image slides to
    fn exit_x(self) -> f32 {
        match self {
            Direction::Next => -SLIDE_DISTANCE,
            Direction::Previous => SLIDE_DISTANCE,
        }
    }

    /// Where the incoming image slides in from
    fn enter_x(self) -> f32 {
        -self.exit_x()
    }
}

/// A slide whose outgoing half is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slide {
    direction: Direction,
    target: usize,
}

/// The open lightbox: displayed photo, its animation and the scroll lock it holds
#[derive(Debug)]
pub struct Viewer {
    index: usize,
    image: Animated,
    slide: Option<Slide>,
    _scroll: ScrollGuard,
}

impl Viewer {
    /// Index of the photo currently on screen
    pub fn index(&self) -> usize {
        self.index
    }

    /// Photo the running slide will land on, if a slide is leaving the screen
    pub fn pending_target(&self) -> Option<usize> {
        self.slide.map(|slide| slide.target)
    }

    /// Animated properties of the displayed image
    pub fn image(&self, now: Instant) -> Props {
        self.image.value(now)
    }

    fn play_entrance(&mut self, now: Instant) {
        let from = Props::REST.with_scale(0.8).with_opacity(0.0);
        self.image.play(
            TweenSpec::new(from, Props::REST, OPEN_DURATION)
                .ease(Ease::BackOut(DEFAULT_OVERSHOOT))
                .start(now),
        );
    }
}

/// Lightbox overlay state machine
///
/// `Closed` holds nothing. `Open` owns the `ScrollGuard`, so the page is
/// scroll-locked exactly while the lightbox is open.
#[derive(Debug, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(Viewer),
}

impl Lightbox {
    /// Show photo `index`, locking page scroll if the lightbox was closed
    pub fn open(&mut self, index: usize, scroll: &PageScroll, now: Instant) {
        let index = index % PHOTO_COUNT;

        match self {
            Lightbox::Open(viewer) => {
                viewer.index = index;
                viewer.slide = None;
                viewer.play_entrance(now);
            }
            Lightbox::Closed => {
                let mut viewer = Viewer {
                    index,
                    image: Animated::new(Props::REST),
                    slide: None,
                    _scroll: scroll.acquire(),
                };
                viewer.play_entrance(now);
                *self = Lightbox::Open(viewer);
            }
        }

        tracing::debug!(index, "lightbox opened");
    }

    /// Close the lightbox and release the scroll lock.
    ///
    /// Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }

        *self = Lightbox::Closed;
        tracing::debug!("lightbox closed");
        true
    }

    /// Start (or retarget) a slide to the neighbouring photo.
    ///
    /// Navigating while the outgoing half of a slide is still running moves
    /// the pending target one more step instead of restarting the slide.
    /// Returns `false` when the lightbox is closed.
    pub fn navigate(&mut self, direction: Direction, now: Instant) -> bool {
        let Lightbox::Open(viewer) = self else {
            return false;
        };

        match viewer.slide.as_mut() {
            Some(slide) => {
                slide.target = direction.step(slide.target);
                slide.direction = direction;
            }
            None => {
                viewer.slide = Some(Slide {
                    direction,
                    target: direction.step(viewer.index),
                });
                viewer.image.play_to(
                    Props::REST.with_x(direction.exit_x()).with_opacity(0.0),
                    SLIDE_OUT_DURATION,
                    Ease::Power2In,
                    now,
                );
            }
        }

        tracing::debug!(?direction, target = ?viewer.pending_target(), "lightbox navigating");
        true
    }

    /// Advance the overlay animation; commits a slide once its outgoing half finishes
    pub fn tick(&mut self, now: Instant) {
        let Lightbox::Open(viewer) = self else {
            return;
        };

        if !viewer.image.settle(now) {
            return;
        }

        if let Some(slide) = viewer.slide.take() {
            viewer.index = slide.target;
            let from = Props::REST.with_x(slide.direction.enter_x()).with_opacity(0.0);
            viewer.image.play(
                TweenSpec::new(from, Props::REST, SLIDE_IN_DURATION)
                    .ease(Ease::Power2Out)
                    .start(now),
            );
            tracing::debug!(index = viewer.index, "lightbox slide committed");
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }

    pub fn viewer(&self) -> Option<&Viewer> {
        match self {
            Lightbox::Open(viewer) => Some(viewer),
            Lightbox::Closed => None,
        }
    }

    /// Index of the photo on screen, if open
    pub fn index(&self) -> Option<usize> {
        self.viewer().map(Viewer::index)
    }

    pub fn is_animating(&self) -> bool {
        self.viewer()
            .map(|viewer| viewer.image.is_animating())
            .unwrap_or(false)
    }
}
