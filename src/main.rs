use iced::keyboard::{self, key};
use iced::widget::scrollable::{self, AbsoluteOffset, RelativeOffset};
use iced::widget::{opaque, stack, Space};
use iced::{event, window, Element, Event, Length, Subscription, Task, Theme};
use std::time::Instant;

mod anim;
mod assets;
mod config;
mod error;
mod state;
mod ui;

use assets::probe::{self, ProbeReport};
use assets::Assets;
use config::Config;
use state::gallery::{Gallery, GalleryKey};
use state::scroll::PageScroll;

/// Distance scrolled by PageUp / PageDown
const PAGE_STEP: f32 = 480.0;

/// Main application state
struct MemoryGallery {
    /// The gallery widget (tiles, reveal latch, lightbox)
    gallery: Gallery,
    /// Image handles for every photo
    assets: Assets,
    /// Result of the background asset probe, once it has finished
    probe: Option<ProbeReport>,
    /// Frame time animations are sampled at
    now: Instant,
    dark_theme: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The window gained or lost focus; drives the gallery's activation flag
    Activated(bool),
    /// User clicked a tile
    OpenPhoto(usize),
    /// Close button, backdrop click or Escape
    CloseLightbox,
    NextPhoto,
    PreviousPhoto,
    /// Pointer entered a tile
    HoverStart(usize),
    /// Pointer left a tile
    HoverEnd(usize),
    /// A key press no widget captured
    KeyPressed(keyboard::Key),
    /// Animation frame
    Frame(Instant),
    /// Background asset probe finished
    ProbeComplete(ProbeReport),
}

impl MemoryGallery {
    /// Create a new instance of the application
    fn new(config: Config) -> (Self, Task<Message>) {
        let gallery = Gallery::new(PageScroll::new());
        let assets = Assets::new(&config.asset_root, gallery.photos());

        tracing::info!(
            assets = %config.asset_root.display(),
            photos = gallery.photos().len(),
            "gallery initialized"
        );

        let probe = Task::perform(
            probe::probe_async(assets.paths().to_vec()),
            Message::ProbeComplete,
        );

        let startup = if config.activate_on_start {
            Task::batch([probe, Task::done(Message::Activated(true))])
        } else {
            probe
        };

        (
            MemoryGallery {
                gallery,
                assets,
                probe: None,
                now: Instant::now(),
                dark_theme: config.dark_theme,
            },
            startup,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();

        match message {
            Message::Activated(active) => {
                self.gallery.set_active(active, self.now);
            }
            Message::OpenPhoto(index) => {
                self.gallery.open(index, self.now);
            }
            Message::CloseLightbox => {
                self.gallery.close();
            }
            Message::NextPhoto => {
                self.gallery.next(self.now);
            }
            Message::PreviousPhoto => {
                self.gallery.prev(self.now);
            }
            Message::HoverStart(index) => {
                self.gallery.hover(index);
            }
            Message::HoverEnd(index) => {
                self.gallery.unhover(index);
            }
            Message::KeyPressed(key) => {
                return self.handle_key(key);
            }
            Message::Frame(now) => {
                self.now = now;
                self.gallery.tick(now);
            }
            Message::ProbeComplete(report) => {
                if !report.missing.is_empty() {
                    tracing::warn!(missing = ?report.missing, "some photos could not be read");
                }
                self.probe = Some(report);
            }
        }

        Task::none()
    }

    /// Lightbox keys first; page scrolling only while the page is not locked
    fn handle_key(&mut self, key: keyboard::Key) -> Task<Message> {
        let keyboard::Key::Named(named) = key else {
            return Task::none();
        };

        let gallery_key = match named {
            key::Named::Escape => Some(GalleryKey::Escape),
            key::Named::ArrowLeft => Some(GalleryKey::ArrowLeft),
            key::Named::ArrowRight => Some(GalleryKey::ArrowRight),
            _ => None,
        };

        if let Some(gallery_key) = gallery_key {
            self.gallery.handle_key(gallery_key, self.now);
            return Task::none();
        }

        if self.gallery.scroll().is_locked() {
            return Task::none();
        }

        match named {
            key::Named::PageDown => {
                scrollable::scroll_by(ui::grid_id(), AbsoluteOffset { x: 0.0, y: PAGE_STEP })
            }
            key::Named::PageUp => {
                scrollable::scroll_by(ui::grid_id(), AbsoluteOffset { x: 0.0, y: -PAGE_STEP })
            }
            key::Named::Home => scrollable::snap_to(ui::grid_id(), RelativeOffset::START),
            key::Named::End => scrollable::snap_to(ui::grid_id(), RelativeOffset::END),
            _ => Task::none(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let grid = ui::grid::view(&self.gallery, &self.assets, self.probe.as_ref(), self.now);

        // The overlay layer is always present so the grid keeps its scroll state
        let overlay: Element<Message> = match self.gallery.lightbox().viewer() {
            Some(viewer) => {
                let index = viewer.index();
                opaque(ui::lightbox::view(
                    viewer,
                    &self.gallery.photos()[index],
                    self.assets.handle(index),
                    self.now,
                ))
            }
            None => Space::with_width(Length::Shrink).into(),
        };

        stack![grid, overlay]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Keyboard and focus events always; animation frames only while something moves
    fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(|event, status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
                if status == event::Status::Ignored =>
            {
                Some(Message::KeyPressed(key))
            }
            Event::Window(window::Event::Focused) => Some(Message::Activated(true)),
            Event::Window(window::Event::Unfocused) => Some(Message::Activated(false)),
            _ => None,
        });

        if self.gallery.is_animating() {
            Subscription::batch([events, window::frames().map(Message::Frame)])
        } else {
            events
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let config = Config::load();

    iced::application(
        "Memory Gallery",
        MemoryGallery::update,
        MemoryGallery::view,
    )
    .subscription(MemoryGallery::subscription)
    .theme(MemoryGallery::theme)
    .centered()
    .run_with(move || MemoryGallery::new(config))
}
