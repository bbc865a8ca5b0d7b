/// Gallery views
///
/// - `grid.rs` - header and masonry grid of photo tiles
/// - `lightbox.rs` - full-view overlay for a single photo
///
/// Views are pure functions of the gallery state and the current frame time.

pub mod grid;
pub mod lightbox;

use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Theme};

/// Id of the grid's scrollable, used for keyboard page scrolling
pub fn grid_id() -> scrollable::Id {
    scrollable::Id::new("gallery-grid")
}

/// Dimmed backdrop behind the lightbox
pub fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.92))),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Caption strip over a hovered tile
pub fn caption_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.45))),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Rounded card behind each tile
pub fn tile_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Borderless white-on-dark buttons for the lightbox controls
pub fn overlay_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::text(theme, status);
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 1.0,
        _ => 0.75,
    };

    button::Style {
        text_color: Color { a: alpha, ..Color::WHITE },
        ..base
    }
}
