use iced::widget::image::Handle;
use iced::widget::{column, container, horizontal_space, image, mouse_area, row, scrollable, stack, text, Space};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;
use std::time::Instant;

use crate::anim::Props;
use crate::assets::probe::ProbeReport;
use crate::assets::Assets;
use crate::state::data::{Photo, PHOTO_COUNT};
use crate::state::gallery::Gallery;
use crate::Message;

/// Gap between tiles, both within a line and between lines
const TILE_GAP: f32 = 16.0;

/// Header plus the masonry grid, inside the page scrollable
pub fn view<'a>(
    gallery: &'a Gallery,
    assets: &'a Assets,
    probe: Option<&ProbeReport>,
    now: Instant,
) -> Element<'a, Message> {
    let status = match probe {
        Some(report) => format!("{} of {} photos ready", report.ready, PHOTO_COUNT),
        None => String::from("Loading photos..."),
    };

    let header = column![
        text("💝 Our Beautiful Journey").size(40),
        text("Every moment captured, every memory cherished").size(18),
        text(status).size(13),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let tiles: Vec<Element<'a, Message>> = gallery
        .photos()
        .iter()
        .enumerate()
        .map(|(index, photo)| {
            tile(
                index,
                photo,
                assets.handle(index),
                gallery.tile(index, now),
                gallery.hovered() == Some(index) && gallery.is_revealed(),
            )
        })
        .collect();

    let grid = Wrap::with_elements(tiles)
        .spacing(TILE_GAP)
        .line_spacing(TILE_GAP);

    let content = column![
        container(header).center_x(Length::Fill),
        container(grid).center_x(Length::Fill),
    ]
    .spacing(32)
    .padding(40)
    .width(Length::Fill);

    scrollable(content)
        .id(super::grid_id())
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// A single photo tile, drawn with its current reveal animation
fn tile<'a>(
    index: usize,
    photo: &'a Photo,
    handle: &Handle,
    props: Props,
    hovered: bool,
) -> Element<'a, Message> {
    let (width, height) = photo.size.dimensions();
    let scale = props.scale.max(0.0);

    let picture = image(handle.clone())
        .width(width * scale)
        .height(height * scale)
        .content_fit(ContentFit::Cover)
        .opacity(props.opacity.clamp(0.0, 1.0));

    // Center the scaled picture in its cell, then drop it by `y`
    let top = ((height - height * scale) / 2.0 + props.y).max(0.0);
    let placed = column![Space::with_height(top), picture]
        .width(Length::Fill)
        .align_x(Alignment::Center);

    let mut layers = stack![placed];
    if hovered {
        layers = layers.push(caption(photo));
    }

    let cell = container(layers)
        .width(width)
        .height(height)
        .clip(true)
        .style(super::tile_style);

    mouse_area(cell)
        .on_press(Message::OpenPhoto(index))
        .on_enter(Message::HoverStart(index))
        .on_exit(Message::HoverEnd(index))
        .into()
}

fn caption(photo: &Photo) -> Element<'_, Message> {
    let strip = row![
        text(photo.caption).size(16),
        horizontal_space(),
        text("✨").size(18),
    ]
    .align_y(Alignment::Center);

    container(container(strip).padding(12).width(Length::Fill).style(super::caption_style))
        .width(Length::Fill)
        .align_bottom(Length::Fill)
        .into()
}
