use iced::widget::image::Handle;
use iced::widget::{button, center, column, container, horizontal_space, image, mouse_area, opaque, row, text, Space};
use iced::{Alignment, Color, ContentFit, Element, Length};
use std::time::Instant;

use crate::state::data::{Photo, PHOTO_COUNT};
use crate::state::lightbox::Viewer;
use crate::Message;

/// Resting size of the displayed photo; the image is fitted inside it
const IMAGE_WIDTH: f32 = 960.0;
const IMAGE_HEIGHT: f32 = 680.0;

/// Full-window overlay showing the viewer's photo.
///
/// Clicking anywhere except the photo and the controls closes it.
pub fn view<'a>(viewer: &Viewer, photo: &'a Photo, handle: &Handle, now: Instant) -> Element<'a, Message> {
    let props = viewer.image(now);
    let scale = props.scale.max(0.0);

    let picture = image(handle.clone())
        .width(IMAGE_WIDTH * scale)
        .height(IMAGE_HEIGHT * scale)
        .content_fit(ContentFit::Contain)
        .opacity(props.opacity.clamp(0.0, 1.0));

    // A spacer on one side moves the centered picture by half its width
    let shift = props.x * 2.0;
    let slid = row![
        Space::with_width(shift.max(0.0)),
        opaque(picture),
        Space::with_width((-shift).max(0.0)),
    ]
    .align_y(Alignment::Center);

    let label = text(format!("{}  ·  {} / {}", photo.alt, viewer.index() + 1, PHOTO_COUNT))
        .size(14)
        .color(Color::from_rgba(1.0, 1.0, 1.0, 0.7));

    let stage = row![
        control("‹", Message::PreviousPhoto),
        center(column![slid, label].spacing(12).align_x(Alignment::Center)),
        control("›", Message::NextPhoto),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .height(Length::Fill);

    let body = column![row![horizontal_space(), control("×", Message::CloseLightbox)], stage].padding(24);

    mouse_area(
        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(super::backdrop_style),
    )
    .on_press(Message::CloseLightbox)
    .into()
}

fn control(glyph: &'static str, message: Message) -> Element<'static, Message> {
    button(text(glyph).size(40))
        .on_press(message)
        .padding([4, 16])
        .style(super::overlay_button_style)
        .into()
}
