/// Status widgets: the error banner and the loading indicator
use iced::widget::{container, row, text};
use iced::{Background, Border, Color, Element, Length, Theme};

use crate::theme::Palette;

/// Red banner with a user-facing error message
pub fn error<'a, Message: 'a>(message: &'a str, palette: &Palette) -> Element<'a, Message> {
    let red = palette.red.color();

    container(row![text("⚠").size(18).color(red), text(message).size(16).color(red)].spacing(10))
        .width(Length::Fill)
        .padding([12, 16])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(Color { a: 0.1, ..red })),
            border: Border {
                color: red,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

pub fn loading<'a, Message: 'a>(palette: &Palette) -> Element<'a, Message> {
    container(
        text("⏳ Classifying resume...")
            .size(18)
            .color(palette.primary.color()),
    )
    .width(Length::Fill)
    .padding([24, 0])
    .center_x(Length::Fill)
    .into()
}
