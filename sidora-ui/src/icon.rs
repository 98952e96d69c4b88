use crate::{component::text::P1_SIZE, widget::*};
use iced::{alignment, Length};

fn glyph<'a>(unicode: char) -> Text<'a> {
    Text::new(unicode.to_string())
        .shaping(iced::widget::text::Shaping::Advanced)
        .width(Length::Fixed(20.0))
        .align_x(alignment::Horizontal::Center)
        .size(P1_SIZE)
}

pub fn eye_icon<'a>() -> Text<'a> {
    glyph('\u{1F441}')
}

pub fn eye_slash_icon<'a>() -> Text<'a> {
    glyph('\u{1F648}')
}

pub fn check_circle_icon<'a>() -> Text<'a> {
    glyph('\u{2714}')
}

pub fn cross_icon<'a>() -> Text<'a> {
    glyph('\u{274C}')
}
