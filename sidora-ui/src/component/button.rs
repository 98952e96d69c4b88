use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::container;

/// Primary button whose label is replaced by arbitrary content, e.g. a spinner.
pub fn primary_with<'a, T: 'a>(label: impl Into<Element<'a, T>>) -> Button<'a, T> {
    Button::new(
        container(label)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .style(theme::button::primary)
    .padding([10, 20])
}

/// Borderless icon-only button, used inside inputs.
pub fn icon<'a, T: 'a>(icon: Text<'a>) -> Button<'a, T> {
    Button::new(container(icon).align_y(Vertical::Center))
        .style(theme::button::transparent)
        .padding(4)
}
