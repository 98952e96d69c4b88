use crate::{component::text, icon, theme, widget::*};
use iced::{Alignment, Length};

pub const TOAST_WIDTH: f32 = 360.0;

fn toast<'a, T: 'a>(icon: Text<'a>, message: &'a str) -> Container<'a, T> {
    Container::new(
        Row::new()
            .push(icon.style(theme::text::primary))
            .push(text::p1_medium(message).style(theme::text::primary))
            .spacing(10)
            .align_y(Alignment::Center),
    )
    .padding([12, 16])
    .width(Length::Fixed(TOAST_WIDTH))
}

pub fn success<'a, T: 'a>(message: &'a str) -> Container<'a, T> {
    toast(icon::check_circle_icon(), message).style(theme::notification::success)
}

pub fn failure<'a, T: 'a>(message: &'a str) -> Container<'a, T> {
    toast(icon::cross_icon(), message).style(theme::notification::failure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_borrow_their_message() {
        let message = String::from("Login sukses!");
        let _: Element<'_, ()> = success(&message).into();
        let _: Element<'_, ()> = failure(&message).into();
    }
}
