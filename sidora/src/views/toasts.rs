use crate::state::{
    notifier::{ToastKind, Toasts},
    Msg,
};
use iced::{
    alignment::{Horizontal, Vertical},
    Alignment, Length,
};
use sidora_ui::{component::toast, theme, widget::*};

/// Toast stack, anchored at the bottom-center of the window. Clicking a toast
/// dismisses it.
pub fn toasts_view(toasts: &Toasts) -> Element<'_, Msg> {
    let column = toasts.iter().fold(
        Column::new().spacing(10).align_x(Alignment::Center),
        |col, t| {
            let content = match t.kind {
                ToastKind::Success => toast::success(&t.message),
                ToastKind::Failure => toast::failure(&t.message),
            };
            col.push(
                Button::new(content)
                    .padding(0)
                    .style(theme::button::transparent)
                    .on_press(Msg::ToastDismiss(t.id)),
            )
        },
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}
