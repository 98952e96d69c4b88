use crate::state::Msg;
use iced::Alignment;
use sidora_ui::{component::text, theme, widget::*};

pub fn dashboard_view<'a>() -> Element<'a, Msg> {
    Container::new(
        Column::new()
            .push(text::h2("Dashboard"))
            .push(text::p1_regular("Selamat datang di siDORA").style(theme::text::secondary))
            .spacing(20)
            .align_x(Alignment::Center),
    )
    .padding(40)
    .style(theme::card::dashboard)
    .into()
}
