use crate::state::{router::Route, Msg, State};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::stack,
    Length,
};
use sidora_ui::{theme, widget::*};

mod dashboard;
mod login;
mod toasts;

pub use dashboard::dashboard_view;
pub use login::login_view;
pub use toasts::toasts_view;

pub fn view(state: &State) -> Element<'_, Msg> {
    let content = match (state.route(), state.login.as_ref()) {
        (Route::Login, Some(session)) => login_view(&session.screen, &state.spinner),
        (Route::Login, None) | (Route::Dashboard, _) => dashboard_view(),
    };

    let page = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(theme::container::gradient);

    if state.toasts.is_empty() {
        page.into()
    } else {
        stack![page, toasts_view(&state.toasts)].into()
    }
}
