use crate::state::{login::LoginScreen, Msg};
use iced::{
    widget::{row, Space},
    Alignment, Length,
};
use sidora_ui::{
    component::{button, form, spinner::Spinner, text},
    icon, theme,
    widget::*,
};

const CARD_WIDTH: f32 = 400.0;
const CARD_HEIGHT: f32 = 500.0;

pub fn login_view<'a>(screen: &'a LoginScreen, spinner: &Spinner) -> Element<'a, Msg> {
    let values = screen.form();
    let processing = screen.submitting();
    let editable = screen.can_submit();
    let on_submit = screen.can_submit().then_some(Msg::LoginSubmit);

    let email = if editable {
        form::Form::new("Email", &values.email, Msg::LoginUpdateEmail)
            .on_submit_maybe(on_submit.clone())
    } else {
        form::Form::new_disabled("Email", &values.email)
    }
    .id("login_email")
    .size(14)
    .padding(12);

    let eye = if values.password_visible {
        icon::eye_slash_icon()
    } else {
        icon::eye_icon()
    };
    let password = if editable {
        form::Form::new("Password", &values.password, Msg::LoginUpdatePassword)
            .on_submit_maybe(on_submit.clone())
    } else {
        form::Form::new_disabled("Password", &values.password)
    }
    .id("login_password")
    .secure(!values.password_visible)
    .trailing(button::icon(eye).on_press(Msg::LoginTogglePassword))
    .size(14)
    .padding(12);

    let label: Element<'a, Msg> = if processing {
        spinner.view().style(theme::text::primary).into()
    } else {
        text::p1_medium("Sign In").into()
    };
    let submit = button::primary_with(label).on_press_maybe(on_submit);

    let title = row![
        text::h1("siDORA"),
        Column::new()
            .push(text::p1_regular("Sistem Informasi"))
            .push(text::p1_regular("Donor Darah")),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let content = Column::new()
        .push(row![
            Space::with_width(Length::Fill),
            title,
            Space::with_width(Length::Fill),
        ])
        .push(Space::with_height(30))
        .push_maybe(
            screen
                .error()
                .map(|e| text::p1_regular(e.to_string()).style(theme::text::error)),
        )
        .push(email)
        .push(password)
        .push(row![Space::with_width(Length::Fill), submit])
        .spacing(15)
        .width(Length::Fill);

    Container::new(content)
        .padding(40)
        .width(Length::Fixed(CARD_WIDTH))
        .height(Length::Fixed(CARD_HEIGHT))
        .style(theme::card::login)
        .into()
}
