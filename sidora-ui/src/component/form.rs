use iced::widget::text_input;
use iced::{Alignment, Length};

use crate::{theme, widget::*};

pub struct Form<'a, Message> {
    input: TextInput<'a, Message>,
    trailing: Option<Element<'a, Message>>,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &str, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            input: TextInput::new(placeholder, value)
                .on_input(on_change)
                .style(theme::text_input::primary),
            trailing: None,
        }
    }

    /// Creates a new [`Form`] that has a disabled input.
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    pub fn new_disabled(placeholder: &str, value: &str) -> Self {
        Self {
            input: TextInput::new(placeholder, value).style(theme::text_input::primary),
            trailing: None,
        }
    }

    /// Sets the widget id of the input, used to focus it.
    pub fn id(mut self, id: &'static str) -> Self {
        self.input = self.input.id(text_input::Id::new(id));
        self
    }

    /// Masks the value of the [`Form`] when `secure` is true.
    pub fn secure(mut self, secure: bool) -> Self {
        self.input = self.input.secure(secure);
        self
    }

    /// Sets the message produced when Enter is pressed in the input.
    pub fn on_submit_maybe(mut self, message: Option<Message>) -> Self {
        if let Some(message) = message {
            self.input = self.input.on_submit(message);
        }
        self
    }

    /// Places an element after the input, on the same line.
    pub fn trailing(mut self, element: impl Into<Element<'a, Message>>) -> Self {
        self.trailing = Some(element.into());
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    /// Sets the [`Form`] with a text size
    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Row::new()
                .push(form.input.width(Length::Fill))
                .push_maybe(form.trailing)
                .spacing(5)
                .align_y(Alignment::Center)
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .into()
    }
}
