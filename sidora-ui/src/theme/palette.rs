use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    /// Second stop of the page gradient.
    pub background_accent: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub transparent: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub login: ContainerPalette,
    pub dashboard: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub failure: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub focused: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::BLUSH,
                background_accent: color::PINK,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::LIGHT_BLACK,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::BLUE,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::LIGHT_BLUE,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::BLUE,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY,
                        text: color::WHITE,
                        border: None,
                    }),
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::BLACK,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::BLACK,
                        border: None,
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY,
                        border: None,
                    }),
                },
            },
            cards: Cards {
                login: ContainerPalette {
                    background: color::BRICK,
                    text: Some(color::WHITE),
                    border: None,
                },
                dashboard: ContainerPalette {
                    background: color::WHITE,
                    text: Some(color::LIGHT_BLACK),
                    border: None,
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::GREEN,
                    text: Some(color::WHITE),
                    border: None,
                },
                failure: ContainerPalette {
                    background: color::SALMON,
                    text: Some(color::WHITE),
                    border: None,
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::TRANSLUCENT_WHITE,
                        icon: color::LIGHT_BLACK,
                        placeholder: color::PLACEHOLDER,
                        value: color::LIGHT_BLACK,
                        selection: color::LIGHT_BLUE,
                        border: None,
                    },
                    focused: TextInputPalette {
                        background: color::WHITE,
                        icon: color::LIGHT_BLACK,
                        placeholder: color::PLACEHOLDER,
                        value: color::LIGHT_BLACK,
                        selection: color::LIGHT_BLUE,
                        border: Some(color::PURPLE),
                    },
                    disabled: TextInputPalette {
                        background: color::TRANSLUCENT_WHITE,
                        icon: color::GREY,
                        placeholder: color::GREY,
                        value: color::PLACEHOLDER,
                        selection: color::LIGHT_BLUE,
                        border: None,
                    },
                },
            },
        }
    }
}
