use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::Button;
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn transparent(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.transparent, status)
}

fn border(color: Option<Color>) -> Border {
    if let Some(color) = color {
        Border {
            radius: 5.0.into(),
            width: 1.0,
            color,
        }
    } else {
        Border {
            radius: 5.0.into(),
            ..Default::default()
        }
    }
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => Style {
            background: Some(Background::Color(p.active.background)),
            text_color: p.active.text,
            border: border(p.active.border),
            ..Default::default()
        },
        Status::Pressed => {
            if let Some(pressed) = p.pressed {
                Style {
                    background: Some(Background::Color(pressed.background)),
                    text_color: pressed.text,
                    border: border(pressed.border),
                    ..Default::default()
                }
            } else {
                button(p, Status::Active)
            }
        }
        Status::Hovered => Style {
            background: Some(Background::Color(p.hovered.background)),
            text_color: p.hovered.text,
            border: border(p.hovered.border),
            ..Default::default()
        },
        Status::Disabled => {
            if let Some(disabled) = p.disabled {
                Style {
                    background: Some(Background::Color(disabled.background)),
                    text_color: disabled.text,
                    border: border(disabled.border),
                    ..Default::default()
                }
            } else {
                let active: Style = button(p, Status::Active);

                Style {
                    text_color: Color {
                        a: 0.2,
                        ..active.text_color
                    },
                    ..active
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn disabled_primary_is_grey() {
        let theme = <Theme as Default>::default();
        let style = primary(&theme, Status::Disabled);
        assert_eq!(style.background, Some(Background::Color(color::GREY)));
        let style = primary(&theme, Status::Active);
        assert_eq!(style.background, Some(Background::Color(color::BLUE)));
    }

    #[test]
    fn pressed_falls_back_to_active() {
        let theme = <Theme as Default>::default();
        let pressed = transparent(&theme, Status::Pressed);
        let active = transparent(&theme, Status::Active);
        assert_eq!(pressed.text_color, active.text_color);
        assert_eq!(pressed.background, active.background);
    }
}
