use iced::widget::container::Style;
use iced::{Background, Border, Color, Shadow, Vector};

use super::palette::ContainerPalette;
use super::Theme;

fn card(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: Border {
            radius: 20.0.into(),
            width: if palette.border.is_some() { 1.0 } else { 0.0 },
            color: palette.border.unwrap_or(Color::TRANSPARENT),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 32.0,
        },
    }
}

pub fn login(theme: &Theme) -> Style {
    card(&theme.colors.cards.login)
}

pub fn dashboard(theme: &Theme) -> Style {
    card(&theme.colors.cards.dashboard)
}
