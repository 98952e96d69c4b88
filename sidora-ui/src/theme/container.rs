use iced::widget::container::{transparent, Catalog, Style, StyleFn};
use iced::{gradient, Background, Radians};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(transparent)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

/// Diagonal page gradient, accent in the top-left corner.
pub fn gradient(theme: &Theme) -> Style {
    let linear = gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_4 * 3.0))
        .add_stop(0.0, theme.colors.general.background_accent)
        .add_stop(1.0, theme.colors.general.background);
    Style {
        background: Some(Background::Gradient(linear.into())),
        ..Default::default()
    }
}
