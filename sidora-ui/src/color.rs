use iced::Color;
pub const BLACK: Color = iced::Color::BLACK;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;
pub const LIGHT_BLACK: Color = Color::from_rgb(
    0x33 as f32 / 255.0,
    0x33 as f32 / 255.0,
    0x33 as f32 / 255.0,
);
pub const GREY: Color = Color::from_rgb(
    0xBB as f32 / 255.0,
    0xBB as f32 / 255.0,
    0xBB as f32 / 255.0,
);
pub const PLACEHOLDER: Color = Color::from_rgb(
    0x75 as f32 / 255.0,
    0x75 as f32 / 255.0,
    0x75 as f32 / 255.0,
);
pub const TRANSLUCENT_WHITE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.8);
pub const PINK: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0x6F as f32 / 255.0,
    0x91 as f32 / 255.0,
);
pub const BLUSH: Color = Color::from_rgb(
    0xF0 as f32 / 255.0,
    0xE5 as f32 / 255.0,
    0xE5 as f32 / 255.0,
);
pub const BRICK: Color = Color::from_rgb(
    0xC7 as f32 / 255.0,
    0x5C as f32 / 255.0,
    0x5C as f32 / 255.0,
);
pub const BLUE: Color = Color::from_rgb(
    0x4A as f32 / 255.0,
    0x90 as f32 / 255.0,
    0xE2 as f32 / 255.0,
);
pub const LIGHT_BLUE: Color = Color::from_rgb(
    0x5E as f32 / 255.0,
    0xA0 as f32 / 255.0,
    0xEE as f32 / 255.0,
);
pub const PURPLE: Color = Color::from_rgba(
    0x76 as f32 / 255.0,
    0x4B as f32 / 255.0,
    0xA2 as f32 / 255.0,
    0.5,
);
pub const RED: Color = Color::from_rgb(1.0, 0.0, 0.0);
pub const SALMON: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0x6F as f32 / 255.0,
    0x6F as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x4C as f32 / 255.0,
    0xAF as f32 / 255.0,
    0x50 as f32 / 255.0,
);
