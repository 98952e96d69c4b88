use crate::{component::text, font, widget::*};
use iced::advanced::text::Shaping;

const FRAMES: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Frame counter for a text spinner. The owner advances it on a timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }

    pub fn glyph(&self) -> char {
        FRAMES[self.frame]
    }

    pub fn view<'a>(&self) -> Text<'a> {
        Text::new(self.glyph().to_string())
            .shaping(Shaping::Advanced)
            .font(font::BOLD)
            .size(text::H2_SIZE - 5)
    }
}
