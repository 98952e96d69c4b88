pub mod button;
pub mod form;
pub mod spinner;
pub mod text;
pub mod toast;
