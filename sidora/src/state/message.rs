use iced::time::Instant;

use super::login::Ticket;

/// All application messages
#[derive(Debug, Clone)]
pub enum Msg {
    // Login form
    LoginUpdateEmail(String),
    LoginUpdatePassword(String),
    LoginTogglePassword,
    LoginSubmit,

    // Timers
    ValidationElapsed(Ticket),
    RedirectElapsed(Ticket),
    Tick(Instant),

    // Toasts
    ToastDismiss(u64),
}
