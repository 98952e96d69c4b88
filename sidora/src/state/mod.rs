use crate::{config::Config, views};
use iced::{task::Handle, Subscription};
use sidora_ui::{component::spinner::Spinner, widget::Element};
use std::time::Duration;

pub use message::Msg;

pub mod login;
pub mod message;
pub mod notifier;
pub mod router;
pub mod timer;
pub mod update;

use login::LoginScreen;
use notifier::Toasts;
use router::{Route, Router};

const ANIMATION_TICK: Duration = Duration::from_millis(100);

/// The login screen together with the timers it started. Dropping the session
/// aborts them.
pub struct LoginSession {
    pub screen: LoginScreen,
    validation_timer: Option<Handle>,
    redirect_timer: Option<Handle>,
}

impl LoginSession {
    pub fn new() -> Self {
        Self {
            screen: LoginScreen::new(),
            validation_timer: None,
            redirect_timer: None,
        }
    }

    pub fn has_pending_timer(&self) -> bool {
        self.validation_timer.is_some() || self.redirect_timer.is_some()
    }
}

impl Default for LoginSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state
pub struct State {
    pub config: Config,
    pub router: Router,
    /// Present while the login route is shown.
    pub login: Option<LoginSession>,
    pub toasts: Toasts,
    pub spinner: Spinner,
}

impl State {
    pub fn new(config: Config) -> Self {
        let toasts = Toasts::new(config.toast_duration());
        Self {
            config,
            router: Router::new(Route::Login),
            login: Some(LoginSession::new()),
            toasts,
            spinner: Spinner::default(),
        }
    }

    pub fn route(&self) -> Route {
        self.router.current()
    }

    pub fn submitting(&self) -> bool {
        self.login
            .as_ref()
            .map(|session| session.screen.submitting())
            .unwrap_or(false)
    }

    /// Ticks only while something on screen is animated or expiring.
    pub fn subscription(&self) -> Subscription<Msg> {
        if self.submitting() || !self.toasts.is_empty() {
            iced::time::every(ANIMATION_TICK).map(Msg::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Msg> {
        views::view(self)
    }
}

// NOTE: implementation of State::update() is in src/state/update.rs
