use iced::Task;

use super::{
    login::{Outcome, Ticket},
    router::Route,
    timer, Msg, State,
};

impl State {
    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        match message {
            Msg::LoginUpdateEmail(email) => {
                if let Some(session) = self.login.as_mut() {
                    session.screen.on_email_edited(email);
                }
                Task::none()
            }
            Msg::LoginUpdatePassword(password) => {
                if let Some(session) = self.login.as_mut() {
                    session.screen.on_password_edited(password);
                }
                Task::none()
            }
            Msg::LoginTogglePassword => {
                if let Some(session) = self.login.as_mut() {
                    session.screen.toggle_password_visibility();
                }
                Task::none()
            }
            Msg::LoginSubmit => self.on_login_submit(),
            Msg::ValidationElapsed(ticket) => self.on_validation_elapsed(ticket),
            Msg::RedirectElapsed(ticket) => self.on_redirect_elapsed(ticket),
            Msg::Tick(now) => {
                self.toasts.prune(now);
                if self.submitting() {
                    self.spinner.tick();
                }
                Task::none()
            }
            Msg::ToastDismiss(id) => {
                self.toasts.dismiss(id);
                Task::none()
            }
        }
    }

    fn on_login_submit(&mut self) -> Task<Msg> {
        let delay = self.config.submit_delay();
        let Some(session) = self.login.as_mut() else {
            return Task::none();
        };
        let Some(ticket) = session.screen.submit() else {
            return Task::none();
        };
        self.spinner.reset();
        let (task, handle) = timer::after(delay, Msg::ValidationElapsed(ticket));
        session.validation_timer = Some(handle);
        task
    }

    fn on_validation_elapsed(&mut self, ticket: Ticket) -> Task<Msg> {
        let delay = self.config.redirect_delay();
        let Some(session) = self.login.as_mut() else {
            tracing::warn!("validation for {:?} fired after the login view was left", ticket);
            return Task::none();
        };
        let outcome = session.screen.on_validation_elapsed(ticket, &mut self.toasts);
        if outcome.is_some() {
            session.validation_timer = None;
        }
        if let Some(Outcome::Success) = outcome {
            let (task, handle) = timer::after(delay, Msg::RedirectElapsed(ticket));
            session.redirect_timer = Some(handle);
            return task;
        }
        Task::none()
    }

    fn on_redirect_elapsed(&mut self, ticket: Ticket) -> Task<Msg> {
        let Some(session) = self.login.as_mut() else {
            tracing::warn!("redirect for {:?} fired after the login view was left", ticket);
            return Task::none();
        };
        if session.screen.on_redirect_elapsed(ticket, &mut self.router) {
            session.redirect_timer = None;
        }
        if self.router.current() != Route::Login {
            // Leaving the route tears the screen down along with its timers.
            self.login = None;
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::notifier::{ToastKind, LOGIN_FAILED, LOGIN_SUCCEEDED};
    use iced::time::Instant;
    use std::time::Duration;

    fn state() -> State {
        State::new(Config::default())
    }

    fn in_flight(state: &State) -> Ticket {
        state
            .login
            .as_ref()
            .and_then(|s| s.screen.in_flight())
            .unwrap()
    }

    fn fill(state: &mut State, email: &str, password: &str) {
        let _ = state.update(Msg::LoginUpdateEmail(email.to_string()));
        let _ = state.update(Msg::LoginUpdatePassword(password.to_string()));
    }

    fn toasts(state: &State) -> Vec<(ToastKind, String)> {
        state
            .toasts
            .iter()
            .map(|t| (t.kind, t.message.clone()))
            .collect()
    }

    #[test]
    fn scenario_empty_credentials() {
        let mut state = state();
        let _ = state.update(Msg::LoginSubmit);
        assert!(state.submitting());
        assert!(state.login.as_ref().unwrap().has_pending_timer());
        assert!(state.toasts.is_empty());

        let ticket = in_flight(&state);
        let _ = state.update(Msg::ValidationElapsed(ticket));
        let session = state.login.as_ref().unwrap();
        assert_eq!(
            session.screen.error().map(|e| e.to_string()),
            Some("Email atau password tidak boleh kosong".to_string())
        );
        assert!(!session.screen.succeeded());
        assert!(!session.has_pending_timer());
        assert_eq!(
            toasts(&state),
            vec![(ToastKind::Failure, LOGIN_FAILED.to_string())]
        );
        assert_eq!(state.route(), Route::Login);
    }

    #[test]
    fn scenario_valid_credentials() {
        let mut state = state();
        fill(&mut state, "a@b.com", "x");
        let _ = state.update(Msg::LoginSubmit);
        let ticket = in_flight(&state);

        let _ = state.update(Msg::ValidationElapsed(ticket));
        assert_eq!(
            toasts(&state),
            vec![(ToastKind::Success, LOGIN_SUCCEEDED.to_string())]
        );
        assert_eq!(state.route(), Route::Login);
        let session = state.login.as_ref().unwrap();
        assert!(session.screen.succeeded());
        assert_eq!(session.screen.error(), None);
        assert!(session.has_pending_timer());

        let _ = state.update(Msg::RedirectElapsed(ticket));
        assert_eq!(state.route(), Route::Dashboard);
        assert_eq!(state.route().path(), "/dashboard");
        assert!(state.login.is_none());
        // The success toast survives the navigation.
        assert_eq!(state.toasts.len(), 1);

        // Late timer completions hit a discarded screen.
        let _ = state.update(Msg::ValidationElapsed(ticket));
        let _ = state.update(Msg::RedirectElapsed(ticket));
        assert_eq!(state.route(), Route::Dashboard);
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn resubmit_while_submitting_is_ignored() {
        let mut state = state();
        fill(&mut state, "a@b.com", "x");
        let _ = state.update(Msg::LoginSubmit);
        let ticket = in_flight(&state);
        let _ = state.update(Msg::LoginSubmit);
        assert_eq!(in_flight(&state), ticket);

        let _ = state.update(Msg::ValidationElapsed(ticket));
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn toggle_never_submits() {
        let mut state = state();
        fill(&mut state, "a@b.com", "x");
        let _ = state.update(Msg::LoginTogglePassword);
        let _ = state.update(Msg::LoginTogglePassword);
        let session = state.login.as_ref().unwrap();
        assert!(!session.screen.password_visible());
        assert!(!session.screen.submitting());
        assert!(!session.has_pending_timer());
    }

    #[test]
    fn tick_prunes_toasts_and_spins() {
        let mut state = state();
        let _ = state.update(Msg::LoginSubmit);
        let before = state.spinner;
        let _ = state.update(Msg::Tick(Instant::now()));
        assert_ne!(state.spinner, before);

        let ticket = in_flight(&state);
        let _ = state.update(Msg::ValidationElapsed(ticket));
        assert_eq!(state.toasts.len(), 1);
        let _ = state.update(Msg::Tick(
            Instant::now() + state.config.toast_duration() + Duration::from_millis(1),
        ));
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn dismiss_toast() {
        let mut state = state();
        let _ = state.update(Msg::LoginSubmit);
        let _ = state.update(Msg::ValidationElapsed(in_flight(&state)));
        let id = state.toasts.iter().next().unwrap().id;
        let _ = state.update(Msg::ToastDismiss(id));
        assert!(state.toasts.is_empty());
    }
}
