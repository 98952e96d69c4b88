use super::notifier::{Notifier, ToastKind, LOGIN_FAILED, LOGIN_SUCCEEDED};
use super::router::{Navigator, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Email atau password tidak boleh kosong")]
    EmptyCredentials,
}

/// Identifies one submission. Timer completions carrying another ticket than
/// the in-flight one are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(LoginError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    IdleWithError,
    Succeeded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub password_visible: bool,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), LoginError> {
        if self.email.is_empty() || self.password.is_empty() {
            Err(LoginError::EmptyCredentials)
        } else {
            Ok(())
        }
    }
}

/// Login view state
#[derive(Debug, Default)]
pub struct LoginScreen {
    form: LoginForm,
    submitting: bool,
    error: Option<LoginError>,
    succeeded: bool,
    navigated: bool,
    in_flight: Option<Ticket>,
    next_ticket: u64,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn error(&self) -> Option<LoginError> {
        self.error
    }

    pub fn password_visible(&self) -> bool {
        self.form.password_visible
    }

    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.succeeded
    }

    pub fn phase(&self) -> Phase {
        if self.succeeded {
            Phase::Succeeded
        } else if self.submitting {
            Phase::Submitting
        } else if self.error.is_some() {
            Phase::IdleWithError
        } else {
            Phase::Idle
        }
    }

    pub fn on_email_edited(&mut self, email: String) {
        if !self.can_submit() {
            return;
        }
        self.form.email = email;
        self.error = None;
    }

    pub fn on_password_edited(&mut self, password: String) {
        if !self.can_submit() {
            return;
        }
        self.form.password = password;
        self.error = None;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.form.password_visible = !self.form.password_visible;
    }

    /// Starts a submission. Returns `None` when one is already in flight or the
    /// login already succeeded, nothing must be scheduled then.
    pub fn submit(&mut self) -> Option<Ticket> {
        if !self.can_submit() {
            tracing::debug!("submit ignored in phase {:?}", self.phase());
            return None;
        }
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.submitting = true;
        self.error = None;
        self.in_flight = Some(ticket);
        tracing::debug!("submission {:?} started", ticket);
        Some(ticket)
    }

    /// Validation step, run once the simulated latency has elapsed.
    pub fn on_validation_elapsed(
        &mut self,
        ticket: Ticket,
        notifier: &mut dyn Notifier,
    ) -> Option<Outcome> {
        if !self.submitting || self.in_flight != Some(ticket) {
            tracing::warn!("stale validation for submission {:?}", ticket);
            return None;
        }
        self.submitting = false;
        match self.form.validate() {
            Err(e) => {
                tracing::info!("login failed: {}", e);
                self.error = Some(e);
                self.in_flight = None;
                notifier.notify(ToastKind::Failure, LOGIN_FAILED);
                Some(Outcome::Failure(e))
            }
            Ok(()) => {
                tracing::info!("login succeeded");
                self.error = None;
                self.succeeded = true;
                notifier.notify(ToastKind::Success, LOGIN_SUCCEEDED);
                Some(Outcome::Success)
            }
        }
    }

    /// Leaves the login view after a success. Returns true if navigation
    /// happened.
    pub fn on_redirect_elapsed(&mut self, ticket: Ticket, navigator: &mut dyn Navigator) -> bool {
        if !self.succeeded || self.navigated || self.in_flight != Some(ticket) {
            tracing::warn!("stale redirect for submission {:?}", ticket);
            return false;
        }
        self.navigated = true;
        navigator.go_to(Route::Dashboard);
        true
    }
}
