use iced::time::Instant;
use std::time::Duration;

pub const LOGIN_FAILED: &str = "Login gagal! Periksa kembali email atau password Anda.";
pub const LOGIN_SUCCEEDED: &str = "Login sukses!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

/// Surface for transient user-facing messages.
pub trait Notifier {
    fn notify(&mut self, kind: ToastKind, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    created: Instant,
}

/// Toasts shown at the bottom of the window, dropped once they are older than
/// `duration`.
#[derive(Debug)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
    duration: Duration,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            duration,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn push_at(&mut self, kind: ToastKind, message: &str, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            message: message.to_string(),
            created: now,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    /// Drops every toast that has been displayed for at least `duration`.
    pub fn prune(&mut self, now: Instant) {
        let duration = self.duration;
        self.items
            .retain(|t| now.saturating_duration_since(t.created) < duration);
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, kind: ToastKind, message: &str) {
        let id = self.push_at(kind, message, Instant::now());
        tracing::debug!("toast {} shown: {:?} {}", id, kind, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire() {
        let start = Instant::now();
        let mut toasts = Toasts::new(Duration::from_millis(5000));
        toasts.push_at(ToastKind::Failure, LOGIN_FAILED, start);
        toasts.push_at(
            ToastKind::Success,
            LOGIN_SUCCEEDED,
            start + Duration::from_millis(1000),
        );
        assert_eq!(toasts.len(), 2);

        toasts.prune(start + Duration::from_millis(4999));
        assert_eq!(toasts.len(), 2);

        toasts.prune(start + Duration::from_millis(5000));
        let left: Vec<_> = toasts.iter().map(|t| t.kind).collect();
        assert_eq!(left, vec![ToastKind::Success]);

        toasts.prune(start + Duration::from_millis(6000));
        assert!(toasts.is_empty());
    }

    #[test]
    fn dismiss_by_id() {
        let now = Instant::now();
        let mut toasts = Toasts::new(Duration::from_secs(5));
        let a = toasts.push_at(ToastKind::Failure, "a", now);
        let b = toasts.push_at(ToastKind::Failure, "b", now);
        assert_ne!(a, b);
        toasts.dismiss(a);
        assert_eq!(toasts.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
        toasts.dismiss(a);
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn notify_appends() {
        let mut toasts = Toasts::new(Duration::from_secs(5));
        toasts.notify(ToastKind::Success, LOGIN_SUCCEEDED);
        let toast = toasts.iter().next().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, LOGIN_SUCCEEDED);
    }
}
