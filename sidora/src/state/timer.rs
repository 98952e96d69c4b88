use iced::{task::Handle, Task};
use std::time::Duration;

/// Resolves to `message` once `delay` has elapsed.
pub async fn sleep_then<T>(delay: Duration, message: T) -> T {
    tokio::time::sleep(delay).await;
    message
}

/// Schedules `message` after `delay`. Dropping the returned handle aborts the
/// task, the message is then never delivered.
pub fn after<T>(delay: Duration, message: T) -> (Task<T>, Handle)
where
    T: Send + 'static,
{
    let (task, handle) = Task::perform(sleep_then(delay, message), std::convert::identity).abortable();
    (task, handle.abort_on_drop())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleep_then_waits_for_delay() {
        let start = tokio::time::Instant::now();
        let msg = sleep_then(Duration::from_millis(2000), 7u8).await;
        assert_eq!(msg, 7);
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn sleep_then_is_pending_before_delay() {
        let fut = sleep_then(Duration::from_millis(3000), "redirect");
        let res = tokio::time::timeout(Duration::from_millis(2999), fut).await;
        assert!(res.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn after_delivers_while_handle_is_held() {
        use iced::futures::StreamExt;
        let (task, _handle) = after(Duration::from_millis(2000), 1u8);
        let mut stream = iced_runtime::task::into_stream(task).unwrap();
        let res = tokio::time::timeout(Duration::from_secs(10), stream.next())
            .await
            .unwrap();
        assert!(matches!(res, Some(iced_runtime::Action::Output(1))));
    }

    #[tokio::test(start_paused = true)]
    async fn after_is_aborted_when_handle_is_dropped() {
        use iced::futures::StreamExt;
        let (task, handle) = after(Duration::from_millis(2000), 1u8);
        let mut stream = iced_runtime::task::into_stream(task).unwrap();
        drop(handle);
        let res = tokio::time::timeout(Duration::from_secs(10), stream.next())
            .await
            .unwrap();
        assert!(res.is_none());
    }
}
