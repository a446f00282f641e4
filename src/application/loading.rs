// Loading placeholder timer - cancellable delayed reset of the loading flag
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Raises the loading flag on every range change and lowers it after a fixed
/// delay. Starting again aborts the pending reset, so at most one timer is
/// alive at a time.
pub struct LoadingTimer {
    delay: Duration,
    flag: Arc<watch::Sender<bool>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl LoadingTimer {
    pub fn new(delay: Duration) -> Self {
        let (flag, _) = watch::channel(false);
        Self {
            delay,
            flag: Arc::new(flag),
            pending: Mutex::new(None),
        }
    }

    pub fn is_loading(&self) -> bool {
        *self.flag.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.flag.subscribe()
    }

    pub fn start(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = pending.take() {
            handle.abort();
            tracing::debug!("Cancelled pending loading reset");
        }

        if self.delay.is_zero() {
            self.flag.send_replace(false);
            return;
        }

        self.flag.send_replace(true);

        let flag = self.flag.clone();
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            flag.send_replace(false);
        }));
    }

    /// Abort any pending reset and lower the flag immediately.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        self.flag.send_replace(false);
    }
}

impl Drop for LoadingTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().ok().and_then(Option::take) {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_flag_clears_after_delay() {
        let timer = LoadingTimer::new(Duration::from_millis(500));
        assert!(!timer.is_loading());

        timer.start();
        assert!(timer.is_loading());

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(timer.is_loading());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!timer.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_pending_timer() {
        let timer = LoadingTimer::new(Duration::from_millis(500));

        timer.start();
        tokio::time::sleep(Duration::from_millis(400)).await;
        timer.start();

        // The first timer would have fired here.
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(timer.is_loading());

        tokio::time::sleep(Duration::from_millis(301)).await;
        assert!(!timer.is_loading());
    }

    #[tokio::test]
    async fn test_zero_delay_never_loads() {
        let timer = LoadingTimer::new(Duration::ZERO);
        timer.start();
        assert!(!timer.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_lowers_flag() {
        let timer = LoadingTimer::new(Duration::from_secs(10));
        timer.start();
        assert!(timer.is_loading());

        timer.cancel();
        assert!(!timer.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_sees_reset() {
        let timer = LoadingTimer::new(Duration::from_millis(500));
        let mut rx = timer.subscribe();

        timer.start();
        rx.wait_for(|loading| !*loading).await.unwrap();
        assert!(!timer.is_loading());
    }
}
