//! One-shot gesture signal used to satisfy autoplay policy.

use tokio::sync::watch;
use tracing::debug;

/// Single-resolution signal latched by the first user gesture.
///
/// The host reports the first pointer-down or key-down it observes via
/// [`GestureGate::unlock`]; every pending and future [`GestureGate::unlocked`]
/// wait resolves from then on. Later gestures are no-ops, which gives the
/// exactly-once unlocking semantics a recurring event subscription would not.
#[derive(Debug)]
pub struct GestureGate {
    latched: watch::Sender<bool>,
}

impl Default for GestureGate {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureGate {
    pub fn new() -> Self {
        let (latched, _) = watch::channel(false);
        Self { latched }
    }

    /// Latches the gate open. Idempotent.
    pub fn unlock(&self) {
        if !*self.latched.borrow() {
            debug!("user gesture observed, audio creation unlocked");
        }
        self.latched.send_replace(true);
    }

    pub fn is_unlocked(&self) -> bool {
        *self.latched.borrow()
    }

    /// Resolves once a gesture has been observed; immediately if it already
    /// was.
    pub async fn unlocked(&self) {
        let mut rx = self.latched.subscribe();
        // The sender lives in self, so the channel cannot close mid-wait.
        let _ = rx.wait_for(|latched| *latched).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn waits_until_first_unlock() {
        let gate = GestureGate::new();

        let pending = gate.unlocked();
        tokio::pin!(pending);
        assert!(
            timeout(Duration::from_millis(10), &mut pending).await.is_err(),
            "gate should stay closed before any gesture"
        );

        gate.unlock();
        timeout(Duration::from_millis(100), pending)
            .await
            .expect("gate should open after the gesture");
    }

    #[tokio::test]
    async fn resolves_immediately_once_latched() {
        let gate = GestureGate::new();
        gate.unlock();
        gate.unlock(); // second gesture has no further effect

        timeout(Duration::from_millis(10), gate.unlocked())
            .await
            .expect("latched gate should resolve immediately");
        assert!(gate.is_unlocked());
    }
}
