// SPDX-License-Identifier: Apache-2.0

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Collapses a burst of values into the last one: each `push` starts the
/// delay over, and only the push that is still newest when its delay elapses
/// yields its value.
#[derive(Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn push<T>(&self, value: T) -> Option<T> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        if self.generation.load(Ordering::SeqCst) == ticket {
            Some(value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn a_lone_push_fires_after_the_delay() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        assert_eq!(debouncer.push("lamp").await, Some("lamp"));
    }

    #[tokio::test(start_paused = true)]
    async fn a_newer_push_suppresses_the_older_one() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let older = tokio::spawn({
            let debouncer = debouncer.clone();
            async move { debouncer.push("la").await }
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        let newer = debouncer.push("lamp");

        let (older, newer) = tokio::join!(older, newer);
        assert_eq!(older.expect("join"), None);
        assert_eq!(newer, Some("lamp"));
    }

    #[tokio::test(start_paused = true)]
    async fn each_push_restarts_the_clock() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        for keystroke in ["l", "la", "lam"] {
            let debouncer = debouncer.clone();
            tokio::spawn(async move { debouncer.push(keystroke).await });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(debouncer.push("lamp").await, Some("lamp"));
    }
}
