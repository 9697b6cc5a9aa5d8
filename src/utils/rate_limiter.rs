use std::sync::Arc;
use tokio::sync::{AcquireError, Mutex, OwnedSemaphorePermit, Semaphore};
use tokio::time::{sleep, Duration, Instant};

/// Throttle for the season-wide loops: caps concurrent upstream bursts and
/// keeps a minimum pause between consecutive acquisitions.
///
/// Shared by every request so the pause holds across concurrent aggregations.
/// A zero delay turns it into a plain semaphore, which is what tests use.
#[derive(Clone)]
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    min_delay: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_concurrent: usize, min_delay: Duration) -> Self {
        RateLimiter {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            min_delay,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub fn unthrottled() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Waits for a permit and for the minimum delay since the previous
    /// acquisition. The permit is held until the guard is dropped.
    pub async fn acquire(&self) -> Result<RateLimitGuard, AcquireError> {
        let permit = self.semaphore.clone().acquire_owned().await?;

        let mut last_request = self.last_request.lock().await;
        if let Some(last) = *last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_delay {
                let wait_time = self.min_delay - elapsed;
                tracing::debug!("Rate limiting: waiting {:?}", wait_time);
                sleep(wait_time).await;
            }
        }
        *last_request = Some(Instant::now());
        drop(last_request);

        Ok(RateLimitGuard { _permit: permit })
    }

    #[cfg(test)]
    fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }
}

pub struct RateLimitGuard {
    _permit: OwnedSemaphorePermit,
}
