//! Rate limiting for API requests

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// 레이트 리미터
///
/// Enforces a minimum interval between consecutive requests, the way the
/// exchange documents its limit (one request per `interval`).
pub struct RateLimiter {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// 새로운 레이트 리미터 생성
    ///
    /// # Arguments
    /// * `interval_ms` - 요청 간 최소 간격 (밀리초), 0 이면 비활성화
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            next_slot: Mutex::new(None),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.interval.is_zero()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 다음 요청 슬롯까지 대기
    pub async fn throttle(&self) {
        if !self.is_enabled() {
            return;
        }

        let wait_until = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = match *next {
                Some(at) if at > now => at,
                _ => now,
            };
            *next = Some(slot + self.interval);
            slot
        };

        tokio::time::sleep_until(wait_until).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_limiter_never_waits() {
        let limiter = RateLimiter::new(0);
        assert!(!limiter.is_enabled());

        let start = Instant::now();
        for _ in 0..10 {
            limiter.throttle().await;
        }
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_requests_are_spaced() {
        let limiter = RateLimiter::new(500);

        let start = Instant::now();
        limiter.throttle().await;
        assert!(start.elapsed() < Duration::from_millis(500));

        limiter.throttle().await;
        limiter.throttle().await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
