use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircuitState {
    Closed,
    Open,
    /// One trial call is let through after the reset timeout.
    HalfOpen,
}

/// Guards calls to one upstream service.
pub struct CircuitBreaker {
    pub name: String,
    state: RwLock<CircuitState>,
    failure_count: AtomicU32,
    failure_threshold: u32,
    reset_timeout: Duration,
    last_failure: RwLock<Option<Instant>>,
    trial_in_flight: AtomicBool,
}

impl CircuitBreaker {
    pub fn new(name: &str, threshold: u32, reset_timeout: Duration) -> Self {
        Self {
            name: name.to_string(),
            state: RwLock::new(CircuitState::Closed),
            failure_count: AtomicU32::new(0),
            failure_threshold: threshold.max(1),
            reset_timeout,
            last_failure: RwLock::new(None),
            trial_in_flight: AtomicBool::new(false),
        }
    }

    pub async fn state(&self) -> CircuitState {
        *self.state.read().await
    }

    /// Whether a call may go out now. While half-open only the caller that
    /// claims the trial slot gets through.
    pub async fn check(&self) -> bool {
        let state = *self.state.read().await;
        match state {
            CircuitState::Closed => true,
            CircuitState::HalfOpen => self.claim_trial(),
            CircuitState::Open => {
                let last_fail = *self.last_failure.read().await;
                let expired = matches!(last_fail, Some(instant) if instant.elapsed() >= self.reset_timeout);
                if !expired {
                    return false;
                }

                let mut state = self.state.write().await;
                if *state == CircuitState::Open {
                    *state = CircuitState::HalfOpen;
                    info!("Circuit Breaker [{}] moving to Half-Open", self.name);
                }
                self.claim_trial()
            }
        }
    }

    fn claim_trial(&self) -> bool {
        self.trial_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub async fn record_success(&self) {
        let mut state = self.state.write().await;
        if *state == CircuitState::HalfOpen {
            info!("Circuit Breaker [{}] recovered to Closed", self.name);
        }
        *state = CircuitState::Closed;
        self.failure_count.store(0, Ordering::SeqCst);
        self.trial_in_flight.store(false, Ordering::SeqCst);
    }

    pub async fn record_failure(&self) {
        let count = self.failure_count.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.state.write().await;

        if count >= self.failure_threshold || *state == CircuitState::HalfOpen {
            *state = CircuitState::Open;
            *self.last_failure.write().await = Some(Instant::now());
            error!("Circuit Breaker [{}] TRIPPED to Open. Failures: {}", self.name, count);
        }
        self.trial_in_flight.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trips_after_threshold() {
        let cb = CircuitBreaker::new("database-api", 2, Duration::from_secs(60));
        cb.record_failure().await;
        assert!(cb.check().await);

        cb.record_failure().await;
        assert_eq!(cb.state().await, CircuitState::Open);
        assert!(!cb.check().await);
    }

    #[tokio::test]
    async fn test_success_resets_count() {
        let cb = CircuitBreaker::new("auth-api", 2, Duration::from_secs(60));
        cb.record_failure().await;
        cb.record_success().await;
        cb.record_failure().await;
        assert_eq!(cb.state().await, CircuitState::Closed);
    }

    #[tokio::test]
    async fn test_half_open_after_timeout() {
        let cb = CircuitBreaker::new("auth-api", 1, Duration::from_millis(10));
        cb.record_failure().await;
        assert!(!cb.check().await);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(cb.check().await);
        assert_eq!(cb.state().await, CircuitState::HalfOpen);

        // A failed trial reopens immediately.
        cb.record_failure().await;
        assert_eq!(cb.state().await, CircuitState::Open);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(cb.check().await);
        cb.record_success().await;
        assert_eq!(cb.state().await, CircuitState::Closed);
    }

    #[tokio::test]
    async fn test_half_open_lets_one_trial_through() {
        let cb = CircuitBreaker::new("database-api", 1, Duration::from_millis(10));
        cb.record_failure().await;
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(cb.check().await);
        assert!(!cb.check().await);
        assert!(!cb.check().await);

        cb.record_success().await;
        assert!(cb.check().await);
        assert!(cb.check().await);
    }
}
