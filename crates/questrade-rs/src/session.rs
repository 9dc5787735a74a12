//! Per-client session state: the current credentials, the rate-limit mirror
//! and the advisory login expiry timer.
//!
//! Credentials are immutable once built. Readers take an [`Arc`] snapshot and
//! `login`/`revoke_auth` swap in a whole new value, so a request in flight
//! never observes a half-written credential set.

use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use tokio::time::Instant;

use crate::auth::models::Credentials;


pub(crate) const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
pub(crate) const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";


/// Rate-limit values mirrored from the last response headers.
///
/// Missing or malformed headers read as zero (`remaining == 0`,
/// `reset_at == UNIX_EPOCH`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub remaining: u32,
    pub reset_at: DateTime<Utc>,
}

impl RateLimit {
    pub(crate) fn from_headers(headers: &HeaderMap) -> RateLimit {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
        };
        let remaining = header(RATE_LIMIT_REMAINING)
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or_default();
        let reset_at = header(RATE_LIMIT_RESET)
            .and_then(|v| v.parse::<i64>().ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or_default();
        RateLimit { remaining, reset_at }
    }
}


/// Deadline for the current login session.
///
/// Purely advisory: nothing happens when it passes. Callers await
/// [`SessionTimer::expired`] (or poll [`SessionTimer::is_expired`]) and log in
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimer {
    deadline: Instant,
}

impl SessionTimer {
    pub(crate) fn start(expires_in: Duration) -> SessionTimer {
        SessionTimer { deadline: Instant::now() + expires_in }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Resolves once the session has expired.
    pub async fn expired(self) {
        tokio::time::sleep_until(self.deadline).await;
    }
}


#[derive(Debug, Default)]
struct Counters {
    rate_limit: RateLimit,
    timer: Option<SessionTimer>,
}


#[derive(Debug)]
pub(crate) struct Session {
    credentials: RwLock<Arc<Credentials>>,
    counters: Mutex<Counters>,
}

impl Session {
    pub(crate) fn new(credentials: Credentials) -> Session {
        Session {
            credentials: RwLock::new(Arc::new(credentials)),
            counters: Mutex::new(Counters::default()),
        }
    }

    pub(crate) fn credentials(&self) -> Arc<Credentials> {
        self.credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn replace_credentials(&self, credentials: Credentials) {
        *self.credentials.write().unwrap_or_else(PoisonError::into_inner) =
            Arc::new(credentials);
    }

    pub(crate) fn rate_limit(&self) -> RateLimit {
        self.counters.lock().unwrap_or_else(PoisonError::into_inner).rate_limit
    }

    pub(crate) fn set_rate_limit(&self, rate_limit: RateLimit) {
        self.counters.lock().unwrap_or_else(PoisonError::into_inner).rate_limit = rate_limit;
    }

    pub(crate) fn timer(&self) -> Option<SessionTimer> {
        self.counters.lock().unwrap_or_else(PoisonError::into_inner).timer
    }

    pub(crate) fn set_timer(&self, timer: Option<SessionTimer>) {
        self.counters.lock().unwrap_or_else(PoisonError::into_inner).timer = timer;
    }
}
