//! Fixed-window rate limiter keyed by client

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Above this many tracked clients, expired windows are pruned on the next check
const PRUNE_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

#[derive(Debug)]
pub struct RateLimiter {
    max: u32,
    window: Duration,
    clients: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    /// `max == 0` disables limiting
    pub fn new(max: u32, window: Duration) -> Self {
        Self {
            max,
            window,
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.max > 0
    }

    /// Counts one request for `client`. On rejection returns the seconds
    /// until the client's window resets (at least 1).
    pub async fn check(&self, client: &str, now: Instant) -> Result<(), u64> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut clients = self.clients.lock().await;
        if clients.len() > PRUNE_THRESHOLD {
            clients.retain(|_, w| now.duration_since(w.started) < self.window);
        }

        let window = clients.entry(client.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });
        let elapsed = now.duration_since(window.started);
        if elapsed >= self.window {
            *window = Window {
                started: now,
                count: 0,
            };
        }

        if window.count >= self.max {
            let remaining = self.window.saturating_sub(now.duration_since(window.started));
            return Err(remaining.as_secs().max(1));
        }
        window.count += 1;
        Ok(())
    }
}
