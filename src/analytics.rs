//! Request counters for the stats endpoint

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;

#[derive(Debug)]
pub struct RequestCounters {
    started_at: DateTime<Utc>,
    total: AtomicU64,
    by_endpoint: Mutex<BTreeMap<String, u64>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterSnapshot {
    pub started_at: DateTime<Utc>,
    pub uptime_secs: i64,
    pub total_requests: u64,
    pub by_endpoint: BTreeMap<String, u64>,
}

impl Default for RequestCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestCounters {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            total: AtomicU64::new(0),
            by_endpoint: Mutex::new(BTreeMap::new()),
        }
    }

    /// Count one request against `endpoint` (e.g. `GET /api/hiit`)
    pub async fn record(&self, endpoint: &str) {
        self.total.fetch_add(1, Ordering::Relaxed);
        let mut by_endpoint = self.by_endpoint.lock().await;
        *by_endpoint.entry(endpoint.to_string()).or_insert(0) += 1;
    }

    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    pub async fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            started_at: self.started_at,
            uptime_secs: (Utc::now() - self.started_at).num_seconds(),
            total_requests: self.total(),
            by_endpoint: self.by_endpoint.lock().await.clone(),
        }
    }
}
