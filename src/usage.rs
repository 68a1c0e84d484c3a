use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::types::common::UserTier;

/// Snapshot of a client's usage statistics
///
/// Counters accumulate for the lifetime of the [`Client`](crate::Client)
/// instance and are never reset automatically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageStats {
    /// Number of successfully completed requests
    pub request_count: u64,
    /// Accumulated cost reported by the server, in dollars
    pub total_cost: f64,
    /// Configured subscription tier
    pub user_tier: UserTier,
    /// Configured API base URL
    pub base_url: String,
}

#[derive(Debug, Default)]
struct Counters {
    request_count: u64,
    total_cost: f64,
}

/// Mutex-guarded usage counters owned by one client instance
///
/// Mutated only on the executor's successful-completion path; reads and
/// writes share the same lock so snapshots are always consistent.
#[derive(Debug, Default)]
pub(crate) struct UsageTracker {
    counters: Mutex<Counters>,
}

impl UsageTracker {
    /// Records one successful request and its server-reported cost
    pub(crate) fn record(&self, cost: f64) {
        let mut c = self
            .counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        c.request_count += 1;
        c.total_cost += cost;
    }

    pub(crate) fn snapshot(&self, user_tier: UserTier, base_url: &str) -> UsageStats {
        let c = self
            .counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        UsageStats {
            request_count: c.request_count,
            total_cost: c.total_cost,
            user_tier,
            base_url: base_url.to_owned(),
        }
    }
}
