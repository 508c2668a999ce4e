use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub stored_payments: usize,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
}
