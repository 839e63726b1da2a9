// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the current instant. Services take this as a port so audit
/// timestamps and the customer restore window can be pinned in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
