//! Injectable id generation and clock
//!
//! Block ids, todo-item ids and timestamps come from these seams so
//! embedding applications and tests can pin them.

use chrono::{DateTime, Utc};

/// Source of opaque unique identifiers.
pub trait IdProvider: Send + Sync {
    fn new_id(&self) -> String;
}

/// Source of timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Default id provider backed by UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdProvider for UuidIds {
    fn new_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Default clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
