// src/domain/activity/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{ActivityAction, ActivityLog, ActivityLogId, ActivityType, NewActivityLog};
pub use repository::{ActivityLogEntry, ActivityLogFilter, ActivityLogRepository};
