//! Shared domain types for the quorum notification subsystem.
//!
//! This crate has no I/O dependencies; it holds the primitive ID and
//! timestamp aliases plus the [`NotificationKind`](notification::NotificationKind)
//! enumeration shared by the persistence layer, the transports, and the
//! engine.

pub mod notification;
pub mod types;
