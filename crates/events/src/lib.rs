//! Delivery transports for the quorum notification subsystem.
//!
//! The engine treats every transport here as an opaque, best-effort
//! sender: the persisted notification row is the durable source of truth,
//! and a transport failure is logged and swallowed, never rolled back.
//!
//! - [`SocketBus`] — in-process publish hub for per-user live-socket
//!   events, backed by `tokio::sync::broadcast`.
//! - [`PushTransport`] / [`HttpPush`] — topic-addressed push notification
//!   sender over HTTP with a bounded request timeout.
//! - [`EmailQueue`] — enqueue interface in front of a background worker
//!   that forwards notifications as plain-text mail via SMTP.

pub mod email;
pub mod push;
pub mod queue;
pub mod socket;

pub use email::{EmailConfig, EmailDelivery, EmailError};
pub use push::{HttpPush, PushError, PushMessage, PushTransport};
pub use queue::{EmailJob, EmailQueue};
pub use socket::{SocketBus, SocketEvent};
