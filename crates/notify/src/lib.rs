//! The quorum notification engine.
//!
//! [`NotificationEngine`] is the core orchestrator: it records
//! notifications, serves the paginated enriched history, reconciles
//! read/expiry state, and drives multi-channel dispatch. Delivery is
//! best-effort — the persisted row is authoritative, and the
//! [`BlockFilter`] decides at send time whether dispatch is suppressed.
//!
//! The engine is constructed once at startup with its transports injected
//! (see [`Dispatcher`]) and shared by reference across request workers; it
//! holds no mutable state of its own, all mutations being set-based store
//! operations.

pub mod block;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod i18n;

pub use block::BlockFilter;
pub use config::NotifyConfig;
pub use dispatch::{Dispatcher, PushContext};
pub use engine::{NotificationEngine, SendNotification};
