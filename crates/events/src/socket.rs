//! In-process live-socket publish hub backed by a `tokio::sync::broadcast`
//! channel.
//!
//! [`SocketBus`] is the seam between the notification engine and whatever
//! socket layer the surrounding application runs: the engine publishes
//! [`SocketEvent`]s addressed to a per-user channel, and the socket layer
//! subscribes and forwards matching events to connected clients. It is
//! designed to be shared via `Arc<SocketBus>`.

use quorum_core::types::DbId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event name for unread-count updates.
pub const EVENT_NOTIFICATION: &str = "notification";

/// The per-user channel name for socket delivery.
pub fn user_channel(uid: DbId) -> String {
    format!("user:{uid}")
}

// ---------------------------------------------------------------------------
// SocketEvent
// ---------------------------------------------------------------------------

/// A single event published toward the live-socket layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocketEvent {
    /// Delivery channel, e.g. `user:42`.
    pub channel: String,

    /// Event name, e.g. [`EVENT_NOTIFICATION`].
    pub event: String,

    /// Free-form JSON payload.
    pub payload: serde_json::Value,
}

// ---------------------------------------------------------------------------
// SocketBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out hub for socket events.
///
/// Wraps a [`broadcast::Sender`] so that any number of socket-layer
/// subscribers can independently receive every published event. Publishing
/// is fire-and-forget: with zero subscribers the event is silently dropped,
/// and the persisted notification row remains the durable record.
pub struct SocketBus {
    sender: broadcast::Sender<SocketEvent>,
}

impl SocketBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event on a channel.
    pub fn publish(&self, channel: String, event: &str, payload: serde_json::Value) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(SocketEvent {
            channel,
            event: event.to_string(),
            payload,
        });
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<SocketEvent> {
        self.sender.subscribe()
    }
}

impl Default for SocketBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
