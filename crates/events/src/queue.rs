//! Background email-forwarding queue.
//!
//! [`EmailQueue`] is the enqueue interface the notification engine sees;
//! the actual SMTP sending happens on a separately spawned worker task
//! that drains the queue. The worker is started once at startup, gated by
//! the forwarded-email site flag, and shuts down via a
//! [`CancellationToken`]. A failed send is logged and dropped — the
//! notification row already persisted is the durable record.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::email::EmailDelivery;

// ---------------------------------------------------------------------------
// EmailJob
// ---------------------------------------------------------------------------

/// One forwarded notification waiting to be mailed.
#[derive(Debug, Clone)]
pub struct EmailJob {
    /// Recipient address.
    pub to: String,
    /// Mail subject line.
    pub subject: String,
    /// Plain-text mail body.
    pub body: String,
}

// ---------------------------------------------------------------------------
// EmailQueue
// ---------------------------------------------------------------------------

/// Enqueue handle for the email-forwarding worker.
///
/// Cheap to clone; all clones feed the same worker.
#[derive(Clone)]
pub struct EmailQueue {
    tx: mpsc::UnboundedSender<EmailJob>,
}

impl EmailQueue {
    /// Spawn the worker task and return the enqueue handle.
    ///
    /// The worker exits when `cancel` is cancelled or every handle has
    /// been dropped.
    pub fn start(delivery: EmailDelivery, cancel: CancellationToken) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(rx, delivery, cancel));
        Self { tx }
    }

    /// Queue one email for background delivery.
    ///
    /// Never blocks. If the worker has already shut down the job is
    /// dropped with a warning.
    pub fn enqueue(&self, job: EmailJob) {
        if self.tx.send(job).is_err() {
            tracing::warn!("Email queue worker stopped, dropping forwarded notification");
        }
    }
}

/// Worker loop: drain jobs until cancellation or channel close.
async fn run(
    mut rx: mpsc::UnboundedReceiver<EmailJob>,
    delivery: EmailDelivery,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Email queue cancelled");
                break;
            }
            job = rx.recv() => {
                match job {
                    Some(job) => {
                        if let Err(e) = delivery.deliver(&job.to, &job.subject, &job.body).await {
                            tracing::error!(
                                to = %job.to,
                                error = %e,
                                "Failed to send forwarded notification email"
                            );
                        }
                    }
                    None => {
                        tracing::info!("All email queue handles dropped, worker shutting down");
                        break;
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
