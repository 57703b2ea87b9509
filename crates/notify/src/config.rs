//! Notification engine configuration.

use quorum_events::push::DEFAULT_ENDPOINT;

/// Configuration consumed by the dispatcher, loaded once at startup and
/// treated as immutable thereafter.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// API key for the push service. Absent key means push delivery is a
    /// no-op.
    pub push_api_key: Option<String>,
    /// Push service endpoint URL.
    pub push_endpoint: String,
    /// Whether forwarded email notifications are allowed site-wide.
    pub email_forwarding: bool,
    /// Display prefix for sub names in notification copy (e.g. `s` as in
    /// `s/rust`).
    pub sub_prefix: String,
    /// URL of the site icon used as the push badge.
    pub site_icon_url: String,
}

impl NotifyConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default               |
    /// |---------------------|-----------------------|
    /// | `PUSH_API_KEY`      | — (push disabled)     |
    /// | `PUSH_ENDPOINT`     | FCM send endpoint     |
    /// | `EMAIL_FORWARDING`  | `false`               |
    /// | `SUB_PREFIX`        | `s`                   |
    /// | `SITE_ICON_URL`     | `/static/icon.png`    |
    pub fn from_env() -> Self {
        Self {
            push_api_key: std::env::var("PUSH_API_KEY").ok().filter(|k| !k.is_empty()),
            push_endpoint: std::env::var("PUSH_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            email_forwarding: std::env::var("EMAIL_FORWARDING")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            sub_prefix: std::env::var("SUB_PREFIX").unwrap_or_else(|_| "s".to_string()),
            site_icon_url: std::env::var("SITE_ICON_URL")
                .unwrap_or_else(|_| "/static/icon.png".to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
