//! Notification kinds.
//!
//! The kind is stored as TEXT in the `notifications.kind` column. The four
//! reply/mention kinds are subject to block filtering; anything else is a
//! system kind, carried through [`NotificationKind::Other`] so that kinds
//! added by other parts of the platform round-trip without code changes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind string for a reply to one of the recipient's posts.
pub const KIND_POST_REPLY: &str = "POST_REPLY";

/// Kind string for a reply to one of the recipient's comments.
pub const KIND_COMMENT_REPLY: &str = "COMMENT_REPLY";

/// Kind string for a mention of the recipient in a post.
pub const KIND_POST_MENTION: &str = "POST_MENTION";

/// Kind string for a mention of the recipient in a comment.
pub const KIND_COMMENT_MENTION: &str = "COMMENT_MENTION";

/// Kinds that a recipient's block list can hide.
///
/// System kinds (moderation notices, announcements, ...) are never hidden
/// by blocking.
pub const BLOCKABLE_KINDS: [&str; 4] = [
    KIND_POST_REPLY,
    KIND_COMMENT_REPLY,
    KIND_POST_MENTION,
    KIND_COMMENT_MENTION,
];

/// The kind of a notification.
///
/// Recognized kinds get dedicated variants; everything else is preserved
/// verbatim in [`Other`](NotificationKind::Other). Matching on this enum
/// must always carry a default arm for `Other` so unknown kinds degrade
/// gracefully instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationKind {
    PostReply,
    CommentReply,
    PostMention,
    CommentMention,
    /// A system kind with no dedicated handling.
    Other(String),
}

impl NotificationKind {
    /// The wire/database representation of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            NotificationKind::PostReply => KIND_POST_REPLY,
            NotificationKind::CommentReply => KIND_COMMENT_REPLY,
            NotificationKind::PostMention => KIND_POST_MENTION,
            NotificationKind::CommentMention => KIND_COMMENT_MENTION,
            NotificationKind::Other(name) => name,
        }
    }

    /// Whether a recipient's block list can hide this kind.
    pub fn is_blockable(&self) -> bool {
        BLOCKABLE_KINDS.contains(&self.as_str())
    }
}

impl From<&str> for NotificationKind {
    fn from(value: &str) -> Self {
        match value {
            KIND_POST_REPLY => NotificationKind::PostReply,
            KIND_COMMENT_REPLY => NotificationKind::CommentReply,
            KIND_POST_MENTION => NotificationKind::PostMention,
            KIND_COMMENT_MENTION => NotificationKind::CommentMention,
            other => NotificationKind::Other(other.to_string()),
        }
    }
}

impl From<String> for NotificationKind {
    fn from(value: String) -> Self {
        NotificationKind::from(value.as_str())
    }
}

impl From<NotificationKind> for String {
    fn from(kind: NotificationKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_kinds_round_trip() {
        for name in BLOCKABLE_KINDS {
            let kind = NotificationKind::from(name);
            assert_eq!(kind.as_str(), name);
            assert!(!matches!(kind, NotificationKind::Other(_)));
        }
    }

    #[test]
    fn unknown_kind_round_trips_verbatim() {
        let kind = NotificationKind::from("SUB_BANNED");
        assert_eq!(kind, NotificationKind::Other("SUB_BANNED".to_string()));
        assert_eq!(kind.to_string(), "SUB_BANNED");
    }

    #[test]
    fn only_reply_and_mention_kinds_are_blockable() {
        assert!(NotificationKind::PostReply.is_blockable());
        assert!(NotificationKind::CommentReply.is_blockable());
        assert!(NotificationKind::PostMention.is_blockable());
        assert!(NotificationKind::CommentMention.is_blockable());
        assert!(!NotificationKind::Other("SUB_BANNED".to_string()).is_blockable());
    }
}
