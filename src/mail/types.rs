use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique message identifier. Seeded ids come from the fixture; the store
/// allocates new ones monotonically above the seeded maximum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Coarse mail category. Every message carries exactly one; "starred" is a
/// cross-folder filter, not a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    Inbox,
    Sent,
    Drafts,
    Trash,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Message {
    pub id: MessageId,
    pub from: String,
    pub to: String,
    pub subject: String,
    /// Plain text, may contain embedded newlines.
    pub body: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_starred: bool,
    pub folder: Folder,
    #[serde(default)]
    pub has_attachment: bool,
}

impl Message {
    /// First line of the body, for one-line previews.
    pub fn preview_line(&self) -> &str {
        self.body.lines().next().unwrap_or("")
    }
}

/// The signed-in user, supplied by the seed fixture.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

/// Contents of the compose buffer handed to send/save-draft.
#[derive(Debug, Clone, Default)]
pub struct ComposeInput {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ComposeInput {
    pub fn is_empty(&self) -> bool {
        self.to.is_empty() && self.subject.is_empty() && self.body.is_empty()
    }
}
