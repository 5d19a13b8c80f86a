//! Pure derivation of "what the user sees" from store contents plus the
//! UI's selector state. Nothing here mutates or caches; callers recompute
//! after every store operation.

use super::types::{Folder, Message};

/// View selector shown in the sidebar. Four of these are folders; Starred
/// is a cross-folder predicate over the full message collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailView {
    Inbox,
    Starred,
    Sent,
    Drafts,
    Trash,
}

impl MailView {
    /// Sidebar order.
    pub const ALL: [MailView; 5] = [
        MailView::Inbox,
        MailView::Starred,
        MailView::Sent,
        MailView::Drafts,
        MailView::Trash,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "inbox" => Some(Self::Inbox),
            "starred" => Some(Self::Starred),
            "sent" => Some(Self::Sent),
            "drafts" => Some(Self::Drafts),
            "trash" => Some(Self::Trash),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Starred => "starred",
            Self::Sent => "sent",
            Self::Drafts => "drafts",
            Self::Trash => "trash",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Starred => "Starred",
            Self::Sent => "Sent",
            Self::Drafts => "Drafts",
            Self::Trash => "Trash",
        }
    }

    /// Sent and Drafts rows are self-authored, so the list column shows
    /// the recipient instead of the sender.
    pub fn shows_recipient(self) -> bool {
        matches!(self, Self::Sent | Self::Drafts)
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|v| *v == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Base candidate set for a view identifier. Unknown identifiers yield an
/// empty list, never an error: the UI governs which identifiers exist.
pub fn select_view<'a>(
    view: &str,
    messages: &'a [Message],
    drafts: &'a [Message],
) -> Vec<&'a Message> {
    match MailView::from_id(view) {
        Some(MailView::Inbox) => by_folder(messages, Folder::Inbox),
        Some(MailView::Sent) => by_folder(messages, Folder::Sent),
        Some(MailView::Trash) => by_folder(messages, Folder::Trash),
        Some(MailView::Starred) => messages.iter().filter(|m| m.is_starred).collect(),
        Some(MailView::Drafts) => drafts.iter().collect(),
        None => Vec::new(),
    }
}

fn by_folder(messages: &[Message], folder: Folder) -> Vec<&Message> {
    messages.iter().filter(|m| m.folder == folder).collect()
}

/// Keep items whose subject, sender or body contains the query,
/// case-insensitively. Raw substring match, no tokenizing. An empty query
/// passes everything through.
pub fn apply_search<'a>(items: Vec<&'a Message>, query: &str) -> Vec<&'a Message> {
    if query.is_empty() {
        return items;
    }
    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|m| {
            m.subject.to_lowercase().contains(&needle)
                || m.from.to_lowercase().contains(&needle)
                || m.body.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Newest first. The sort is stable so items sharing a timestamp keep
/// their original relative order.
pub fn sort_by_recency(items: &mut [&Message]) {
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// The full select → search → sort composition the UI renders after every
/// change.
pub fn visible_messages<'a>(
    view: &str,
    messages: &'a [Message],
    drafts: &'a [Message],
    query: &str,
) -> Vec<&'a Message> {
    let mut items = apply_search(select_view(view, messages, drafts), query);
    sort_by_recency(&mut items);
    items
}

/// Per-view counts, recomputed from source truth on every render. Both
/// totals and unread counts are exposed so the caller can pick either for
/// its badge.
#[derive(Debug, Clone)]
pub struct FolderSummary {
    pub view: MailView,
    pub display_name: &'static str,
    pub total: usize,
    pub unread: usize,
}

pub fn folder_counts(messages: &[Message], drafts: &[Message]) -> Vec<FolderSummary> {
    MailView::ALL
        .iter()
        .map(|&view| {
            let items = select_view(view.id(), messages, drafts);
            FolderSummary {
                view,
                display_name: view.display_name(),
                total: items.len(),
                unread: items.iter().filter(|m| !m.is_read).count(),
            }
        })
        .collect()
}
