use chrono::{DateTime, Utc};
use tracing::debug;

use super::seed::Seed;
use super::types::{ComposeInput, Folder, Identity, Message, MessageId};

/// Subject given to drafts saved without one.
pub const NO_SUBJECT: &str = "(No Subject)";

/// Canonical mutable state: delivered messages and drafts, plus the
/// signed-in identity. All mutation goes through the methods below; derived
/// views are recomputed from the accessors on demand (see `mail::view`).
///
/// Drafts share the `Message` shape but live in their own collection: every
/// draft row has `folder == Drafts` and `is_read == true`, and no row in
/// `messages` ever carries the Drafts folder. Sending a draft removes it
/// and appends a fresh Sent message.
pub struct Mailbox {
    identity: Identity,
    messages: Vec<Message>,
    drafts: Vec<Message>,
    next_id: u64,
}

impl Mailbox {
    pub fn new(seed: Seed) -> Self {
        let next_id = seed
            .messages
            .iter()
            .chain(seed.drafts.iter())
            .map(|m| m.id.0)
            .max()
            .unwrap_or(0);
        Self {
            identity: seed.user,
            messages: seed.messages,
            drafts: seed.drafts,
            next_id,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn drafts(&self) -> &[Message] {
        &self.drafts
    }

    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn draft(&self, id: MessageId) -> Option<&Message> {
        self.drafts.iter().find(|d| d.id == id)
    }

    fn alloc_id(&mut self) -> MessageId {
        self.next_id += 1;
        MessageId(self.next_id)
    }

    /// Mark a delivered message as read. Sent mail is always-read and is
    /// left untouched; a missing id is a benign no-op (the caller is
    /// display-only). Returns whether state changed.
    pub fn mark_read(&mut self, id: MessageId) -> bool {
        let Some(msg) = self.messages.iter_mut().find(|m| m.id == id) else {
            return false;
        };
        if msg.folder == Folder::Sent || msg.is_read {
            return false;
        }
        msg.is_read = true;
        debug!(id = id.0, "marked read");
        true
    }

    /// Flip the star on a message, returning the new state. Folder, id and
    /// timestamp are untouched. `None` for a missing id.
    pub fn toggle_star(&mut self, id: MessageId) -> Option<bool> {
        let msg = self.messages.iter_mut().find(|m| m.id == id)?;
        msg.is_starred = !msg.is_starred;
        debug!(id = id.0, starred = msg.is_starred, "toggled star");
        Some(msg.is_starred)
    }

    /// Append a new Sent message from the compose buffer. Rejected (nothing
    /// created, `None` returned) when the recipient or subject is empty, so
    /// the caller can keep the buffer open. `now` is the injected logical
    /// instant, never the wall clock.
    pub fn send(&mut self, input: &ComposeInput, now: DateTime<Utc>) -> Option<MessageId> {
        if input.to.is_empty() || input.subject.is_empty() {
            debug!("send rejected: missing recipient or subject");
            return None;
        }
        let id = self.alloc_id();
        self.messages.push(Message {
            id,
            from: self.identity.email.clone(),
            to: input.to.clone(),
            subject: input.subject.clone(),
            body: input.body.clone(),
            timestamp: now,
            is_read: true,
            is_starred: false,
            folder: Folder::Sent,
            has_attachment: false,
        });
        debug!(id = id.0, "message sent");
        Some(id)
    }

    /// Append a new draft. Rejected when to, subject and body are all
    /// empty; an empty subject alone is defaulted to `"(No Subject)"`.
    pub fn save_draft(&mut self, input: &ComposeInput, now: DateTime<Utc>) -> Option<MessageId> {
        if input.is_empty() {
            debug!("save_draft rejected: empty buffer");
            return None;
        }
        let id = self.alloc_id();
        self.drafts.push(Message {
            id,
            from: self.identity.email.clone(),
            to: input.to.clone(),
            subject: draft_subject(&input.subject),
            body: input.body.clone(),
            timestamp: now,
            is_read: true,
            is_starred: false,
            folder: Folder::Drafts,
            has_attachment: false,
        });
        debug!(id = id.0, "draft saved");
        Some(id)
    }

    /// Re-save an existing draft in place (drafts stay editable until
    /// sent). Same rejection rule and subject defaulting as `save_draft`;
    /// the draft keeps its id but takes a fresh timestamp.
    pub fn update_draft(
        &mut self,
        id: MessageId,
        input: &ComposeInput,
        now: DateTime<Utc>,
    ) -> bool {
        if input.is_empty() {
            return false;
        }
        let Some(draft) = self.drafts.iter_mut().find(|d| d.id == id) else {
            return false;
        };
        draft.to = input.to.clone();
        draft.subject = draft_subject(&input.subject);
        draft.body = input.body.clone();
        draft.timestamp = now;
        debug!(id = id.0, "draft updated");
        true
    }

    /// Send a compose buffer that originated from draft `id`. On
    /// acceptance the draft row is removed and the fresh Sent id returned;
    /// on rejection the draft is left as it was.
    pub fn promote_draft(
        &mut self,
        id: MessageId,
        input: &ComposeInput,
        now: DateTime<Utc>,
    ) -> Option<MessageId> {
        let sent = self.send(input, now)?;
        self.drafts.retain(|d| d.id != id);
        debug!(draft = id.0, sent = sent.0, "draft promoted");
        Some(sent)
    }

    /// Move a delivered message to Trash, from any prior folder. Never an
    /// erasure: the row stays in the store and keeps its star. Idempotent;
    /// drafts are not deletable through this operation.
    pub fn soft_delete(&mut self, id: MessageId) -> bool {
        let Some(msg) = self.messages.iter_mut().find(|m| m.id == id) else {
            return false;
        };
        if msg.folder == Folder::Trash {
            return false;
        }
        msg.folder = Folder::Trash;
        debug!(id = id.0, "moved to trash");
        true
    }
}

fn draft_subject(subject: &str) -> String {
    if subject.is_empty() {
        NO_SUBJECT.to_string()
    } else {
        subject.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::view::select_view;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 3, 14, 15, 14, 0).unwrap()
    }

    fn seeded() -> Mailbox {
        Mailbox::new(Seed::load().unwrap())
    }

    fn compose(to: &str, subject: &str, body: &str) -> ComposeInput {
        ComposeInput {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn mark_read_flips_once_and_is_idempotent() {
        let mut mb = seeded();
        assert!(!mb.message(MessageId(1)).unwrap().is_read);
        assert!(mb.mark_read(MessageId(1)));
        assert!(mb.message(MessageId(1)).unwrap().is_read);
        assert!(!mb.mark_read(MessageId(1)));
    }

    #[test]
    fn mark_read_skips_sent_and_missing_ids() {
        let mut mb = seeded();
        assert!(!mb.mark_read(MessageId(4)));
        assert!(!mb.mark_read(MessageId(999)));
    }

    #[test]
    fn toggle_star_is_its_own_inverse() {
        let mut mb = seeded();
        let before = mb.message(MessageId(2)).unwrap().is_starred;
        assert_eq!(mb.toggle_star(MessageId(2)), Some(!before));
        assert_eq!(mb.toggle_star(MessageId(2)), Some(before));
        assert_eq!(mb.toggle_star(MessageId(999)), None);
    }

    #[test]
    fn toggle_star_leaves_identity_alone() {
        let mut mb = seeded();
        let (folder, ts) = {
            let m = mb.message(MessageId(1)).unwrap();
            (m.folder, m.timestamp)
        };
        mb.toggle_star(MessageId(1));
        let m = mb.message(MessageId(1)).unwrap();
        assert_eq!(m.folder, folder);
        assert_eq!(m.timestamp, ts);
    }

    #[test]
    fn send_rejects_empty_recipient_or_subject() {
        let mut mb = seeded();
        let before = mb.messages().len();
        assert_eq!(mb.send(&compose("", "x", "body"), fixed_now()), None);
        assert_eq!(mb.send(&compose("a@b.com", "", "body"), fixed_now()), None);
        assert_eq!(mb.messages().len(), before);
    }

    #[test]
    fn send_appends_exactly_one_sent_message() {
        let mut mb = seeded();
        let before = mb.messages().len();
        let id = mb.send(&compose("a@b.com", "x", "hi"), fixed_now()).unwrap();
        assert_eq!(mb.messages().len(), before + 1);
        let sent = mb.message(id).unwrap();
        assert_eq!(sent.folder, Folder::Sent);
        assert!(sent.is_read);
        assert!(!sent.is_starred);
        assert_eq!(sent.from, "me@matrices.ai");
        assert_eq!(sent.timestamp, fixed_now());
    }

    #[test]
    fn new_ids_are_unique_and_monotonic() {
        let mut mb = seeded();
        let a = mb.send(&compose("a@b.com", "one", ""), fixed_now()).unwrap();
        let b = mb.send(&compose("a@b.com", "two", ""), fixed_now()).unwrap();
        assert!(a.0 > 101, "fresh ids start above the seeded maximum");
        assert!(b > a);
    }

    #[test]
    fn save_draft_rejects_all_empty_buffer() {
        let mut mb = seeded();
        assert_eq!(mb.save_draft(&compose("", "", ""), fixed_now()), None);
        assert_eq!(mb.drafts().len(), 1);
    }

    #[test]
    fn save_draft_defaults_missing_subject() {
        let mut mb = seeded();
        let id = mb.save_draft(&compose("", "", "hi"), fixed_now()).unwrap();
        let draft = mb.draft(id).unwrap();
        assert_eq!(draft.subject, NO_SUBJECT);
        assert_eq!(draft.folder, Folder::Drafts);
        assert!(draft.is_read);
    }

    #[test]
    fn update_draft_edits_in_place() {
        let mut mb = seeded();
        let count = mb.drafts().len();
        assert!(mb.update_draft(MessageId(101), &compose("boss@matrices.ai", "", "done"), fixed_now()));
        assert_eq!(mb.drafts().len(), count);
        let draft = mb.draft(MessageId(101)).unwrap();
        assert_eq!(draft.to, "boss@matrices.ai");
        assert_eq!(draft.subject, NO_SUBJECT);
        assert_eq!(draft.timestamp, fixed_now());
        assert!(!mb.update_draft(MessageId(999), &compose("", "", "x"), fixed_now()));
    }

    #[test]
    fn promote_draft_removes_draft_and_appends_sent() {
        let mut mb = seeded();
        let input = compose("manager@matrices.ai", "Weekly Status Report", "Done.");
        let sent = mb.promote_draft(MessageId(101), &input, fixed_now()).unwrap();
        assert!(mb.draft(MessageId(101)).is_none());
        assert_eq!(mb.message(sent).unwrap().folder, Folder::Sent);
    }

    #[test]
    fn promote_draft_rejection_keeps_the_draft() {
        let mut mb = seeded();
        let input = compose("", "Weekly Status Report", "Done.");
        assert_eq!(mb.promote_draft(MessageId(101), &input, fixed_now()), None);
        assert!(mb.draft(MessageId(101)).is_some());
    }

    #[test]
    fn soft_delete_moves_to_trash_and_is_idempotent() {
        let mut mb = seeded();
        assert!(mb.soft_delete(MessageId(1)));
        assert_eq!(mb.message(MessageId(1)).unwrap().folder, Folder::Trash);
        assert!(!mb.soft_delete(MessageId(1)));
        assert!(!mb.soft_delete(MessageId(999)));
        assert_eq!(mb.messages().len(), 5, "delete never erases a row");
    }

    #[test]
    fn trashed_message_keeps_its_star() {
        let mut mb = seeded();
        mb.soft_delete(MessageId(1));
        assert!(mb.message(MessageId(1)).unwrap().is_starred);
    }

    // The walkthrough from the design notes: starred unread message read,
    // deleted, and still starred while in trash.
    #[test]
    fn read_delete_star_walkthrough() {
        let mut mb = seeded();
        let starred = select_view("starred", mb.messages(), mb.drafts());
        assert!(starred.iter().any(|m| m.id == MessageId(1)));

        mb.mark_read(MessageId(1));
        let inbox = select_view("inbox", mb.messages(), mb.drafts());
        assert!(inbox.iter().find(|m| m.id == MessageId(1)).unwrap().is_read);

        mb.soft_delete(MessageId(1));
        let trash = select_view("trash", mb.messages(), mb.drafts());
        assert!(trash.iter().any(|m| m.id == MessageId(1)));
        let starred = select_view("starred", mb.messages(), mb.drafts());
        assert!(starred.iter().any(|m| m.id == MessageId(1)));
    }
}
