use std::sync::Arc;

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;

use bmail::mail::{
    visible_messages, ComposeInput, Mailbox, MailView, Message, MessageId,
};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    List,
    Search,
    Reader,
    Compose,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pane {
    List,
    Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField {
    #[default]
    To,
    Subject,
    Body,
}

impl ComposeField {
    pub fn next(self) -> Self {
        match self {
            Self::To => Self::Subject,
            Self::Subject => Self::Body,
            Self::Body => Self::To,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::To => Self::Body,
            Self::Subject => Self::To,
            Self::Body => Self::Subject,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComposeState {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub field: ComposeField,
    /// Set when the buffer was opened from an existing draft; send then
    /// promotes that draft and save re-saves it in place.
    pub draft_id: Option<MessageId>,
}

impl ComposeState {
    pub fn input(&self) -> ComposeInput {
        ComposeInput {
            to: self.to.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
        }
    }
}

pub struct App {
    pub config: Arc<Config>,
    pub mailbox: Mailbox,
    /// Frozen logical time from the seed; stamps sends/saves and anchors
    /// relative time labels.
    pub now: DateTime<Utc>,
    pub view: View,
    pub mail_view: MailView,
    /// Ids of the currently visible list, already filtered and sorted.
    pub visible: Vec<MessageId>,
    pub list_state: ListState,
    pub search_query: String,
    pub reader_id: Option<MessageId>,
    pub reader_scroll: u16,
    pub compose: ComposeState,
    pub focused_pane: Pane,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(mailbox: Mailbox, now: DateTime<Utc>, config: Arc<Config>) -> Self {
        let mut app = Self {
            config,
            mailbox,
            now,
            view: View::List,
            mail_view: MailView::Inbox,
            visible: Vec::new(),
            list_state: ListState::default(),
            search_query: String::new(),
            reader_id: None,
            reader_scroll: 0,
            compose: ComposeState::default(),
            focused_pane: Pane::List,
            should_quit: false,
            status_message: None,
        };
        app.refresh_visible();
        app
    }

    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Recompute the visible id list through the view engine and keep the
    /// selection in range. Called after every store mutation and every
    /// selector change; nothing derived is cached across calls.
    pub fn refresh_visible(&mut self) {
        self.visible = visible_messages(
            self.mail_view.id(),
            self.mailbox.messages(),
            self.mailbox.drafts(),
            &self.search_query,
        )
        .iter()
        .map(|m| m.id)
        .collect();

        match self.list_state.selected() {
            Some(selected) if selected >= self.visible.len() => {
                if self.visible.is_empty() {
                    self.list_state.select(None);
                } else {
                    self.list_state.select(Some(self.visible.len() - 1));
                }
            }
            None if !self.visible.is_empty() => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    pub fn selected_id(&self) -> Option<MessageId> {
        self.list_state
            .selected()
            .and_then(|i| self.visible.get(i))
            .copied()
    }

    /// Resolve an id against whichever collection the active view draws
    /// from.
    pub fn lookup(&self, id: MessageId) -> Option<&Message> {
        if self.mail_view == MailView::Drafts {
            self.mailbox.draft(id)
        } else {
            self.mailbox.message(id)
        }
    }

    pub fn selected_message(&self) -> Option<&Message> {
        self.selected_id().and_then(|id| self.lookup(id))
    }

    pub fn reader_message(&self) -> Option<&Message> {
        self.reader_id.and_then(|id| self.mailbox.message(id))
    }

    pub fn next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let max = self.visible.len() - 1;
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(max),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.reader_scroll = 0;
    }

    pub fn previous(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.reader_scroll = 0;
    }

    pub fn set_mail_view(&mut self, view: MailView) {
        if self.mail_view == view {
            return;
        }
        self.mail_view = view;
        self.list_state.select(None);
        self.refresh_visible();
    }

    pub fn cycle_mail_view(&mut self) {
        self.set_mail_view(self.mail_view.next());
    }

    pub fn start_search(&mut self) {
        self.search_query.clear();
        self.refresh_visible();
        self.view = View::Search;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.refresh_visible();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.refresh_visible();
    }

    pub fn confirm_search(&mut self) {
        self.view = View::List;
    }

    pub fn cancel_search(&mut self) {
        self.search_query.clear();
        self.refresh_visible();
        self.view = View::List;
    }

    /// Open the selected item: drafts re-enter compose, everything else
    /// goes to the reader and is marked read (the store skips sent mail
    /// and missing ids on its own).
    pub fn open_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.mail_view == MailView::Drafts {
            self.open_draft(id);
            return;
        }
        self.mailbox.mark_read(id);
        self.reader_id = Some(id);
        self.reader_scroll = 0;
        self.view = View::Reader;
        self.refresh_visible();
    }

    fn open_draft(&mut self, id: MessageId) {
        let Some(draft) = self.mailbox.draft(id) else {
            return;
        };
        self.compose = ComposeState {
            to: draft.to.clone(),
            subject: draft.subject.clone(),
            body: draft.body.clone(),
            field: ComposeField::To,
            draft_id: Some(id),
        };
        self.view = View::Compose;
    }

    pub fn toggle_star_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        match self.mailbox.toggle_star(id) {
            Some(true) => self.set_status("Starred"),
            Some(false) => self.set_status("Unstarred"),
            None => {}
        }
        self.refresh_visible();
    }

    pub fn toggle_star_reader(&mut self) {
        if let Some(id) = self.reader_id {
            match self.mailbox.toggle_star(id) {
                Some(true) => self.set_status("Starred"),
                Some(false) => self.set_status("Unstarred"),
                None => {}
            }
            self.refresh_visible();
        }
    }

    pub fn delete_selected(&mut self) {
        if self.mail_view == MailView::Drafts {
            self.set_status("Drafts are removed when sent");
            return;
        }
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.mailbox.soft_delete(id) {
            self.set_status("Moved to Trash");
        }
        self.refresh_visible();
    }

    pub fn delete_reader(&mut self) {
        if let Some(id) = self.reader_id.take() {
            if self.mailbox.soft_delete(id) {
                self.set_status("Moved to Trash");
            }
        }
        self.view = View::List;
        self.refresh_visible();
    }

    pub fn start_compose(&mut self) {
        self.compose = ComposeState::default();
        self.view = View::Compose;
    }

    /// Leaving compose without saving abandons the buffer; nothing is
    /// persisted.
    pub fn discard_compose(&mut self) {
        self.compose = ComposeState::default();
        self.view = View::List;
        self.set_status("Draft discarded");
    }

    pub fn send_compose(&mut self) {
        let input = self.compose.input();
        let outcome = match self.compose.draft_id {
            Some(draft_id) => self.mailbox.promote_draft(draft_id, &input, self.now),
            None => self.mailbox.send(&input, self.now),
        };
        match outcome {
            Some(_) => {
                self.compose = ComposeState::default();
                self.view = View::List;
                self.set_status("Message sent");
                self.refresh_visible();
            }
            None => self.set_status("Add a recipient and a subject first"),
        }
    }

    pub fn save_compose_draft(&mut self) {
        let input = self.compose.input();
        let saved = match self.compose.draft_id {
            Some(draft_id) => self.mailbox.update_draft(draft_id, &input, self.now),
            None => self.mailbox.save_draft(&input, self.now).is_some(),
        };
        if saved {
            self.compose = ComposeState::default();
            self.view = View::List;
            self.set_status("Draft saved");
            self.refresh_visible();
        } else {
            self.set_status("Nothing to save");
        }
    }

    pub fn compose_next_field(&mut self) {
        self.compose.field = self.compose.field.next();
    }

    pub fn compose_prev_field(&mut self) {
        self.compose.field = self.compose.field.previous();
    }

    pub fn compose_char(&mut self, c: char) {
        match self.compose.field {
            ComposeField::To => self.compose.to.push(c),
            ComposeField::Subject => self.compose.subject.push(c),
            ComposeField::Body => self.compose.body.push(c),
        }
    }

    pub fn compose_backspace(&mut self) {
        match self.compose.field {
            ComposeField::To => self.compose.to.pop(),
            ComposeField::Subject => self.compose.subject.pop(),
            ComposeField::Body => self.compose.body.pop(),
        };
    }

    /// Enter advances through the header fields and inserts newlines in
    /// the body.
    pub fn compose_enter(&mut self) {
        match self.compose.field {
            ComposeField::Body => self.compose.body.push('\n'),
            _ => self.compose.field = self.compose.field.next(),
        }
    }

    pub fn reader_scroll_down(&mut self) {
        self.reader_scroll = self.reader_scroll.saturating_add(3);
    }

    pub fn reader_scroll_up(&mut self) {
        self.reader_scroll = self.reader_scroll.saturating_sub(3);
    }
}
