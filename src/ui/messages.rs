use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use bmail::mail::{relative_label, MailView, Message};

use crate::config::ThemeConfig;

#[allow(clippy::too_many_arguments)]
pub fn render_messages(
    f: &mut Frame,
    area: Rect,
    messages: &[&Message],
    state: &mut ListState,
    view: MailView,
    title: &str,
    now: DateTime<Utc>,
    focused: bool,
    theme: &ThemeConfig,
    time_width: usize,
    from_width: usize,
) {
    // Available width: area minus borders (2) minus highlight symbol (2).
    // Fixed columns: markers (3) + spacing, time, from/to, subject gets
    // the rest.
    let avail_width = area.width.saturating_sub(4) as usize;
    let from_width = from_width.min(avail_width.saturating_sub(time_width + 6) / 2);
    let subject_width = avail_width.saturating_sub(time_width + from_width + 6);

    let items: Vec<ListItem> = messages
        .iter()
        .map(|m| {
            let unread = if m.is_read { " " } else { "*" };
            let star = if m.is_starred { "★" } else { " " };
            let attach = if m.has_attachment { "@" } else { " " };
            // Sent and drafts rows are self-authored; show who they go to.
            let who = if view.shows_recipient() { &m.to } else { &m.from };
            let time = relative_label(m.timestamp, now);

            let row_style = if m.is_read {
                Style::default().fg(theme.fg_subtle())
            } else {
                Style::default().fg(theme.fg()).add_modifier(Modifier::BOLD)
            };
            let mut spans = vec![
                Span::styled(unread, Style::default().fg(theme.unread())),
                Span::styled(star, Style::default().fg(theme.starred())),
                Span::styled(attach, Style::default().fg(theme.attachment())),
                Span::raw(" "),
                Span::styled(
                    format!(
                        "{} {} ",
                        truncate(&time, time_width),
                        truncate(who, from_width),
                    ),
                    row_style,
                ),
                Span::styled(truncate(&m.subject, subject_width), row_style),
            ];
            // Dim first-line body preview in whatever room the subject
            // leaves over.
            let leftover = subject_width.saturating_sub(m.subject.chars().count() + 2);
            if leftover >= 4 {
                spans.pop();
                spans.push(Span::styled(m.subject.clone(), row_style));
                spans.push(Span::styled(
                    format!("  {}", truncate(m.preview_line(), leftover)),
                    Style::default().fg(theme.fg_muted()),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(theme.border_active())
    } else {
        Style::default().fg(theme.border())
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title.to_string()),
        )
        .highlight_style(
            Style::default()
                .bg(theme.selected_bg())
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, state);
}

/// Pad or cut `s` to exactly `max` display characters.
fn truncate(s: &str, max: usize) -> String {
    if max < 4 {
        return s.chars().take(max).collect();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        format!("{:width$}", s, width = max)
    } else {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    }
}
