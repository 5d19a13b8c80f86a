use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use bmail::mail::{FolderSummary, Identity, MailView};

use crate::config::ThemeConfig;

pub fn render_sidebar(
    f: &mut Frame,
    area: Rect,
    counts: &[FolderSummary],
    active: MailView,
    user: &Identity,
    theme: &ThemeConfig,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    // Name column sized to the widest folder, count right-aligned.
    let name_width = area.width.saturating_sub(8) as usize;
    let items: Vec<ListItem> = counts
        .iter()
        .map(|c| {
            let is_active = c.view == active;
            let row_style = if is_active {
                Style::default()
                    .fg(theme.primary())
                    .bg(theme.selected_bg())
                    .add_modifier(Modifier::BOLD)
            } else if c.view == MailView::Inbox && c.unread > 0 {
                Style::default().fg(theme.unread()).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg_subtle())
            };
            let count = if c.total > 0 {
                format!("{:>3}", c.total)
            } else {
                "   ".to_string()
            };
            let line = Line::from(vec![
                Span::styled(format!(" {:<nw$}", c.display_name, nw = name_width), row_style),
                Span::styled(count, row_style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .title("bmail"),
    );
    f.render_widget(list, chunks[0]);

    let identity = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", user.name), Style::default().fg(theme.fg())),
        Span::styled(format!("<{}>", user.email), Style::default().fg(theme.fg_muted())),
    ]))
    .style(Style::default().bg(theme.bg_panel()));
    f.render_widget(identity, chunks[1]);
}
