mod app;
mod config;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bmail::mail::{folder_counts, Mailbox, MailView, Message, Seed};

use app::{App, Pane, View};
use config::Config;
use ui::{render_compose, render_help, render_messages, render_reader, render_sidebar};

fn main() -> Result<()> {
    init_tracing();

    let config = Arc::new(Config::load());
    let seed = Seed::load()?;
    let now = seed.now;
    let mailbox = Mailbox::new(seed);
    info!(user = %mailbox.identity().email, "session started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(mailbox, now, config);

    // Main loop
    loop {
        terminal.draw(|f| render(&mut app, f))?;

        // Poll with timeout so we redraw on resize even without focus
        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                app.clear_status();
                match app.view {
                    View::List => match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Esc => {
                            if app.search_query.is_empty() {
                                app.focused_pane = Pane::List;
                            } else {
                                app.cancel_search();
                            }
                        }
                        KeyCode::Char('h') | KeyCode::Left => {
                            app.focused_pane = Pane::List;
                        }
                        KeyCode::Char('l') | KeyCode::Right => {
                            app.focused_pane = Pane::Preview;
                        }
                        KeyCode::Char('j') | KeyCode::Down => match app.focused_pane {
                            Pane::List => app.next(),
                            Pane::Preview => app.reader_scroll_down(),
                        },
                        KeyCode::Char('k') | KeyCode::Up => match app.focused_pane {
                            Pane::List => app.previous(),
                            Pane::Preview => app.reader_scroll_up(),
                        },
                        KeyCode::Enter => app.open_selected(),
                        KeyCode::Char('s') => app.toggle_star_selected(),
                        KeyCode::Char('d') => app.delete_selected(),
                        KeyCode::Char('c') => app.start_compose(),
                        KeyCode::Char('/') => app.start_search(),
                        KeyCode::Tab => app.cycle_mail_view(),
                        KeyCode::Char(c @ '1'..='5') => {
                            let idx = c as usize - '1' as usize;
                            app.set_mail_view(MailView::ALL[idx]);
                        }
                        _ => {}
                    },
                    View::Search => match key.code {
                        KeyCode::Esc => app.cancel_search(),
                        KeyCode::Enter => app.confirm_search(),
                        KeyCode::Backspace => app.pop_search_char(),
                        KeyCode::Down | KeyCode::Tab => app.next(),
                        KeyCode::Up => app.previous(),
                        KeyCode::Char(c) => app.push_search_char(c),
                        _ => {}
                    },
                    View::Reader => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.view = View::List;
                        }
                        KeyCode::Char('j') | KeyCode::Down => app.reader_scroll_down(),
                        KeyCode::Char('k') | KeyCode::Up => app.reader_scroll_up(),
                        KeyCode::Char('s') => app.toggle_star_reader(),
                        KeyCode::Char('d') => app.delete_reader(),
                        _ => {}
                    },
                    View::Compose => match (key.code, key.modifiers) {
                        (KeyCode::Esc, _) => app.discard_compose(),
                        (KeyCode::Char('s'), KeyModifiers::CONTROL) => app.send_compose(),
                        (KeyCode::Char('d'), KeyModifiers::CONTROL) => app.save_compose_draft(),
                        (KeyCode::Tab, _) => app.compose_next_field(),
                        (KeyCode::BackTab, _) => app.compose_prev_field(),
                        (KeyCode::Enter, _) => app.compose_enter(),
                        (KeyCode::Backspace, _) => app.compose_backspace(),
                        (KeyCode::Char(c), _) => app.compose_char(c),
                        _ => {}
                    },
                }
            }
            Event::Resize(_, _) => {
                // Terminal resized - just redraw on next loop iteration
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Log to a file under the cache dir so the alternate screen stays clean.
/// Filter with RUST_LOG, e.g. RUST_LOG=bmail=debug.
fn init_tracing() {
    let Some(dir) = dirs::cache_dir().map(|p| p.join("bmail")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("bmail.log")) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}

fn render(app: &mut App, f: &mut Frame) {
    let area = f.area();
    let config = app.config.clone();
    let theme = &config.theme;

    // Split into main area and help bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(config.layout.sidebar_width),
            Constraint::Min(10),
        ])
        .split(chunks[0]);

    // Folder counts are derived fresh on every frame, never cached.
    let counts = folder_counts(app.mailbox.messages(), app.mailbox.drafts());
    render_sidebar(
        f,
        cols[0],
        &counts,
        app.mail_view,
        app.mailbox.identity(),
        theme,
    );

    match app.view {
        View::List | View::Search => {
            let (list_pct, preview_pct) = match app.focused_pane {
                Pane::List => (
                    config.layout.list_focused_width,
                    100 - config.layout.list_focused_width,
                ),
                Pane::Preview => (
                    100 - config.layout.preview_focused_width,
                    config.layout.preview_focused_width,
                ),
            };
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(list_pct),
                    Constraint::Percentage(preview_pct),
                ])
                .split(cols[1]);

            // Clone visible messages to avoid borrow conflict with list_state
            let visible: Vec<Message> = app
                .visible
                .iter()
                .filter_map(|&id| app.lookup(id).cloned())
                .collect();
            let visible_refs: Vec<&Message> = visible.iter().collect();
            let title = if app.search_query.is_empty() {
                format!("{} ({})", app.mail_view.display_name(), visible.len())
            } else {
                format!(
                    "{}: {} ({} matches)",
                    app.mail_view.display_name(),
                    app.search_query,
                    visible.len()
                )
            };
            let preview = app.selected_message().cloned();

            render_messages(
                f,
                panes[0],
                &visible_refs,
                &mut app.list_state,
                app.mail_view,
                &title,
                app.now,
                app.focused_pane == Pane::List,
                theme,
                config.layout.time_width,
                config.layout.from_width,
            );
            render_reader(
                f,
                panes[1],
                preview.as_ref(),
                app.reader_scroll,
                app.now,
                app.focused_pane == Pane::Preview,
                theme,
            );
        }
        View::Reader => {
            let msg = app.reader_message().cloned();
            render_reader(
                f,
                cols[1],
                msg.as_ref(),
                app.reader_scroll,
                app.now,
                true,
                theme,
            );
        }
        View::Compose => {
            render_compose(f, cols[1], &app.compose, theme);
        }
    }

    let search_query = if app.view == View::Search {
        Some(app.search_query.as_str())
    } else {
        None
    };
    render_help(
        f,
        chunks[1],
        app.view,
        app.status_message.as_deref(),
        search_query,
        theme,
    );
}
