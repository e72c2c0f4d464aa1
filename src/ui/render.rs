//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Header with tab bar and notification bell
//! - Active tab content (profile or password form)
//! - Notification dropdown and popups
//! - Status bar

use crate::app::{App, AppState, PopupState};
use crate::components::notification_bell::{badge_label, visible_notifications, NotificationView};
use crate::components::{EditorMode, PasswordField};
use crate::types::{ProfileField, Tab};
use crate::ui::{layout, theme::Theme, widgets};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let screen = layout::screen(area);

    render_header(frame, app, screen.header);

    match app.active_tab {
        Tab::Profile => render_profile_tab(frame, app, screen.content),
        Tab::Password => render_password_tab(frame, app, screen.content),
    }

    render_status_bar(frame, app, screen.status);

    if app.bell.is_open() {
        render_dropdown(frame, app, area);
    }

    render_popups(frame, app, area);
}

/// Render header with tab bar and bell
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let header_block = Block::default()
        .style(theme.block_style())
        .title(format!(" orgportal · {} ", app.editor.persisted().display_name()))
        .title_style(theme.title())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());
    frame.render_widget(header_block, area);

    let tab_titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if app.active_tab == *tab {
                theme.tab_active()
            } else {
                theme.tab_inactive()
            };
            Line::styled(format!("[F{}] {}", i + 1, tab.label()), style)
        })
        .collect();

    let tabs = Tabs::new(tab_titles)
        .select(app.active_tab.index())
        .divider(" │ ")
        .style(theme.text());

    let tabs_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4 + layout::BELL_WIDTH),
        height: 1,
    };
    frame.render_widget(tabs, tabs_area);

    render_bell(frame, app, layout::bell_anchor(area));
}

/// Bell button with unread badge
fn render_bell(frame: &mut Frame, app: &App, anchor: Rect) {
    let theme = &app.theme;
    let bell_style = if app.bell.is_open() {
        theme.tab_active()
    } else {
        theme.text()
    };

    let mut spans = vec![Span::styled("🔔", bell_style)];
    if let Some(badge) = badge_label(app.store.unread_count()) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", badge), theme.badge()));
    }

    let bell = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Right)
        .style(theme.text());
    frame.render_widget(bell, anchor);
}

/// Profile tab: read-only identity plus editable name fields
fn render_profile_tab(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let editor = &app.editor;
    let mode = editor.mode();
    let editing = mode == EditorMode::Editing;

    let border_style = if mode == EditorMode::Viewing {
        theme.border()
    } else {
        theme.border_focused()
    };

    let block = Block::default()
        .style(theme.block_style())
        .title(format!(" Profile · {} ", mode.label()))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let profile = editor.profile();
    let mut lines = vec![
        Line::raw(""),
        widgets::field_line(
            "Email",
            Span::styled(format!(" {} ", profile.email), theme.readonly()),
            Some(Span::styled("read-only", theme.text_dim())),
            theme,
        ),
        widgets::field_line(
            "Role",
            Span::styled(format!(" {} ", profile.role), theme.readonly()),
            Some(Span::styled("read-only", theme.text_dim())),
            theme,
        ),
        Line::raw(""),
    ];

    for field in ProfileField::all() {
        let label = if field.is_required() {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };
        let focused = editing && editor.focus() == *field;
        lines.push(widgets::field_line(
            &label,
            widgets::input_span(profile.field(*field), focused, mode != EditorMode::Viewing, theme),
            None,
            theme,
        ));
    }

    lines.push(Line::raw(""));
    lines.push(match (mode, editor.error()) {
        (EditorMode::Saving, _) => Line::from(vec![
            Span::styled(widgets::spinner(), theme.title()),
            Span::styled(" Saving profile...", theme.text()),
        ]),
        (_, Some(err)) => Line::styled(format!("✗ {}", err), theme.error()),
        (EditorMode::Editing, None) if editor.is_dirty() => {
            Line::styled("Unsaved changes", theme.warning())
        }
        _ => Line::raw(""),
    });

    let content = Paragraph::new(lines).style(theme.text());
    let content_area = Rect {
        x: inner.x + 2,
        width: inner.width.saturating_sub(4),
        ..inner
    };
    frame.render_widget(content, content_area);
}

/// Password tab: three masked inputs
fn render_password_tab(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let form = &app.password;

    let title = if form.is_submitting() {
        " Change Password · Submitting... ".to_string()
    } else {
        " Change Password ".to_string()
    };

    let block = Block::default()
        .style(theme.block_style())
        .title(title)
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::raw("")];
    for field in PasswordField::all() {
        let focused = !form.is_submitting() && form.focus() == *field;
        let marker = if form.is_visible(*field) {
            Span::styled("[shown]", theme.warning())
        } else {
            Span::styled("[hidden]", theme.text_dim())
        };
        lines.push(widgets::field_line(
            field.label(),
            widgets::input_span(&form.display_value(*field), focused, true, theme),
            Some(marker),
            theme,
        ));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!("At least {} characters.", form.min_length()),
        theme.text_dim(),
    ));
    lines.push(Line::raw(""));
    lines.push(match form.error() {
        _ if form.is_submitting() => Line::from(vec![
            Span::styled(widgets::spinner(), theme.title()),
            Span::styled(" Updating password...", theme.text()),
        ]),
        Some(err) => Line::styled(format!("✗ {}", err), theme.error()),
        None => Line::raw(""),
    });

    let content = Paragraph::new(lines).style(theme.text());
    let content_area = Rect {
        x: inner.x + 2,
        width: inner.width.saturating_sub(4),
        ..inner
    };
    frame.render_widget(content, content_area);
}

/// Status bar with keybindings
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let hints = match app.state() {
        AppState::Popup => "[Esc] Close",
        AppState::DropdownOpen => "[j/k] Move  [Enter] Open  [a] Mark all read  [s] See all  [Esc] Close",
        AppState::Normal => match (app.active_tab, app.editor.mode()) {
            (Tab::Profile, EditorMode::Viewing) => {
                "[e] Edit  [n] Notifications  [←/→] Tabs  [t] Theme  [q] Quit"
            }
            (Tab::Profile, EditorMode::Editing) => {
                "[↑/↓] Field  [Enter] Save  [Esc] Cancel  [Ctrl+B] Notifications"
            }
            (Tab::Profile, EditorMode::Saving) => "Saving...",
            (Tab::Password, _) => {
                "[↑/↓] Field  [Ctrl+T] Show/hide  [Enter] Update  [Esc] Clear  [Ctrl+C] Quit"
            }
        },
    };

    let right = format!("{} unread", app.store.unread_count());
    widgets::render_status_bar(frame, hints, &right, theme, area);
}

/// Dropdown under the bell with the first entries of the store
fn render_dropdown(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let items = app.store.items();
    let visible = visible_notifications(items);
    let anchor = layout::bell_anchor(layout::screen(area).header);
    let panel = layout::dropdown(anchor, visible.len(), area);

    frame.render_widget(Clear, panel);
    let block = Block::default()
        .style(theme.block_style())
        .title(" Notifications ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let summary = Paragraph::new(Line::from(vec![
        Span::styled(format!("{} unread", app.store.unread_count()), theme.text()),
        Span::styled("  ·  [a] mark all read", theme.text_dim()),
    ]));
    frame.render_widget(summary, Rect { height: 1, ..inner });

    if visible.is_empty() {
        let empty = Paragraph::new("No notifications")
            .style(theme.text_dim())
            .alignment(Alignment::Center);
        frame.render_widget(
            empty,
            Rect {
                y: inner.y + 1,
                height: layout::ITEM_HEIGHT,
                ..inner
            },
        );
    }

    for (i, item) in visible.iter().enumerate() {
        let Some(slot) = layout::dropdown_item(panel, i) else {
            break;
        };
        let view = NotificationView::from_item(item, &app.avatars);
        let selected = i == app.bell.cursor();
        frame.render_widget(notification_entry(&view, selected, theme), slot);
    }

    let footer = Paragraph::new(format!("[s] See all ({})", items.len()))
        .style(theme.text_dim())
        .alignment(Alignment::Center);
    frame.render_widget(
        footer,
        Rect {
            y: inner.bottom().saturating_sub(1),
            height: 1,
            ..inner
        },
    );
}

/// Three-line entry: title, creator, date
fn notification_entry<'a>(view: &NotificationView, selected: bool, theme: &Theme) -> Paragraph<'a> {
    let (marker, title_style) = if view.unread {
        ("● ", theme.unread())
    } else {
        ("  ", theme.text())
    };
    let title_style = if selected { theme.selected() } else { title_style };

    let avatar = view
        .avatar
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(marker, theme.unread()),
            Span::styled(view.title.clone(), title_style),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{} · {}", view.creator_name, view.creator_role), theme.text()),
            Span::styled(format!("  [{}]", avatar), theme.text_dim()),
        ]),
        Line::styled(format!("  {}", view.when), theme.text_dim()),
    ])
    .style(theme.text())
}

/// Render popups if active
fn render_popups(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    match &app.popup {
        PopupState::None => {}

        PopupState::Error { title, message } => {
            widgets::render_error_popup(frame, title, message, theme, area);
        }

        PopupState::AllNotifications { scroll } => {
            let total = app.store.items().len();
            let mut lines: Vec<Line> = app
                .store
                .items()
                .iter()
                .skip(*scroll)
                .map(|item| {
                    let view = NotificationView::from_item(item, &app.avatars);
                    let (marker, style) = if view.unread {
                        ("● ", theme.unread())
                    } else {
                        ("  ", theme.text())
                    };
                    Line::from(vec![
                        Span::styled(marker, theme.unread()),
                        Span::styled(view.title, style),
                        Span::styled(
                            format!("  {} · {}", view.creator_name, view.when),
                            theme.text_dim(),
                        ),
                    ])
                })
                .collect();
            // Popup height follows the line count; keep it fixed while scrolling
            lines.resize(total, Line::raw(""));

            let title = format!("All Notifications ({})", total);
            widgets::render_popup(frame, &title, lines, &[("Close", "Esc")], 80, theme, area);
        }
    }

    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, theme, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BackendOptions, Config};
    use crate::portal::{PortalData, SimulatedBackend};
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        let data = PortalData::demo();
        let backend = Arc::new(SimulatedBackend::new(
            data.profile.clone(),
            data.password.clone(),
            &BackendOptions::default(),
        ));
        let mut app = App::new(Config::default(), data, backend);
        app.resize(100, 40);
        app
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_profile_tab() {
        let screen = draw(&app());
        assert!(screen.contains("Profile · Viewing"));
        assert!(screen.contains("maria.santos@example.edu"));
        assert!(screen.contains("read-only"));
        assert!(screen.contains("First name *"));
    }

    #[test]
    fn test_render_badge_and_closed_dropdown() {
        let screen = draw(&app());
        assert!(screen.contains(" 3 "));
        assert!(!screen.contains("General Assembly"));
    }

    #[test]
    fn test_render_dropdown_first_five() {
        let mut app = app();
        app.handle_key(KeyEvent::from(KeyCode::Char('n')));
        let screen = draw(&app);

        assert!(screen.contains("General Assembly"));
        assert!(screen.contains("Volunteer call"));
        assert!(!screen.contains("Election results"));
        assert!(!screen.contains("Welcome to the portal"));
        assert!(screen.contains("See all (8)"));
        // Entry without a creator falls back to defaults
        assert!(screen.contains("Event Creator · COA"));
        assert!(screen.contains("[placeholder-avatar.png]"));
    }

    #[test]
    fn test_render_password_masked() {
        let mut app = app();
        app.handle_key(KeyEvent::from(KeyCode::F(2)));
        for c in "secret".chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        let screen = draw(&app);
        assert!(screen.contains("••••••"));
        assert!(!screen.contains("secret"));
        assert!(screen.contains("[hidden]"));
    }

    #[test]
    fn test_render_see_all_popup() {
        let mut app = app();
        app.handle_key(KeyEvent::from(KeyCode::Char('n')));
        app.handle_key(KeyEvent::from(KeyCode::Char('s')));
        let screen = draw(&app);
        assert!(screen.contains("All Notifications (8)"));
        assert!(screen.contains("Welcome to the portal"));
    }

    #[test]
    fn test_see_all_popup_keeps_size_while_scrolling() {
        let title_row = |screen: &str| {
            screen
                .lines()
                .position(|row| row.contains("All Notifications (8)"))
                .unwrap()
        };

        let mut app = app();
        app.handle_key(KeyEvent::from(KeyCode::Char('n')));
        app.handle_key(KeyEvent::from(KeyCode::Char('s')));
        let top = title_row(&draw(&app));

        for _ in 0..7 {
            app.handle_key(KeyEvent::from(KeyCode::Down));
        }
        assert_eq!(app.popup, PopupState::AllNotifications { scroll: 7 });
        let screen = draw(&app);
        assert_eq!(title_row(&screen), top);
        assert!(!screen.contains("General Assembly"));
    }
}
