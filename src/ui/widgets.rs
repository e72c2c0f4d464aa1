//! Reusable UI widgets
//!
//! Contains common UI components:
//! - Popup dialogs (error, full notification list)
//! - Spinner and flash messages
//! - Labelled form fields

use crate::ui::layout::centered_rect;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::{SystemTime, UNIX_EPOCH};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Width of the label column in forms
const LABEL_WIDTH: usize = 22;

/// Current spinner glyph, advancing every 100ms
pub fn spinner() -> &'static str {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    SPINNER_FRAMES[(millis / 100) as usize % SPINNER_FRAMES.len()]
}

/// Render a centered popup dialog
pub fn render_popup(
    frame: &mut Frame,
    title: &str,
    content: Vec<Line>,
    buttons: &[(&str, &str)], // (label, key)
    width: u16,
    theme: &Theme,
    area: Rect,
) {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = (content.len() as u16 + 6).min(area.height.saturating_sub(2));
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.text());

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content_area = Rect {
        x: inner.x + 1,
        y: inner.y + 1,
        width: inner.width.saturating_sub(2),
        height: inner.height.saturating_sub(3),
    };
    let content_widget = Paragraph::new(content)
        .style(theme.text())
        .wrap(Wrap { trim: false });
    frame.render_widget(content_widget, content_area);

    if !buttons.is_empty() {
        let button_area = Rect {
            x: inner.x,
            y: inner.bottom().saturating_sub(1),
            width: inner.width,
            height: 1,
        };

        let button_spans: Vec<Span> = buttons
            .iter()
            .enumerate()
            .flat_map(|(i, (label, key))| {
                let mut spans = vec![
                    Span::styled("[", theme.text_dim()),
                    Span::styled(
                        key.to_string(),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("] ", theme.text_dim()),
                    Span::styled(*label, theme.text()),
                ];
                if i < buttons.len() - 1 {
                    spans.push(Span::raw("    "));
                }
                spans
            })
            .collect();

        let buttons_widget = Paragraph::new(Line::from(button_spans)).alignment(Alignment::Center);
        frame.render_widget(buttons_widget, button_area);
    }
}

/// Render an error popup
pub fn render_error_popup(
    frame: &mut Frame,
    title: &str,
    message: &str,
    theme: &Theme,
    area: Rect,
) {
    let content = vec![Line::styled(message, theme.error())];
    render_popup(frame, title, content, &[("OK", "Enter")], 56, theme, area);
}

/// Render a flash message on the bottom line
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    let style = if is_error { theme.error() } else { theme.success() };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash_area = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, flash_area);
    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message, style),
    ]))
    .style(theme.text());

    frame.render_widget(flash, flash_area);
}

/// Render status bar at bottom
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    frame.render_widget(Clear, area);

    let left_widget = Paragraph::new(left_content).style(theme.text_dim());
    frame.render_widget(left_widget, area);

    let right_len = right_content.chars().count() as u16;
    let right_area = Rect {
        x: area.right().saturating_sub(right_len + 1).max(area.x),
        y: area.y,
        width: (right_len + 1).min(area.width),
        height: 1,
    };
    let right_widget = Paragraph::new(right_content).style(theme.text_dim());
    frame.render_widget(right_widget, right_area);
}

/// One form row: "Label ......... value"
pub fn field_line<'a>(label: &str, value: Span<'a>, marker: Option<Span<'a>>, theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::styled(
        format!("{:<width$}", label, width = LABEL_WIDTH),
        theme.text_dim(),
    )];
    spans.push(value);
    if let Some(marker) = marker {
        spans.push(Span::raw("  "));
        spans.push(marker);
    }
    Line::from(spans)
}

/// Editable value with a cursor when focused
pub fn input_span<'a>(value: &str, focused: bool, editable: bool, theme: &Theme) -> Span<'a> {
    if !editable {
        return Span::styled(format!(" {} ", value), theme.text());
    }
    let text = if focused {
        format!(" {}▏", value)
    } else {
        format!(" {} ", value)
    };
    Span::styled(text, theme.input(focused))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeName;

    #[test]
    fn test_spinner_is_a_frame() {
        assert!(SPINNER_FRAMES.contains(&spinner()));
    }

    #[test]
    fn test_field_line_layout() {
        let theme = Theme::from_name(ThemeName::Transparent);
        let line = field_line("Email", Span::raw("a@b.c"), None, &theme);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content.len(), LABEL_WIDTH);
    }

    #[test]
    fn test_input_span_cursor() {
        let theme = Theme::from_name(ThemeName::Transparent);
        assert_eq!(input_span("Ana", true, true, &theme).content, " Ana▏");
        assert_eq!(input_span("Ana", false, true, &theme).content, " Ana ");
        assert_eq!(input_span("Ana", true, false, &theme).content, " Ana ");
    }
}
