use crate::app::App;
use crate::chat::{Message, Sender};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

// "You: " and "Bot: " are both five columns wide.
const PREFIX_WIDTH: usize = 5;

pub fn draw_chat(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .margin(1)
        .split(size);

    let chat_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),    // Messages
                Constraint::Length(1), // Status
                Constraint::Length(3), // Input + send control
            ]
            .as_ref(),
        )
        .split(horizontal_chunks[0]);

    draw_messages(f, app, chat_chunks[0]);
    app.status_indicator
        .render(f, chat_chunks[1], app.widget.pending);
    draw_input(f, app, chat_chunks[2]);
    draw_logs(f, app, horizontal_chunks[1]);
}

/// Scroll offset past which there is nothing left to reveal.
pub fn max_scroll(total_lines: u16, viewport_height: u16) -> u16 {
    total_lines.saturating_sub(viewport_height)
}

/// Clamps a requested offset to the maximum extent. Appends request
/// `u16::MAX`, which lands exactly on the bottom here.
pub fn effective_scroll(requested: u16, total_lines: u16, viewport_height: u16) -> u16 {
    requested.min(max_scroll(total_lines, viewport_height))
}

/// Pre-wrapped log lines for the given width. Wrapping happens here, not
/// in the widget layer, so the scroll arithmetic sees true line counts.
pub fn message_lines(messages: &[Message], width: u16) -> Vec<Line<'static>> {
    let wrap_width = (width as usize).saturating_sub(PREFIX_WIDTH).max(1);
    let mut lines = Vec::new();
    for message in messages {
        let (prefix, style) = match message.sender {
            Sender::User => ("You: ", Style::default().fg(Color::LightGreen)),
            Sender::Bot => ("Bot: ", Style::default().fg(Color::LightBlue)),
        };
        for (idx, piece) in wrap(&message.content, wrap_width).iter().enumerate() {
            let lead = if idx == 0 {
                prefix.to_string()
            } else {
                " ".repeat(PREFIX_WIDTH)
            };
            lines.push(Line::from(vec![
                Span::styled(lead, style.add_modifier(Modifier::BOLD)),
                Span::styled(piece.to_string(), style),
            ]));
        }
    }
    lines
}

fn draw_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let lines = message_lines(&app.widget.messages, area.width);
    let total_lines = lines.len() as u16;
    let scroll = effective_scroll(app.widget.scroll, total_lines, area.height);
    // Write the clamped value back so PageUp starts from what is visible.
    app.widget.scroll = scroll;

    let msgs_para = Paragraph::new(lines).style(Style::default());
    f.render_widget(msgs_para.scroll((scroll, 0)), area);
}

fn draw_input(f: &mut Frame, app: &mut App, area: Rect) {
    let input_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(10)])
        .split(area);

    let input_area = input_chunks[0];
    let button_area = input_chunks[1];
    app.send_button = Some(button_area);

    let visible_width = input_area.width.saturating_sub(2);
    let text_width = UnicodeWidthStr::width(app.widget.input.as_str()) as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    let input = Paragraph::new(app.widget.input.as_str())
        .style(Style::default().fg(Color::White))
        .scroll((0, scroll_offset))
        .block(Block::default().borders(Borders::ALL).title("Input"));
    f.render_widget(input, input_area);

    let button = Paragraph::new("Send")
        .style(Style::default().fg(Color::LightYellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, button_area);

    let cursor_x = input_area.x + 1 + text_width.saturating_sub(scroll_offset);
    f.set_cursor_position((cursor_x, input_area.y + 1));
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Log")
        .style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let log_lines: Vec<Line> = app
        .logs
        .entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(entry.clone()),
            ])
        })
        .collect();

    // The log panel stays pinned to its tail.
    let scroll = max_scroll(log_lines.len() as u16, inner.height);
    let logs_para = Paragraph::new(log_lines).style(Style::default().fg(Color::DarkGray));
    f.render_widget(logs_para.scroll((scroll, 0)), inner);
}
