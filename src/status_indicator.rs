use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Spinner row between the message log and the input. Shows activity
/// while any request is in flight.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    spinner_idx: usize,
}

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, pending: usize) {
        let (icon, text) = if pending > 0 {
            let icon = SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()];
            let text = if pending == 1 {
                "Waiting for reply...".to_string()
            } else {
                format!("Waiting for {} replies...", pending)
            };
            (icon, text)
        } else {
            (" ", String::new())
        };

        let status = Line::from(vec![
            Span::styled(icon, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(text, Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(
            Paragraph::new(status),
            Rect {
                x: area.x,
                y: area.y,
                width: area.width,
                height: 1,
            },
        );
    }
}
