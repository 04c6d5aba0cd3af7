use crate::api::AskClient;
use crate::config::get_config;
use crate::log_view::LogView;
use crate::status_indicator::StatusIndicator;
use crate::widget::{ChatEvent, ChatWidget};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Chat,
    QuitConfirm,
    Quit,
}

pub struct App {
    pub state: AppState,
    pub widget: ChatWidget,
    pub logs: LogView,
    pub status_indicator: StatusIndicator,
    /// Screen area of the send control, recorded at draw time. None until
    /// the first frame has been drawn.
    pub send_button: Option<Rect>,
}

impl App {
    /// Builds the app plus the receiving end of the widget's event
    /// channel. The receiver stays with the caller's select loop.
    pub fn new() -> (App, mpsc::UnboundedReceiver<ChatEvent>) {
        let config = get_config();
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let app = App {
            state: AppState::Chat,
            widget: ChatWidget::new(AskClient::new(config.endpoint), events_tx),
            logs: LogView::new(),
            status_indicator: StatusIndicator::new(),
            send_button: None,
        };
        (app, events_rx)
    }

    pub fn handle_chat_event(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::Reply(reply) => {
                self.widget.apply_reply(reply);
                self.logs.add("reply rendered");
            }
            ChatEvent::Log(line) => self.logs.add(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;
    use crate::widget::ChatEvent;

    #[tokio::test]
    async fn test_reply_event_appends_bot_message() {
        let (mut app, _rx) = App::new();
        app.handle_chat_event(ChatEvent::Reply("hi there".to_string()));
        let last = app.widget.messages.last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.content, "hi there");
    }

    #[tokio::test]
    async fn test_log_event_feeds_side_panel_only() {
        let (mut app, _rx) = App::new();
        app.handle_chat_event(ChatEvent::Log("something happened".to_string()));
        assert!(app.widget.messages.is_empty());
        assert_eq!(app.logs.entries.last().unwrap(), "something happened");
    }
}
