use crate::api::AskClient;
use crate::chat::{Message, Sender};
use crate::constants::NETWORK_ERROR_REPLY;
use crate::logging::{log_api_call, request_snippet};
use crate::models::ApiCallLog;
use chrono::Utc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Completion of work started by the widget, delivered back to the UI
/// loop. Replies arrive in completion order, which for overlapping
/// submits is not necessarily submission order.
#[derive(Debug)]
pub enum ChatEvent {
    Reply(String),
    Log(String),
}

/// The chat widget controller. Owns the visible message log and the
/// input buffer. Each `send_message` call runs one self-contained cycle
/// (read input, render the user message, call the endpoint, render the
/// outcome); there is no mode and no guard against overlapping cycles.
pub struct ChatWidget {
    pub messages: Vec<Message>,
    pub input: String,
    /// Requested scroll offset of the message log. The renderer clamps it
    /// to the maximum extent and writes the clamped value back.
    pub scroll: u16,
    /// Number of requests currently in flight.
    pub pending: usize,
    client: AskClient,
    events: mpsc::UnboundedSender<ChatEvent>,
}

impl ChatWidget {
    pub fn new(client: AskClient, events: mpsc::UnboundedSender<ChatEvent>) -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            scroll: 0,
            pending: 0,
            client,
            events,
        }
    }

    /// Appends a message to the log and pins the viewport to its maximum
    /// extent. Empty text is permitted and still produces an entry.
    pub fn append_message(&mut self, content: impl Into<String>, sender: Sender) {
        self.messages.push(Message::new(content, sender));
        self.scroll_to_bottom();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = u16::MAX;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// One send cycle. Whitespace-only input is a complete no-op: nothing
    /// is appended, nothing is sent, the input is left as typed.
    /// Otherwise the user message renders and the input clears before the
    /// request is issued; the reply (or the fixed fallback) arrives later
    /// as a `ChatEvent::Reply`.
    pub fn send_message(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return;
        }

        self.append_message(text.clone(), Sender::User);
        self.input.clear();
        self.pending += 1;

        let client = self.client.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let started = Instant::now();
            let result = client.ask(&text).await;

            let outcome = match &result {
                Ok(_) => "ok".to_string(),
                Err(err) => format!("failed: {}", err),
            };
            log_api_call(&ApiCallLog {
                timestamp: Utc::now(),
                endpoint: client.endpoint().to_string(),
                request_summary: request_snippet(&text),
                outcome,
                response_time_ms: started.elapsed().as_millis(),
            });

            // Every failure renders the same way; only the log knows why.
            let reply = match result {
                Ok(reply) => reply.reply,
                Err(err) => {
                    let _ = events.send(ChatEvent::Log(format!("ask failed: {}", err)));
                    NETWORK_ERROR_REPLY.to_string()
                }
            };
            let _ = events.send(ChatEvent::Reply(reply));
        });
    }

    /// Renders an arrived reply as a bot message.
    pub fn apply_reply(&mut self, reply: String) {
        self.pending = self.pending.saturating_sub(1);
        self.append_message(reply, Sender::Bot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::sync::mpsc::UnboundedReceiver;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn widget_for(endpoint: &str) -> (ChatWidget, UnboundedReceiver<ChatEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ChatWidget::new(AskClient::new(endpoint), tx), rx)
    }

    async fn next_reply(rx: &mut UnboundedReceiver<ChatEvent>) -> String {
        while let Some(event) = rx.recv().await {
            if let ChatEvent::Reply(text) = event {
                return text;
            }
        }
        panic!("channel closed without a reply");
    }

    #[tokio::test]
    async fn test_whitespace_input_is_a_no_op() {
        let (mut widget, _rx) = widget_for("http://127.0.0.1:9/api/ask");
        widget.input = "   \t ".to_string();
        widget.send_message();
        assert!(widget.messages.is_empty());
        assert_eq!(widget.input, "   \t ");
        assert_eq!(widget.pending, 0);
    }

    #[tokio::test]
    async fn test_send_appends_trimmed_user_message_and_clears_input() {
        let (mut widget, _rx) = widget_for("http://127.0.0.1:9/api/ask");
        widget.input = "  hello  ".to_string();
        widget.send_message();
        // Both effects are synchronous, ahead of any response.
        assert_eq!(
            widget.messages,
            vec![Message::new("hello", Sender::User)]
        );
        assert!(widget.input.is_empty());
        assert_eq!(widget.pending, 1);
    }

    #[tokio::test]
    async fn test_successful_reply_renders_as_bot_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ask"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "hi there"})))
            .mount(&server)
            .await;

        let (mut widget, mut rx) = widget_for(&format!("{}/api/ask", server.uri()));
        widget.input = "hello".to_string();
        widget.send_message();

        let reply = next_reply(&mut rx).await;
        widget.apply_reply(reply);

        assert_eq!(
            widget.messages.last(),
            Some(&Message::new("hi there", Sender::Bot))
        );
        assert_eq!(widget.pending, 0);
    }

    #[tokio::test]
    async fn test_non_json_reply_renders_fixed_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ask"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let (mut widget, mut rx) = widget_for(&format!("{}/api/ask", server.uri()));
        widget.input = "hello".to_string();
        widget.send_message();

        let reply = next_reply(&mut rx).await;
        widget.apply_reply(reply);

        assert_eq!(
            widget.messages.last(),
            Some(&Message::new("Network error. Please try again.", Sender::Bot))
        );
    }

    #[tokio::test]
    async fn test_connection_failure_renders_fixed_error_message() {
        let server = MockServer::start().await;
        let endpoint = format!("{}/api/ask", server.uri());
        drop(server);

        let (mut widget, mut rx) = widget_for(&endpoint);
        widget.input = "hello".to_string();
        widget.send_message();

        let reply = next_reply(&mut rx).await;
        widget.apply_reply(reply);

        assert_eq!(
            widget.messages.last().unwrap().content,
            NETWORK_ERROR_REPLY
        );
    }

    #[tokio::test]
    async fn test_overlapping_submits_are_not_serialized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ask"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "ack"})))
            .mount(&server)
            .await;

        let (mut widget, mut rx) = widget_for(&format!("{}/api/ask", server.uri()));
        widget.input = "first".to_string();
        widget.send_message();
        widget.input = "second".to_string();
        widget.send_message();
        assert_eq!(widget.pending, 2);

        // Replies land in whatever order they complete.
        widget.apply_reply(next_reply(&mut rx).await);
        widget.apply_reply(next_reply(&mut rx).await);
        assert_eq!(widget.pending, 0);

        let bots: Vec<_> = widget
            .messages
            .iter()
            .filter(|m| m.sender == Sender::Bot)
            .collect();
        assert_eq!(bots.len(), 2);
    }

    #[tokio::test]
    async fn test_append_pins_scroll_to_bottom() {
        let (mut widget, _rx) = widget_for("http://127.0.0.1:9/api/ask");
        widget.scroll = 3;
        widget.append_message("", Sender::Bot);
        assert_eq!(widget.scroll, u16::MAX);
    }
}
