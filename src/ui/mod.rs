pub mod chat;
pub mod quit_confirm;

use crate::app::{App, AppState};
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    match app.state {
        AppState::Chat => chat::draw_chat(f, app),
        AppState::QuitConfirm => quit_confirm::draw_quit_confirm(f, area),
        AppState::Quit => {}
    }
}
