use anyhow::Context;
use askbox::app::{App, AppState};
use askbox::config::{get_config, initialize_config};
use askbox::key_handlers::{handle_chat_input, handle_mouse, handle_quit_confirm_input};
use askbox::logging::init_logging;
use askbox::ui;
use askbox::widget::ChatEvent;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

enum Event {
    Input(CEvent),
    Tick,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    initialize_config().context("configuration failed")?;
    let config = get_config();
    let _logger = init_logging(&config.log_level, false)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.mouse_capture {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (app, chat_rx) = App::new();
    let res = run_app(&mut terminal, app, chat_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    if config.mouse_capture {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main loop of the application.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut chat_rx: mpsc::UnboundedReceiver<ChatEvent>,
) -> anyhow::Result<()> {
    let (tx, mut input_rx) = mpsc::channel::<Event>(100);

    // Spawn a task to read user input
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            // Poll for input with timeout
            if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                if let Ok(event) = event::read() {
                    if tx.send(Event::Input(event)).await.is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= Duration::from_millis(250) {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        tokio::select! {
            Some(event) = input_rx.recv() => match event {
                Event::Input(CEvent::Key(key)) => match app.state {
                    AppState::Chat => handle_chat_input(key, &mut app),
                    AppState::QuitConfirm => handle_quit_confirm_input(key, &mut app),
                    AppState::Quit => {}
                },
                Event::Input(CEvent::Mouse(mouse)) => {
                    if app.state == AppState::Chat {
                        handle_mouse(mouse, &mut app);
                    }
                }
                Event::Input(_) => {}
                Event::Tick => {
                    if app.widget.pending > 0 {
                        app.status_indicator.update_spinner();
                    }
                }
            },
            Some(chat_event) = chat_rx.recv() => {
                app.handle_chat_event(chat_event);
            }
            else => break,
        }

        if app.state == AppState::Quit {
            break;
        }
    }

    Ok(())
}
