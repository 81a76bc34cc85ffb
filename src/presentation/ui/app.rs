//! Main application orchestrator.

use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::session::OrderSession;
use crate::infrastructure::config::AppConfig;
use crate::presentation::events::{EventResult, is_actionable};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{OrderScreen, OrderScreenState};

const STATUS_TTL: Duration = Duration::from_secs(5);
const STATUS_CHECK_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Terminal front end: owns the screen state and drives the event loop.
pub struct App {
    state: AppState,
    screen: OrderScreenState,
    theme: Theme,
    menu_source: String,
    show_footer: bool,
}

impl App {
    /// Builds the app from a fresh session and the loaded configuration.
    #[must_use]
    pub fn new(session: OrderSession, config: &AppConfig, menu_source: impl Into<String>) -> Self {
        Self {
            state: AppState::Running,
            screen: OrderScreenState::new(session, config.ui.confirm_quit),
            theme: Theme::new(&config.theme.accent_color),
            menu_source: menu_source.into(),
            show_footer: config.ui.show_footer,
        }
    }

    /// Draws and handles input until the operator quits.
    ///
    /// # Errors
    /// Returns error if the terminal cannot be drawn or read.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.run_event_loop(terminal).await?;

        let session = self.screen.session();
        info!(
            lines = session.cart().len(),
            total = %session.formatted_total(),
            "Application exiting normally"
        );
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut status_interval = interval(STATUS_CHECK_INTERVAL);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                maybe_event = terminal_events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        if self.handle_terminal_event(&event) {
                            terminal.draw(|frame| self.render(frame))?;
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        debug!("Terminal event stream closed");
                        self.state = AppState::Exiting;
                    }
                },

                _ = status_interval.tick() => {
                    if self.screen.expire_status(Instant::now(), STATUS_TTL) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Applies one terminal event and reports whether a redraw is needed.
    fn handle_terminal_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if is_actionable(key) => match self.screen.handle_key(*key) {
                EventResult::Exit => {
                    self.state = AppState::Exiting;
                    false
                }
                EventResult::Consumed => true,
                EventResult::Continue => false,
            },
            Event::Resize(..) => true,
            _ => false,
        }
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(
            OrderScreen::new(&self.screen, &self.theme, &self.menu_source)
                .show_footer(self.show_footer),
            frame.area(),
        );
    }
}
