//! Dashboard application: state, input handling and the event loop.
//!
//! Network work runs on spawned tasks that report back over an unbounded
//! channel as [`AppMessage`]s, so the loop keeps drawing while requests are
//! in flight.

mod handlers;
mod messages;
mod state;

pub use handlers::{action_for_key, action_for_mouse, Action};
pub use messages::AppMessage;
pub use state::{AppState, SCROLL_UNITS_PER_LINE, TOAST_TICKS};

use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{layout::Rect, Terminal};
use tokio::sync::mpsc;

use crate::components::ai_assistant::{self, connected_platform_ids};
use crate::components::{ConnectPlatforms, Dashboard, DashboardData, Toast};
use crate::context::AppContext;
use crate::traits::HttpClient;
use crate::ui::{self, DashboardLayout};

/// Tick interval for animations and toast expiry.
const TICK: Duration = Duration::from_millis(50);

pub struct App<C: HttpClient + 'static> {
    ctx: Arc<AppContext<C>>,
    pub state: AppState,
    /// Last successfully loaded data
    data: Option<DashboardData>,
    /// Screen size from the last draw, for mouse hit-testing
    area: Rect,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl<C: HttpClient + 'static> App<C> {
    pub fn new(ctx: Arc<AppContext<C>>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let state = AppState::new(ctx.session.brand_name.clone());
        Self {
            ctx,
            state,
            data: None,
            area: Rect::default(),
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Load the dashboard in the background. `refresh` drops cached data first.
    pub fn load(&mut self, refresh: bool) {
        self.state.begin_loading();
        let ctx = Arc::clone(&self.ctx);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = if refresh {
                Dashboard::refresh(&ctx).await
            } else {
                Dashboard::load(&ctx).await
            };
            let _ = tx.send(AppMessage::DashboardLoaded(result));
        });
    }

    /// Connect the platform shown in connect slot `index`.
    pub fn connect(&mut self, index: usize) {
        let Some(platform) = self
            .state
            .view
            .as_ref()
            .and_then(|view| view.connect.get(index))
            .cloned()
        else {
            tracing::debug!("no platform in connect slot {}", index + 1);
            return;
        };

        let ctx = Arc::clone(&self.ctx);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let toast = ConnectPlatforms::connect(&ctx, &platform).await;
            let _ = tx.send(AppMessage::ActionFinished(toast));
        });
    }

    /// Turn the first unused suggestion into a draft for every connected platform.
    pub fn draft_from_first_suggestion(&mut self) {
        let Some(suggestion) = self
            .state
            .view
            .as_ref()
            .and_then(|view| view.suggestions.first())
            .cloned()
        else {
            self.state.show_toast(Toast::error("No suggestions", "There is no unused suggestion to draft from."));
            return;
        };
        let platforms = self
            .data
            .as_ref()
            .map(|data| connected_platform_ids(&data.accounts))
            .unwrap_or_default();

        let ctx = Arc::clone(&self.ctx);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let toast = ai_assistant::create_draft(&ctx, &suggestion, &platforms).await;
            let _ = tx.send(AppMessage::ActionFinished(toast));
        });
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.quit(),
            Action::Refresh => self.load(true),
            Action::Connect(index) => self.connect(index),
            Action::DraftFromSuggestion => self.draft_from_first_suggestion(),
            Action::Scroll(lines) => self.state.scroll_lines(lines),
            Action::ScrollToTop => self.scroll_to_top(),
            Action::Click { column, row } => {
                let control = ui::top_control_rect(DashboardLayout::new(self.area).body);
                let hit = column >= control.x
                    && column < control.x + control.width
                    && row >= control.y
                    && row < control.y + control.height;
                if hit {
                    self.scroll_to_top();
                }
            }
        }
    }

    fn scroll_to_top(&mut self) {
        if self.state.click_scroll_to_top().is_none() {
            tracing::debug!("scroll-to-top ignored, control hidden");
        }
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::DashboardLoaded(Ok(data)) => {
                self.state.set_dashboard(&data);
                self.data = Some(data);
            }
            AppMessage::DashboardLoaded(Err(err)) => {
                tracing::warn!("dashboard load failed [{}]: {}", err.error_code(), err);
                self.state.set_load_error(err.user_message());
            }
            AppMessage::ActionFinished(toast) => {
                self.state.show_toast(toast);
                self.load(false);
            }
        }
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }
}

// ============================================================================
// Event Loop
// ============================================================================

/// Run the dashboard until the user quits.
pub async fn run_app<B, C>(terminal: &mut Terminal<B>, app: &mut App<C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
    C: HttpClient + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| color_eyre::eyre::eyre!("event loop already running"))?;
    let mut ticker = tokio::time::interval(TICK);

    app.load(false);

    loop {
        if app.state.needs_redraw {
            let completed = terminal.draw(|f| ui::render(f, &app.state))?;
            app.set_area(completed.area);
            app.state.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.state.tick();
            }

            Some(message) = message_rx.recv() => {
                app.handle_message(message);
            }

            event_result = event_stream.next() => {
                let Some(event) = event_result else {
                    break;
                };
                let action = match event? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => action_for_key(key),
                    Event::Mouse(mouse) => action_for_mouse(mouse),
                    Event::Resize(_, _) => {
                        app.state.mark_dirty();
                        None
                    }
                    _ => None,
                };
                if let Some(action) = action {
                    app.handle_action(action);
                }
            }
        }

        if app.state.should_quit {
            break;
        }
    }

    Ok(())
}
