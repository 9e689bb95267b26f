//! Terminal rendering for the dashboard.
//!
//! Layout, top to bottom:
//! - Header with the brand name and load status
//! - Four stat cards in a row
//! - Scrollable body with the panels (see [`panels`])
//! - Footer with key hints
//!
//! The toast and the "back to top" control float above the body.

mod cards;
mod overlay;
mod panels;
mod theme;

pub use cards::CARD_HEIGHT;
pub use overlay::{top_control_rect, TOP_CONTROL_LABEL};
pub use panels::body_lines;
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::AppState;
use crate::components::DashboardView;

/// Screen regions for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub cards: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let [header, cards, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Self {
            header,
            cards,
            body,
            footer,
        }
    }
}

/// Number of body lines `view` renders.
pub fn body_line_count(view: &DashboardView) -> usize {
    body_lines(view).len()
}

// ============================================================================
// Main UI Rendering
// ============================================================================

pub fn render(frame: &mut Frame, state: &AppState) {
    let layout = DashboardLayout::new(frame.area());

    render_header(frame, layout.header, state);

    match &state.view {
        Some(view) => {
            cards::render_cards(frame, layout.cards, &view.cards);
            let body = Paragraph::new(body_lines(view)).scroll((state.body_scroll(), 0));
            frame.render_widget(body, layout.body);
        }
        None => {
            let message = match &state.load_error {
                Some(err) => Line::from(Span::styled(err.clone(), Style::default().fg(COLOR_ERROR))),
                None => Line::from(Span::styled("Loading dashboard…", Style::default().fg(COLOR_DIM))),
            };
            frame.render_widget(Paragraph::new(message), layout.body);
        }
    }

    render_footer(frame, layout.footer);

    if state.scroll_to_top.is_visible() {
        overlay::render_top_control(frame, layout.body);
    }
    if let Some(toast) = &state.toast {
        overlay::render_toast(frame, layout.body, toast);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::styled(
            " socialdash ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· {}", state.brand_name), Style::default().fg(COLOR_ACCENT)),
    ];
    if state.loading {
        spans.push(Span::styled("  refreshing…", Style::default().fg(COLOR_DIM)));
    } else if let (Some(err), Some(_)) = (&state.load_error, &state.view) {
        spans.push(Span::styled(format!("  {}", err), Style::default().fg(COLOR_ERROR)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = " q quit · r refresh · 1-4 connect · p draft · j/k scroll · t top";
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(COLOR_DIM))),
        area,
    );
}
