//! Floating elements drawn over the dashboard: the toast and the
//! "back to top" control.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_ERROR, COLOR_OVERLAY_BG, COLOR_SUCCESS};
use crate::components::{Toast, ToastKind};

pub const TOP_CONTROL_LABEL: &str = " ↑ top ";

const TOAST_WIDTH: u16 = 44;

/// Where the control sits inside `body`: bottom-right corner, one row high.
pub fn top_control_rect(body: Rect) -> Rect {
    let width = TOP_CONTROL_LABEL.chars().count() as u16;
    if body.width < width + 2 || body.height == 0 {
        return Rect::new(body.x, body.y, 0, 0);
    }
    Rect::new(
        body.x + body.width - width - 1,
        body.y + body.height - 1,
        width,
        1,
    )
}

pub fn render_top_control(frame: &mut Frame, body: Rect) {
    let area = top_control_rect(body);
    if area.width == 0 {
        return;
    }
    let label = Paragraph::new(Span::styled(
        TOP_CONTROL_LABEL,
        Style::default()
            .fg(COLOR_ACCENT)
            .bg(COLOR_OVERLAY_BG)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Clear, area);
    frame.render_widget(label, area);
}

/// Toast in the top-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let color = match toast.kind {
        ToastKind::Success => COLOR_SUCCESS,
        ToastKind::Error => COLOR_ERROR,
    };
    let height = if toast.description.is_some() { 4 } else { 3 };
    let width = TOAST_WIDTH.min(area.width);
    if width < 8 || area.height < height {
        return;
    }
    let rect = Rect::new(area.x + area.width - width, area.y, width, height);

    let mut lines = vec![Line::from(Span::styled(
        toast.title.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(description) = &toast.description {
        lines.push(Line::from(description.clone()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(COLOR_OVERLAY_BG));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        rect,
    );
}
