//! Stat card row.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::components::StatsCard;

/// Rows taken by the card strip, borders included.
pub const CARD_HEIGHT: u16 = 5;

/// Render `cards` side by side in equal columns.
pub fn render_cards(frame: &mut Frame, area: Rect, cards: &[StatsCard]) {
    if cards.is_empty() {
        return;
    }
    let columns = Layout::horizontal(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(area);
    for (card, column) in cards.iter().zip(columns.iter()) {
        render_card(frame, *column, card);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &StatsCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", card.label),
            Style::default().fg(COLOR_DIM),
        ));

    frame.render_widget(Paragraph::new(card_lines(card)).block(block), area);
}

pub(crate) fn card_lines(card: &StatsCard) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        card.value.clone(),
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    ))];

    let mut detail = Vec::new();
    if let Some(trend) = card.trend {
        detail.push(Span::styled(trend.label(), Style::default().fg(trend.color())));
    }
    if let Some(sub_value) = &card.sub_value {
        if !detail.is_empty() {
            detail.push(Span::raw(" "));
        }
        detail.push(Span::styled(sub_value.clone(), Style::default().fg(COLOR_DIM)));
    }
    if !detail.is_empty() {
        lines.push(Line::from(detail));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_trend_span_colored() {
        let lines = card_lines(&StatsCard::new("Followers", "10").with_trend(-1.5));
        let trend = &lines[1].spans[0];
        assert_eq!(trend.content, "↓ 1.5%");
        assert_eq!(trend.style.fg, Some(Color::Red));
    }

    #[test]
    fn test_plain_card_single_line() {
        let lines = card_lines(&StatsCard::new("Engagement Rate", "4.2%"));
        assert_eq!(lines.len(), 1);
    }
}
