//! Scrollable body: platform table, recent posts, AI assistant, calendar and
//! connect list, rendered as one column of titled sections.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::{COLOR_ACCENT, COLOR_AI, COLOR_DIM, COLOR_ERROR, COLOR_SCHEDULED, COLOR_SUCCESS};
use crate::components::dashboard::format_count;
use crate::components::DashboardView;
use crate::models::{Post, PostStatus};

/// Max display width of post or suggestion content per line.
const PREVIEW_CHARS: usize = 60;

/// All body lines for `view`, top to bottom.
pub fn body_lines(view: &DashboardView) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let title = match &view.top_platform {
        Some(top) => format!("Platform Performance  (top: {})", top),
        None => "Platform Performance".to_string(),
    };
    section(&mut lines, title);
    if view.platform_rows.is_empty() {
        empty(&mut lines, "No platform data yet");
    }
    for row in &view.platform_rows {
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<14}", truncate(&row.name, 14))),
            Span::styled(
                format!("{:>10} followers", format_count(row.followers)),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::styled(
                format!("  {:>5.1}% eng  {} posts", row.engagement, row.posts),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
    }

    section(&mut lines, "Recent Posts");
    if view.recent_posts.is_empty() {
        empty(&mut lines, "No posts yet");
    }
    for post in &view.recent_posts {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<10}", post.status.as_str()),
                Style::default().fg(status_color(post.status)),
            ),
            Span::raw(truncate(&post.content, PREVIEW_CHARS)),
        ]));
    }

    section(&mut lines, "AI Assistant");
    if view.suggestions.is_empty() {
        empty(&mut lines, "No unused suggestions");
    } else {
        lines.push(Line::from(Span::styled(
            "  p: draft a post from the first suggestion",
            Style::default().fg(COLOR_DIM),
        )));
    }
    for suggestion in &view.suggestions {
        lines.push(Line::from(vec![
            Span::styled("  ✦ ", Style::default().fg(COLOR_AI)),
            Span::styled(suggestion.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" [{}]", suggestion.kind), Style::default().fg(COLOR_DIM)),
        ]));
        lines.push(Line::from(format!("    {}", truncate(&suggestion.content, PREVIEW_CHARS))));
    }

    section(&mut lines, "Content Calendar");
    if view.calendar.is_empty() {
        empty(&mut lines, "Nothing scheduled");
    }
    for post in &view.calendar {
        lines.push(calendar_line(post));
    }

    section(&mut lines, "Connect Platforms");
    if view.connect.is_empty() {
        empty(&mut lines, "All platforms connected");
    }
    for (index, platform) in view.connect.available().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  [{}] ", index + 1), Style::default().fg(COLOR_ACCENT)),
            Span::raw(format!("Connect {}", platform.name)),
        ]));
    }

    lines
}

fn calendar_line(post: &Post) -> Line<'static> {
    let when = post
        .scheduled_at
        .map(|at| at.format("%b %d %H:%M").to_string())
        .unwrap_or_default();
    Line::from(vec![
        Span::styled(format!("  {:<13}", when), Style::default().fg(COLOR_SCHEDULED)),
        Span::raw(truncate(&post.content, PREVIEW_CHARS)),
    ])
}

fn section(lines: &mut Vec<Line<'static>>, title: impl Into<String>) {
    if !lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        title.into(),
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    )));
}

fn empty(lines: &mut Vec<Line<'static>>, text: &str) {
    lines.push(Line::from(Span::styled(format!("  {}", text), Style::default().fg(COLOR_DIM))));
}

fn status_color(status: PostStatus) -> ratatui::style::Color {
    match status {
        PostStatus::Draft => COLOR_DIM,
        PostStatus::Scheduled => COLOR_SCHEDULED,
        PostStatus::Published => COLOR_SUCCESS,
        PostStatus::Failed => COLOR_ERROR,
    }
}

/// Cut `text` to one line of at most `max` columns, ending in `…` when shortened.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.width() <= max {
        return single_line;
    }
    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut kept = String::new();
    for c in single_line.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        kept.push(c);
    }
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::DashboardData;

    fn text(lines: &[Line<'static>]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_dashboard_sections() {
        let view = DashboardView::from_data(&DashboardData::default());
        let rendered = text(&body_lines(&view));

        for heading in [
            "Platform Performance",
            "Recent Posts",
            "AI Assistant",
            "Content Calendar",
            "Connect Platforms",
        ] {
            assert!(rendered.contains(heading), "missing {}", heading);
        }
        assert!(rendered.contains("All platforms connected"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("a\nb", 5), "a b");
        assert_eq!(truncate("☕☕☕☕", 5), "☕☕…");
    }
}
