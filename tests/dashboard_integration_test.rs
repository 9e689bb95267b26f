//! Dashboard loading through the query cache, and rendering the result.

mod common;

use common::*;
use ratatui::{backend::TestBackend, Terminal};
use serde_json::json;
use socialdash::app::AppState;
use socialdash::components::{Dashboard, DashboardView};
use socialdash::query::keys;
use socialdash::ui;

fn dashboard_gets(http: &MockHttpClient) -> usize {
    http.get_requests().iter().filter(|r| r.method == "GET").count()
}

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, state)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_second_load_is_served_from_cache() {
    let http = dashboard_http();
    let ctx = test_context(http.clone());

    let first = Dashboard::load(&ctx).await.unwrap();
    assert_eq!(dashboard_gets(&http), 5);

    let second = Dashboard::load(&ctx).await.unwrap();
    assert_eq!(dashboard_gets(&http), 5);
    assert_eq!(first.platforms, second.platforms);
    assert_eq!(ctx.queries.len(), 5);
}

#[tokio::test]
async fn test_refresh_refetches_everything() {
    let http = dashboard_http();
    let ctx = test_context(http.clone());
    Dashboard::load(&ctx).await.unwrap();

    Dashboard::refresh(&ctx).await.unwrap();

    assert_eq!(dashboard_gets(&http), 10);
    for key in keys::DASHBOARD {
        assert!(!ctx.queries.is_stale(key));
    }
}

#[tokio::test]
async fn test_failed_query_fails_the_load() {
    let http = dashboard_http();
    http.set_method_response(
        "GET",
        &url("/api/analytics"),
        MockResponse::json(503, json!({"message": "Analytics warming up"})),
    );
    let ctx = test_context(http);

    let err = Dashboard::load(&ctx).await.unwrap_err();

    assert_eq!(err.user_message(), "Analytics warming up");
    assert!(err.is_retryable());
    assert!(ctx.queries.is_stale(keys::ANALYTICS));
}

#[tokio::test]
async fn test_view_derived_from_loaded_data() {
    let ctx = test_context(dashboard_http());
    let data = Dashboard::load(&ctx).await.unwrap();

    let view = DashboardView::from_data(&data);

    let connect: Vec<&str> = view.connect.available().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(connect, vec!["Twitter", "LinkedIn", "Facebook", "YouTube"]);
    assert_eq!(view.cards.len(), 4);
    assert_eq!(view.cards[0].value, "15,230");
    assert_eq!(view.top_platform.as_deref(), Some("Instagram"));
    assert_eq!(view.platform_rows[0].name, "Instagram");
    assert_eq!(view.recent_posts.len(), 2);
    assert_eq!(view.suggestions.len(), 1);
}

#[tokio::test]
async fn test_loaded_dashboard_renders() {
    let ctx = test_context(dashboard_http());
    let data = Dashboard::load(&ctx).await.unwrap();
    let mut state = AppState::new(ctx.session.brand_name.clone());
    state.set_dashboard(&data);

    let screen = render(&state, 120, 50);

    assert!(screen.contains("YourBrand"));
    assert!(screen.contains("15,230"));
    assert!(screen.contains("↑ 12.5%"));
    assert!(screen.contains("4.8%"));
    assert!(screen.contains("+3 this month"));
    assert!(screen.contains("2 in next 7 days"));
    assert!(screen.contains("[1] Connect Twitter"));
}
