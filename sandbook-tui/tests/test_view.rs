//! Presenter precedence: loading, error, empty, empty summary, then
//! content, in that order and mutually exclusive.

use libsandbook::Article;
use sandbook_tui::app::AppState;
use sandbook_tui::ui::article::{view_state, ArticleView};

#[test]
fn test_fresh_state_shows_prompt() {
    let state = AppState::default();
    assert_eq!(view_state(&state), ArticleView::EmptyPrompt);
}

#[test]
fn test_loading_wins_over_everything() {
    let mut state = AppState::default();
    state.is_loading = true;
    state.error = Some("earlier failure".to_string());
    state.article = Some(Article::loaded("T", "body"));

    assert_eq!(view_state(&state), ArticleView::Skeleton);
}

#[test]
fn test_error_wins_over_content() {
    let mut state = AppState::default();
    state.error = Some("timeout".to_string());
    state.article = Some(Article::loaded("T", "body"));

    assert_eq!(view_state(&state), ArticleView::ErrorPanel("timeout"));
}

#[test]
fn test_pending_article_shows_prompt() {
    // Title known, content still None
    let mut state = AppState::default();
    state.article = Some(Article::pending("T"));

    assert_eq!(view_state(&state), ArticleView::EmptyPrompt);
}

#[test]
fn test_blank_content_shows_empty_summary() {
    let mut state = AppState::default();
    state.article = Some(Article::loaded("Some list page", ""));

    assert_eq!(
        view_state(&state),
        ArticleView::EmptySummary {
            title: "Some list page"
        }
    );
}

#[test]
fn test_loaded_article_shows_content() {
    let mut state = AppState::default();
    state.article = Some(Article::loaded("Aldabra", "Aldabra is an atoll."));

    assert_eq!(
        view_state(&state),
        ArticleView::Content {
            title: "Aldabra",
            body: "Aldabra is an atoll.",
        }
    );
}
