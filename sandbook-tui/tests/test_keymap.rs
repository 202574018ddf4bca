//! Keybinding mapping, including Esc precedence across overlays.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sandbook_tui::app::{map_key, reduce, Action, AppState};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_quit_keys() {
    let state = AppState::default();

    assert!(matches!(
        map_key(&state, key(KeyCode::Char('q'))),
        Some(Action::Quit)
    ));
    assert!(matches!(map_key(&state, ctrl('c')), Some(Action::Quit)));
}

#[test]
fn test_new_random_keys() {
    let state = AppState::default();

    for code in [KeyCode::Char('n'), KeyCode::Char(' '), KeyCode::Right] {
        assert!(
            matches!(map_key(&state, key(code)), Some(Action::NewRandomRequested)),
            "{code:?} should request a new random article"
        );
    }
}

#[test]
fn test_go_back_keys() {
    let state = AppState::default();

    for code in [KeyCode::Char('b'), KeyCode::Backspace, KeyCode::Left] {
        assert!(
            matches!(map_key(&state, key(code)), Some(Action::GoBackRequested)),
            "{code:?} should request going back"
        );
    }
}

#[test]
fn test_scroll_keys() {
    let state = AppState::default();

    assert!(matches!(
        map_key(&state, key(KeyCode::Char('j'))),
        Some(Action::ScrollDown(1))
    ));
    assert!(matches!(
        map_key(&state, key(KeyCode::Char('k'))),
        Some(Action::ScrollUp(1))
    ));
    assert!(matches!(
        map_key(&state, key(KeyCode::PageDown)),
        Some(Action::ScrollDown(10))
    ));
    assert!(matches!(
        map_key(&state, key(KeyCode::PageUp)),
        Some(Action::ScrollUp(10))
    ));
}

#[test]
fn test_help_toggles() {
    let state = AppState::default();
    assert!(matches!(
        map_key(&state, key(KeyCode::Char('?'))),
        Some(Action::ShowHelp)
    ));

    let state = reduce(state, Action::ShowHelp);
    assert!(matches!(
        map_key(&state, key(KeyCode::Char('?'))),
        Some(Action::HideHelp)
    ));
}

#[test]
fn test_esc_dismisses_help_before_error() {
    let generation = 1;
    let mut state = reduce(AppState::default(), Action::NewRandomRequested);
    state = reduce(
        state,
        Action::RandomFailed {
            generation,
            message: "boom".to_string(),
        },
    );
    state = reduce(state, Action::ShowHelp);

    // Help first
    assert!(matches!(
        map_key(&state, key(KeyCode::Esc)),
        Some(Action::HideHelp)
    ));

    // Then the toast
    let state = reduce(state, Action::HideHelp);
    assert!(matches!(
        map_key(&state, key(KeyCode::Esc)),
        Some(Action::DismissToast)
    ));

    // Then the error panel
    let state = reduce(state, Action::DismissToast);
    assert!(matches!(
        map_key(&state, key(KeyCode::Esc)),
        Some(Action::DismissError)
    ));

    // Nothing left to dismiss
    let state = reduce(state, Action::DismissError);
    assert!(map_key(&state, key(KeyCode::Esc)).is_none());
}

#[test]
fn test_unbound_key_maps_to_nothing() {
    let state = AppState::default();
    assert!(map_key(&state, key(KeyCode::Char('z'))).is_none());
}
