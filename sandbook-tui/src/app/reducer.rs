//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`, no I/O, no side effects. The event
//! loop performs the fetches implied by accepted navigation actions;
//! it can tell an accepted navigation from a rejected one because the
//! generation counter advanced.
//!
//! Per navigation the state machine is:
//! `Idle -> Loading(title known, content None) -> Loaded | Errored`,
//! both terminal until the next navigation restarts at Loading.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libsandbook::Article;

use super::actions::Action;
use super::state::{AppState, Toast};

/// Pure reducer function
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::Tick => {
            let toast = state.toast.and_then(|toast| {
                let ticks_left = toast.ticks_left.saturating_sub(1);
                (ticks_left > 0).then_some(Toast { ticks_left, ..toast })
            });
            AppState { toast, ..state }
        }

        // The terminal handles reflow itself
        Action::Resize(_, _) => state,

        // === Navigation intents ===
        Action::NewRandomRequested => AppState {
            generation: state.generation + 1,
            is_loading: true,
            error: None,
            scroll: 0,
            ..state
        },

        Action::OpenTitleRequested(title) => {
            let mut history = state.history.clone();
            history.navigate_to(&title);
            AppState {
                generation: state.generation + 1,
                is_loading: true,
                error: None,
                scroll: 0,
                article: Some(Article::pending(title)),
                history,
                ..state
            }
        }

        Action::GoBackRequested => {
            let mut history = state.history.clone();
            match history.back().map(str::to_string) {
                Some(title) => AppState {
                    generation: state.generation + 1,
                    is_loading: true,
                    error: None,
                    scroll: 0,
                    article: Some(Article::pending(title)),
                    history,
                    ..state
                },
                // At the start of history: nothing changes, no fetch
                None => state,
            }
        }

        // === Fetch completions ===
        Action::TitleResolved { generation, title } => {
            if generation != state.generation {
                return state;
            }
            let mut history = state.history.clone();
            history.navigate_to(&title);
            AppState {
                // Title visible while content loads
                article: Some(Article::pending(title)),
                history,
                ..state
            }
        }

        Action::ContentLoaded {
            generation,
            content,
        } => {
            if generation != state.generation {
                return state;
            }
            let article = state
                .article
                .map(|article| Article::loaded(article.title, content));
            AppState {
                article,
                is_loading: false,
                error: None,
                ..state
            }
        }

        Action::RandomFailed {
            generation,
            message,
        } => {
            if generation != state.generation {
                return state;
            }
            // Prior article stays untouched; the title resolution
            // never got far enough to replace it
            let toast = Toast::error(&message, state.config.toast_ticks);
            AppState {
                is_loading: false,
                error: Some(message),
                toast: Some(toast),
                ..state
            }
        }

        Action::ContentFailed {
            generation,
            message,
        } => {
            if generation != state.generation {
                return state;
            }
            let article = state.article.map(|article| Article::pending(article.title));
            let toast = Toast::error(&message, state.config.toast_ticks);
            AppState {
                article,
                is_loading: false,
                error: Some(message),
                toast: Some(toast),
                ..state
            }
        }

        // === Scrolling ===
        Action::ScrollUp(lines) => AppState {
            scroll: state.scroll.saturating_sub(lines),
            ..state
        },

        Action::ScrollDown(lines) => AppState {
            scroll: state.scroll.saturating_add(lines),
            ..state
        },

        // === Overlays ===
        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        Action::DismissToast => AppState {
            toast: None,
            ..state
        },

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },
    }
}

/// Map a key press to a semantic action. This is where keybindings
/// are defined; the event loop dispatches the result through `reduce`
/// and performs any fetch it implies.
pub fn map_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Action::Quit),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),

        (KeyCode::F(1), _) | (KeyCode::Char('?'), KeyModifiers::NONE) => {
            Some(if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            })
        }

        (KeyCode::Esc, _) if state.help_visible => Some(Action::HideHelp),
        (KeyCode::Esc, _) if state.toast.is_some() => Some(Action::DismissToast),
        (KeyCode::Esc, _) if state.error.is_some() => Some(Action::DismissError),

        (KeyCode::Char('n'), KeyModifiers::NONE)
        | (KeyCode::Char(' '), KeyModifiers::NONE)
        | (KeyCode::Right, KeyModifiers::NONE) => Some(Action::NewRandomRequested),

        (KeyCode::Char('b'), KeyModifiers::NONE)
        | (KeyCode::Backspace, KeyModifiers::NONE)
        | (KeyCode::Left, KeyModifiers::NONE) => Some(Action::GoBackRequested),

        (KeyCode::Up, KeyModifiers::NONE) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            Some(Action::ScrollUp(1))
        }
        (KeyCode::Down, KeyModifiers::NONE) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            Some(Action::ScrollDown(1))
        }
        (KeyCode::PageUp, _) => Some(Action::ScrollUp(10)),
        (KeyCode::PageDown, _) => Some(Action::ScrollDown(10)),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::default();
        let copy = state.clone();

        let next = reduce(copy.clone(), Action::Quit);

        assert!(!copy.should_quit);
        assert!(next.should_quit);
    }

    #[test]
    fn test_new_random_bumps_generation_and_loads() {
        let state = AppState::default();
        let next = reduce(state, Action::NewRandomRequested);

        assert_eq!(next.generation, 1);
        assert!(next.is_loading);
        assert!(next.error.is_none());
    }

    #[test]
    fn test_title_resolved_shows_title_before_content() {
        let state = reduce(AppState::default(), Action::NewRandomRequested);
        let next = reduce(
            state,
            Action::TitleResolved {
                generation: 1,
                title: "Aldabra".to_string(),
            },
        );

        let article = next.article.expect("article should be set");
        assert_eq!(article.title, "Aldabra");
        assert!(article.content.is_none());
        assert!(next.is_loading);
        assert_eq!(next.history.current(), Some("Aldabra"));
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut state = reduce(AppState::default(), Action::NewRandomRequested);
        state = reduce(state, Action::NewRandomRequested);
        assert_eq!(state.generation, 2);

        let next = reduce(
            state.clone(),
            Action::ContentLoaded {
                generation: 1,
                content: "stale".to_string(),
            },
        );

        assert!(next.article.is_none());
        assert!(next.is_loading);
    }

    #[test]
    fn test_toast_expires_on_ticks() {
        let mut state = AppState::default();
        state.toast = Some(Toast::error("boom", 2));

        let state = reduce(state, Action::Tick);
        assert!(state.toast.is_some());

        let state = reduce(state, Action::Tick);
        assert!(state.toast.is_none());
    }
}
