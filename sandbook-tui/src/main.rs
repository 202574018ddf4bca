//! sandbook - read random Wikipedia articles in the terminal
//!
//! Fetches a random article, shows it in a card view, and navigates
//! forward (new random) or back through history on keys or mouse-drag
//! swipes.

use clap::Parser;
use crossterm::event::{KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use std::path::PathBuf;

use libsandbook::notify::{Level, Notifier, TracingNotifier};
use libsandbook::{Config, ContentMode, WikiClient};
use sandbook_tui::app::event::{EventHandler, TuiEvent};
use sandbook_tui::app::{map_key, reduce, Action, AppState};
use sandbook_tui::error::Result;
use sandbook_tui::services::ServiceHandle;
use sandbook_tui::swipe::{SwipeDetector, SwipeDirection};
use sandbook_tui::terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui};
use sandbook_tui::ui;

#[derive(Debug, Parser)]
#[command(
    name = "sandbook",
    version,
    about = "Swipe through random Wikipedia articles in your terminal"
)]
struct Args {
    /// Path to the config file
    #[arg(long, env = "SANDBOOK_CONFIG")]
    config: Option<PathBuf>,

    /// Open this exact title instead of a random article
    #[arg(long)]
    title: Option<String>,

    /// Override the MediaWiki API base URL
    #[arg(long)]
    api_base: Option<String>,

    /// Fetch full rendered articles instead of intro summaries
    #[arg(long, conflicts_with = "summary")]
    full: bool,

    /// Fetch intro summaries (overrides a `content_mode = "full"`
    /// config)
    #[arg(long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to the SANDBOOK_LOG file; stderr would garble the
    // alternate screen, so without it logging stays uninitialized.
    if std::env::var_os("SANDBOOK_LOG").is_some() {
        libsandbook::logging::init_default();
    }

    let mut config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load_or_default()?,
    };
    if let Some(api_base) = args.api_base {
        config.api.base_url = api_base;
    }
    if args.full {
        config.api.content_mode = ContentMode::Full;
    } else if args.summary {
        config.api.content_mode = ContentMode::Summary;
    }

    let client = WikiClient::new(&config.api)?;
    let services = ServiceHandle::new(client)?;
    let mut notifier = TracingNotifier;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(
        &mut terminal,
        &config,
        &services,
        &mut notifier,
        args.title,
    );

    restore_terminal(terminal)?;

    result.map_err(Into::into)
}

fn run_app(
    terminal: &mut Tui,
    config: &Config,
    services: &ServiceHandle,
    notifier: &mut dyn Notifier,
    initial_title: Option<String>,
) -> Result<()> {
    let mode = config.api.content_mode;
    let mut state = AppState::new(config.ui.clone());
    let mut swipe = SwipeDetector::new(config.ui.swipe_threshold);

    let event_handler = EventHandler::new(config.ui.tick_rate_ms);
    let outcomes = services.outcomes();

    // The initial navigation happens here, structurally once, before
    // the event loop; the steady-state handler never re-triggers it.
    let initial = match initial_title {
        Some(title) => Action::OpenTitleRequested(title),
        None => Action::NewRandomRequested,
    };
    state = apply(state, initial, services, notifier, mode);

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) if key.kind == KeyEventKind::Press => map_key(&state, key),
            TuiEvent::Key(_) => None,
            TuiEvent::Mouse(mouse) => map_mouse(&mut swipe, mouse),
            TuiEvent::Resize(w, h) => Some(Action::Resize(w, h)),
            TuiEvent::Tick => Some(Action::Tick),
        };

        if let Some(action) = action {
            state = apply(state, action, services, notifier, mode);
        }

        // Drain fetch completions delivered since the last pass
        while let Ok(outcome) = outcomes.try_recv() {
            state = apply(state, outcome.into(), services, notifier, mode);
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Dispatch one action: reduce, then perform the side effects the
/// accepted action implies (fetches, notifications).
fn apply(
    state: AppState,
    action: Action,
    services: &ServiceHandle,
    notifier: &mut dyn Notifier,
    mode: ContentMode,
) -> AppState {
    let prev_generation = state.generation;
    let next = reduce(state, action.clone());

    match &action {
        Action::NewRandomRequested => {
            services.fetch_random(next.generation);
        }

        // Accepted iff the generation advanced; a rejected go-back
        // (start of history) must not fetch
        Action::OpenTitleRequested(_) | Action::GoBackRequested => {
            if next.generation != prev_generation {
                if let Some(article) = &next.article {
                    services.fetch_content(next.generation, article.title.clone(), mode);
                }
            }
        }

        Action::TitleResolved { generation, title } if *generation == next.generation => {
            services.fetch_content(*generation, title.clone(), mode);
        }

        Action::RandomFailed {
            generation,
            message,
        }
        | Action::ContentFailed {
            generation,
            message,
        } if *generation == next.generation => {
            notifier.notify(Level::Error, message);
        }

        _ => {}
    }

    next
}

/// Feed mouse events to the swipe detector; a completed drag past the
/// threshold becomes a navigation. Wheel events scroll.
fn map_mouse(swipe: &mut SwipeDetector, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            swipe.begin(f64::from(mouse.column));
            None
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            swipe.update(f64::from(mouse.column));
            None
        }
        MouseEventKind::Up(MouseButton::Left) => match swipe.end()? {
            SwipeDirection::Left => Some(Action::NewRandomRequested),
            SwipeDirection::Right => Some(Action::GoBackRequested),
        },
        MouseEventKind::ScrollUp => Some(Action::ScrollUp(3)),
        MouseEventKind::ScrollDown => Some(Action::ScrollDown(3)),
        _ => None,
    }
}
