use std::io;

use anyhow::Context;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::app::settings::Settings;
use crate::app::{Move, Session};
use crate::fetch::{load_collection, CachedImageSource, HttpFetcher, ImageSource};
use crate::i18n::{Resources, Translate};
use crate::input::{read_event, InputEvent};
use crate::layout::TerminalFrame;
use crate::runner::handlers::{self, Outcome};
use crate::runner::terminal::TerminalGuard;
use crate::ui::{self, Colors, Renderer};

/// Load the beer list, take over the terminal and browse until quit.
///
/// The list is fetched before the terminal is touched, so a network error
/// or an empty list exits with a plain message and the screen untouched.
pub fn run_app(settings: &Settings) -> anyhow::Result<()> {
    let fetcher = HttpFetcher::new(settings.timeout)?;
    let collection = load_collection(&fetcher, &settings.url)
        .with_context(|| format!("failed to load beers from {}", settings.url))?;
    let mut session = Session::new(collection)?;

    let text = Resources::load(settings.language, settings.messages_dir.as_deref());
    let images = CachedImageSource::new(&fetcher, settings.image_cache);
    let renderer = Renderer::new(images, text, settings.filter);
    let colors = Colors::new(settings.background);

    let mut terminal = TerminalGuard::acquire()?;
    let renders = run_loop(&mut *terminal, &mut session, &renderer, &colors, read_event)?;
    tracing::info!(renders, "quit requested");
    Ok(())
}

/// Strict request/response loop: each event causes at most one cursor
/// transition and at most one render. Returns the number of renders.
pub fn run_loop<B, S, T, E>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    renderer: &Renderer<S, T>,
    colors: &Colors,
    mut next_event: E,
) -> anyhow::Result<usize>
where
    B: Backend,
    S: ImageSource,
    T: Translate,
    E: FnMut() -> io::Result<InputEvent>,
{
    session.navigate(Move::First);
    draw(terminal, session, renderer, colors)?;
    let mut renders = 1;

    loop {
        let redraw = match next_event()? {
            InputEvent::Key(key) => match handlers::handle_key(session, &key) {
                Outcome::Quit => break,
                Outcome::Redraw => true,
                Outcome::Idle => false,
            },
            InputEvent::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
                true
            }
            InputEvent::Other => false,
        };
        if redraw {
            draw(terminal, session, renderer, colors)?;
            renders += 1;
        }
    }
    Ok(renders)
}

/// Sample the terminal size, build the frame and paint it in one draw.
fn draw<B, S, T>(
    terminal: &mut Terminal<B>,
    session: &Session,
    renderer: &Renderer<S, T>,
    colors: &Colors,
) -> anyhow::Result<()>
where
    B: Backend,
    S: ImageSource,
    T: Translate,
{
    let frame = TerminalFrame::from(terminal.size()?);
    let rendered = renderer.render(session, frame)?;
    terminal.draw(|f| ui::paint(f, &rendered, colors))?;
    Ok(())
}
