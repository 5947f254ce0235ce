//! Interactive terminal front end

use super::{Session, Ticker};
use crate::config::Settings;
use crate::game_of_life::{GridEngine, RandomSource, BOARD_SIZE};
use crate::utils::{BoardFormatter, Glyphs};
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, Write};
use std::time::{Duration, Instant};

const HELP: &str = "p pause | space step | c clear | t line | r random | g glider | q quit";

/// How the front end reacts to a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Quit,
    Press(char),
    Ignored,
}

/// Classify a raw key event
pub fn key_input(key: &KeyEvent) -> KeyInput {
    if key.kind != KeyEventKind::Press {
        return KeyInput::Ignored;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyInput::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyInput::Quit,
        KeyCode::Char(ch) => KeyInput::Press(ch),
        _ => KeyInput::Ignored,
    }
}

/// Board rows followed by a status and a help line
pub fn render_frame<S: RandomSource>(
    formatter: &BoardFormatter,
    engine: &GridEngine<S>,
    session: &Session,
) -> Vec<String> {
    let mut lines = formatter.lines(engine.board());
    let state = if session.is_paused() { "paused" } else { "running" };
    lines.push(format!(
        "{} [{}]",
        BoardFormatter::format_summary(engine.generation(), engine.board()),
        state
    ));
    lines.push(HELP.to_string());
    lines
}

/// Raw mode and alternate screen, undone on drop
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
            .context("Failed to switch to the alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen) {
            log::warn!("failed to restore screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("failed to disable raw mode: {e}");
        }
    }
}

fn draw(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;
    for (row, line) in lines.iter().enumerate() {
        queue!(out, cursor::MoveTo(0, row as u16), Print(line))?;
    }
    out.flush()
}

/// Run the interactive session until the user quits
pub fn run(settings: &Settings) -> Result<()> {
    let simulation = &settings.simulation;
    let mut engine = GridEngine::seeded(BOARD_SIZE, simulation.neighbor_bounds, simulation.seed);
    let formatter = BoardFormatter::new(Glyphs::from(&settings.display));
    let mut session = Session::new();
    let mut ticker = Ticker::new(
        Duration::from_millis(simulation.tick_interval_ms),
        Instant::now(),
    );

    log::info!(
        "starting interactive session: {}ms per generation, {:?} neighbor bounds",
        simulation.tick_interval_ms,
        simulation.neighbor_bounds
    );

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    draw(&mut stdout, &render_frame(&formatter, &engine, &session))?;

    loop {
        let now = Instant::now();
        if ticker.is_due(now) {
            let report = session.tick(&mut engine);
            log::trace!("tick: {report:?}");
            ticker.advance(now);
            draw(&mut stdout, &render_frame(&formatter, &engine, &session))?;
            continue;
        }

        if !event::poll(ticker.remaining(now)).context("Failed to poll terminal events")? {
            continue;
        }
        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) => match key_input(&key) {
                KeyInput::Quit => break,
                KeyInput::Press(ch) => session.press(ch),
                KeyInput::Ignored => {}
            },
            Event::Resize(..) => {
                draw(&mut stdout, &render_frame(&formatter, &engine, &session))?;
            }
            _ => {}
        }
    }

    log::info!("session ended at generation {}", engine.generation());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NeighborBounds;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_input(&press(KeyCode::Char('q'), KeyModifiers::NONE)), KeyInput::Quit);
        assert_eq!(key_input(&press(KeyCode::Esc, KeyModifiers::NONE)), KeyInput::Quit);
        assert_eq!(
            key_input(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyInput::Quit
        );
    }

    #[test]
    fn test_characters_are_forwarded() {
        for ch in ['c', 'g', 'p', ' ', 'z'] {
            assert_eq!(
                key_input(&press(KeyCode::Char(ch), KeyModifiers::NONE)),
                KeyInput::Press(ch)
            );
        }
        assert_eq!(key_input(&press(KeyCode::Up, KeyModifiers::NONE)), KeyInput::Ignored);
    }

    #[test]
    fn test_releases_are_ignored() {
        let mut key = press(KeyCode::Char('g'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_input(&key), KeyInput::Ignored);
    }

    #[test]
    fn test_frame_layout() {
        let engine = GridEngine::seeded(BOARD_SIZE, NeighborBounds::SkipLeadingEdge, Some(1));
        let mut session = Session::new();
        let formatter = BoardFormatter::default();

        let frame = render_frame(&formatter, &engine, &session);
        assert_eq!(frame.len(), BOARD_SIZE + 2);
        assert!(frame[BOARD_SIZE].ends_with("[running]"));
        assert_eq!(frame[BOARD_SIZE + 1], HELP);

        session.press('p');
        let mut engine = engine;
        session.tick(&mut engine);
        let frame = render_frame(&formatter, &engine, &session);
        assert!(frame[BOARD_SIZE].starts_with("Generation 1: 0 alive"));
        assert!(frame[BOARD_SIZE].ends_with("[paused]"));
    }
}
