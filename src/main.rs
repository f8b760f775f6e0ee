//! Terminal runner (default binary).
//!
//! Acts as the three outer collaborators of the game core: the tick source
//! (a poll timeout equal to the session's interval), the input adapter
//! (crossterm keys to commands) and the rendering surface (framebuffer
//! renderer).

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};

use blockfall::config::{self, Args};
use blockfall::core::{Session, SessionConfig, TickOutcome};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::from_env(&args)?;

    if args.print_config {
        println!("{}", config::to_json(&config)?);
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let summary = result?;
    println!(
        "[blockfall] score={} level={} lines={} best={} games={}",
        summary.score, summary.level, summary.lines, summary.best, summary.games
    );
    Ok(())
}

struct Summary {
    score: u32,
    level: u32,
    lines: u32,
    best: u32,
    games: u32,
}

fn run(term: &mut TerminalRenderer, config: SessionConfig) -> Result<Summary> {
    let mut session = Session::new(config);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    let mut last_tick = Instant::now();
    let mut best = 0;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let tick_duration = Duration::from_millis(session.interval_ms() as u64);
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(Summary {
                            score: session.score(),
                            level: session.level(),
                            lines: session.lines(),
                            best: best.max(session.score()),
                            games: session.episode() + 1,
                        });
                    }
                    if let Some(command) = handle_key_event(key) {
                        let was_over = session.game_over();
                        dirty |= session.command(command);
                        if was_over && !session.game_over() {
                            last_tick = Instant::now();
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if !session.game_over() {
                // Interval changes are picked up on the next loop iteration.
                if let TickOutcome::Locked(event) = session.tick() {
                    if event.game_over {
                        best = best.max(session.score());
                    }
                }
                dirty = true;
            }
        }
    }
}
