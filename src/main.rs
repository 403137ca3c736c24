//! Terminal raycaster runner (default binary).
//!
//! Generates a fresh random map per session, then runs the frame loop:
//! poll input, advance the simulation, cast one ray per terminal column,
//! flush the framebuffer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_raycaster::core::Grid;
use tui_raycaster::engine::FrameDriver;
use tui_raycaster::input::{should_quit, InputHandler};
use tui_raycaster::term::{SceneView, TerminalRenderer, Viewport};
use tui_raycaster::types::{MAP_HEIGHT, MAP_WIDTH, TICK_MS, WALL_PROBABILITY};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    // Fresh map every session, like the original's per-load re-roll; tests
    // go through Grid::generate with fixed seeds instead.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let grid = Grid::generate(MAP_WIDTH, MAP_HEIGHT, WALL_PROBABILITY, seed)?;

    let mut driver = FrameDriver::new(grid);
    let view = SceneView;
    let mut input_handler = InputHandler::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        input_handler.handle_key_press(key.code);
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key.code);
                    }
                },
                Event::Resize(_, _) => {
                    // Next frame renders at the new size.
                }
                _ => {}
            }
        }

        // Tick: move, cast, draw.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let input = input_handler.snapshot();
            driver.frame(input, usize::from(w));

            let fb = view.render(driver.hits(), &driver.pose(), Viewport::new(w, h));
            term.draw(&fb)?;
        }
    }
}
