mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use bounce_shooter::compute::{init_state, pointer_motion, update};
use bounce_shooter::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use bounce_shooter::entities::{GameState, ScreenBounds};
use bounce_shooter::error::Result;
use bounce_shooter::viewport::Viewport;

const FRAME: Duration = Duration::from_micros(16_667); // ≈60 FPS

// ── Input ─────────────────────────────────────────────────────────────────────

/// What the game loop should do after an input event.
enum Input {
    Continue,
    Quit,
}

/// Apply one terminal event.  Pointer motion moves the player, a resize
/// rebuilds the viewport, and q / Esc / Ctrl-C close the game.
fn handle_event(event: Event, state: &mut GameState, view: &mut Viewport) -> Input {
    match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved | MouseEventKind::Drag(_),
            column,
            row,
            ..
        }) => {
            let target = view.to_world(column, row);
            *state = pointer_motion(state, target.x, target.y);
        }
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Input::Quit,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Input::Quit;
            }
            _ => {}
        },
        Event::Resize(cols, rows) => match Viewport::new(cols, rows, state.bounds) {
            Ok(resized) => *view = resized,
            Err(e) => warn!("keeping previous viewport: {}", e),
        },
        _ => {}
    }
    Input::Continue
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One update and one render per frame until the player quits.  `dt` is the
/// wall time the previous frame actually took.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    view: &mut Viewport,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Input::Quit = handle_event(ev, state, view) {
                info!("quit after {} frames, score {}", state.frame, state.score);
                return Ok(());
            }
        }

        let dt = last.elapsed().as_secs_f32();
        last = Instant::now();
        *state = update(state, dt);

        display::render(out, view, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let bounds = ScreenBounds::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let (cols, rows) = terminal::size()?;
    let mut view = Viewport::new(cols, rows, bounds)?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let mut state = init_state(bounds, &mut thread_rng());
    let result = game_loop(&mut out, &mut state, &mut view, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
