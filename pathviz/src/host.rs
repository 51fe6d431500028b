//! Interactive terminal host.
//!
//! Maps keys and mouse clicks to session [`Command`]s, draws the grid with a
//! few status lines underneath, and animates searches by redrawing from the
//! render hook.

use std::io;
use std::ops::ControlFlow;
use std::time::Duration;

use pathviz_core::Grid;
use pathviz_crossterm::{Canvas, Input, Key, MouseAction, Style, Terminal, cell_at, palette};
use pathviz_search::{Heuristic, SearchEvent, SearchOutcome};

use crate::config::HostConfig;
use crate::session::{Algorithm, Command, Dispatch, Session};

/// How long the idle loop waits for input before redrawing.
const IDLE_POLL: Duration = Duration::from_millis(50);

const STATUS_LINES: u16 = 3;
const MIN_WIDTH: u16 = 80;

pub const HELP: &str = "m A* manhattan  e A* euclidean  d uniform-cost  r maze  c clear  s reset  q quit";
pub const MOUSE_HELP: &str = "left click: start, end, then walls   right click: erase";

/// What a single input asks the host to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Run(Command),
    Redraw,
    Quit,
}

/// Translate an input event. `n` is the grid size, used to map mouse
/// positions to cells.
pub fn action_for(input: Input, n: i32) -> Option<Action> {
    match input {
        Input::Key(key) => action_for_key(key),
        Input::Mouse {
            action,
            column,
            line,
        } => {
            let p = cell_at(column, line, n)?;
            match action {
                MouseAction::Main => Some(Action::Run(Command::Place(p))),
                MouseAction::Secondary => Some(Action::Run(Command::Erase(p))),
                _ => None,
            }
        }
        Input::Resize { .. } => Some(Action::Redraw),
        Input::Quit => Some(Action::Quit),
    }
}

fn action_for_key(key: Key) -> Option<Action> {
    let cmd = match key {
        Key::Char('m') => Command::Search(Algorithm::AStar(Heuristic::Manhattan)),
        Key::Char('e') => Command::Search(Algorithm::AStar(Heuristic::Euclidean)),
        Key::Char('d') => Command::Search(Algorithm::UniformCost),
        Key::Char('r') => Command::Regenerate,
        Key::Char('c') => Command::Clear,
        Key::Char('s') => Command::SoftReset,
        Key::Char('q') | Key::Escape => return Some(Action::Quit),
        _ => return None,
    };
    Some(Action::Run(cmd))
}

fn wants_quit(input: &Input) -> bool {
    matches!(
        input,
        Input::Quit | Input::Key(Key::Char('q')) | Input::Key(Key::Escape)
    )
}

fn draw(canvas: &mut Canvas, grid: &Grid, status: &str) {
    canvas.fill(Default::default());
    canvas.draw_grid(grid);
    let line = u16::try_from(grid.size()).unwrap_or(u16::MAX);
    let text = Style::default().with_fg(palette::WHITE);
    canvas.print(0, line, HELP, text);
    canvas.print(0, line.saturating_add(1), MOUSE_HELP, text);
    canvas.print(0, line.saturating_add(2), status, text.with_bold(true));
}

/// The interactive host loop around a [`Session`].
pub struct Host {
    session: Session,
    term: Terminal,
    canvas: Canvas,
    status: String,
    frame_delay: Duration,
}

impl Host {
    pub fn new(session: Session, config: &HostConfig) -> Self {
        let canvas = Canvas::for_grid(session.grid(), STATUS_LINES, MIN_WIDTH);
        Self {
            session,
            term: Terminal::new(),
            canvas,
            status: String::from("place a start and an end, then pick a search"),
            frame_delay: config.frame_delay(),
        }
    }

    /// Run until the user quits. The terminal is restored on return.
    pub fn run(mut self) -> io::Result<()> {
        self.term.init()?;
        let result = self.event_loop();
        self.term.close();
        result
    }

    fn event_loop(&mut self) -> io::Result<()> {
        loop {
            draw(&mut self.canvas, self.session.grid(), &self.status);
            self.term.present(&self.canvas)?;

            let n = self.session.grid().size();
            for input in self.term.poll(IDLE_POLL)? {
                match action_for(input, n) {
                    Some(Action::Quit) => return Ok(()),
                    Some(Action::Redraw) => self.term.invalidate(),
                    Some(Action::Run(cmd)) => {
                        if self.run_command(cmd)?.is_break() {
                            return Ok(());
                        }
                    }
                    None => {}
                }
            }
        }
    }

    /// Dispatch `cmd`; a search animates through the render hook and may be
    /// stopped with a quit key, which ends the session.
    fn run_command(&mut self, cmd: Command) -> io::Result<ControlFlow<()>> {
        if let Command::Search(algorithm) = cmd {
            self.status = format!("{algorithm}: searching, q to stop");
        }

        let canvas = &mut self.canvas;
        let term = &mut self.term;
        let status = &self.status;
        let delay = self.frame_delay;
        let mut failure: Option<io::Error> = None;

        let mut hook = |grid: &Grid, _: SearchEvent| -> ControlFlow<()> {
            draw(canvas, grid, status);
            let polled = term.present(canvas).and_then(|()| term.poll(delay));
            match polled {
                Ok(inputs) if inputs.iter().any(wants_quit) => ControlFlow::Break(()),
                Ok(_) => ControlFlow::Continue(()),
                Err(e) => {
                    failure = Some(e);
                    ControlFlow::Break(())
                }
            }
        };
        let dispatched = self.session.dispatch(cmd, &mut hook);

        if let Some(e) = failure {
            return Err(e);
        }
        match dispatched {
            Dispatch::Searched(report) => {
                self.status = report.to_string();
                if report.outcome == SearchOutcome::Interrupted {
                    return Ok(ControlFlow::Break(()));
                }
            }
            Dispatch::Mutated if matches!(cmd, Command::Regenerate | Command::Clear) => {
                self.status.clear();
            }
            Dispatch::Ignored if matches!(cmd, Command::Search(_)) => {
                self.status = String::from("place both a start and an end first");
            }
            _ => {}
        }
        Ok(ControlFlow::Continue(()))
    }
}
