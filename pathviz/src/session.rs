//! The session controller: owns the grid and turns user commands into grid
//! mutations and searches.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pathviz_core::{CellState, Grid, GridError, MazeGen, Pos};
use pathviz_search::{Heuristic, RenderHook, SearchOutcome, a_star, uniform_cost};

use crate::config::SessionConfig;

/// A search algorithm, with its heuristic where it takes one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    AStar(Heuristic),
    UniformCost,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::AStar(Heuristic::Manhattan),
        Algorithm::AStar(Heuristic::Euclidean),
        Algorithm::UniformCost,
    ];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AStar(h) => write!(f, "A* ({})", h.label()),
            Self::UniformCost => f.write_str("uniform-cost"),
        }
    }
}

/// A user command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// First placement sets the start, the second the end, later ones
    /// barriers.
    Place(Pos),
    /// Reset a cell to `Empty`, forgetting it as start or end.
    Erase(Pos),
    Search(Algorithm),
    /// Replace the grid with a random bordered maze with endpoints.
    Regenerate,
    /// Replace the grid with an empty bordered one.
    Clear,
    /// Wipe search marks, keeping barriers and endpoints.
    SoftReset,
}

/// What a search run produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub outcome: SearchOutcome,
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            SearchOutcome::Found(goal) => write!(
                f,
                "{}: path of {} steps, {} cells expanded",
                self.algorithm, goal.cost, goal.expanded
            ),
            SearchOutcome::NoPath { expanded } => {
                write!(f, "{}: no path, {} cells expanded", self.algorithm, expanded)
            }
            SearchOutcome::Interrupted => write!(f, "{}: interrupted", self.algorithm),
        }
    }
}

/// Result of [`Session::dispatch`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The command did not apply (out of bounds, missing endpoint, no-op).
    Ignored,
    /// The grid changed.
    Mutated,
    Searched(SearchReport),
}

/// An interactive pathfinding session.
pub struct Session<R: Rng = StdRng> {
    grid: Grid,
    config: SessionConfig,
    mazes: MazeGen<R>,
}

impl Session<StdRng> {
    /// Start a session with an empty bordered grid. Mazes are seeded from
    /// `config.seed`, or from a freshly drawn seed that is logged.
    pub fn new(config: SessionConfig) -> Result<Self, GridError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!("session seed {seed}");
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(config: SessionConfig, rng: R) -> Result<Self, GridError> {
        let grid = Grid::bordered(config.size, config.logical_width)?;
        let mazes = MazeGen::new(rng, config.density);
        Ok(Self {
            grid,
            config,
            mazes,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.grid.start()
    }

    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.grid.end()
    }

    /// Apply `cmd`. Searches render through `hook`.
    pub fn dispatch<H: RenderHook + ?Sized>(&mut self, cmd: Command, hook: &mut H) -> Dispatch {
        match cmd {
            Command::Place(p) => self.place(p),
            Command::Erase(p) => self.erase(p),
            Command::Search(algorithm) => self.search(algorithm, hook),
            Command::Regenerate => self.regenerate(),
            Command::Clear => {
                self.grid.full_reset();
                log::debug!("grid cleared");
                Dispatch::Mutated
            }
            Command::SoftReset => {
                self.grid.soft_reset();
                log::debug!("search marks cleared");
                Dispatch::Mutated
            }
        }
    }

    fn place(&mut self, p: Pos) -> Dispatch {
        let state = match self.grid.state(p) {
            Ok(s) => s,
            Err(e) => {
                log::debug!("place ignored: {e}");
                return Dispatch::Ignored;
            }
        };
        let target = if self.grid.start().is_none() && state != CellState::End {
            CellState::Start
        } else if self.grid.end().is_none() && state != CellState::Start {
            CellState::End
        } else if !state.is_endpoint() {
            CellState::Barrier
        } else {
            return Dispatch::Ignored;
        };
        self.apply(p, target)
    }

    fn erase(&mut self, p: Pos) -> Dispatch {
        self.apply(p, CellState::Empty)
    }

    fn apply(&mut self, p: Pos, state: CellState) -> Dispatch {
        match self.grid.set_state(p, state) {
            Ok(prev) if prev == state => Dispatch::Ignored,
            Ok(_) => Dispatch::Mutated,
            Err(e) => {
                log::debug!("set {state:?} ignored: {e}");
                Dispatch::Ignored
            }
        }
    }

    fn search<H: RenderHook + ?Sized>(&mut self, algorithm: Algorithm, hook: &mut H) -> Dispatch {
        let (Some(start), Some(end)) = (self.grid.start(), self.grid.end()) else {
            log::debug!("{algorithm} ignored: start and end must both be set");
            return Dispatch::Ignored;
        };
        self.grid.rebuild_adjacency();
        log::info!("{algorithm}: searching {start} -> {end}");

        let result = match algorithm {
            Algorithm::AStar(h) => a_star(&mut self.grid, start, end, h, hook),
            Algorithm::UniformCost => uniform_cost(&mut self.grid, start, end, hook),
        };
        match result {
            Ok(outcome) => {
                let report = SearchReport { algorithm, outcome };
                log::info!("{report}");
                Dispatch::Searched(report)
            }
            Err(e) => {
                log::warn!("{algorithm} failed: {e}");
                Dispatch::Ignored
            }
        }
    }

    fn regenerate(&mut self) -> Dispatch {
        match self.mazes.generate(self.config.size, self.config.logical_width) {
            Ok(maze) => {
                self.grid = maze.grid;
                log::info!(
                    "random maze: density {}, {} barriers, start {}, end {}",
                    self.config.density,
                    self.grid.count(CellState::Barrier),
                    maze.start,
                    maze.end
                );
                Dispatch::Mutated
            }
            Err(e) => {
                log::warn!("maze generation failed: {e}");
                Dispatch::Ignored
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use pathviz_search::{NoRender, SearchEvent};

    use super::*;

    fn session(size: i32) -> Session {
        Session::new(SessionConfig {
            size,
            logical_width: size * 10,
            seed: Some(7),
            ..SessionConfig::default()
        })
        .unwrap()
    }

    fn run(s: &mut Session, cmd: Command) -> Dispatch {
        s.dispatch(cmd, &mut NoRender)
    }

    fn states(s: &Session) -> Vec<CellState> {
        s.grid().iter().map(|c| c.state).collect()
    }

    #[test]
    fn starts_bordered_without_endpoints() {
        let s = session(6);
        assert_eq!(s.grid().count(CellState::Barrier), 20);
        assert_eq!(s.start(), None);
        assert_eq!(s.end(), None);
    }

    #[test]
    fn place_sets_start_then_end_then_barriers() {
        let mut s = session(6);
        let (a, b, c) = (Pos::new(1, 1), Pos::new(4, 4), Pos::new(2, 2));
        assert_eq!(run(&mut s, Command::Place(a)), Dispatch::Mutated);
        assert_eq!(run(&mut s, Command::Place(b)), Dispatch::Mutated);
        assert_eq!(run(&mut s, Command::Place(c)), Dispatch::Mutated);
        assert_eq!(s.start(), Some(a));
        assert_eq!(s.end(), Some(b));
        assert_eq!(s.grid().state(c).unwrap(), CellState::Barrier);

        // Placing on an endpoint or an existing barrier changes nothing.
        assert_eq!(run(&mut s, Command::Place(a)), Dispatch::Ignored);
        assert_eq!(run(&mut s, Command::Place(b)), Dispatch::Ignored);
        assert_eq!(run(&mut s, Command::Place(c)), Dispatch::Ignored);
    }

    #[test]
    fn placing_on_start_does_not_make_it_the_end() {
        let mut s = session(6);
        let a = Pos::new(1, 1);
        run(&mut s, Command::Place(a));
        assert_eq!(run(&mut s, Command::Place(a)), Dispatch::Ignored);
        assert_eq!(s.end(), None);
    }

    #[test]
    fn endpoint_may_replace_barrier() {
        let mut s = session(6);
        let wall = Pos::new(0, 3);
        assert_eq!(run(&mut s, Command::Place(wall)), Dispatch::Mutated);
        assert_eq!(s.start(), Some(wall));
    }

    #[test]
    fn erase_forgets_endpoints() {
        let mut s = session(6);
        let (a, b) = (Pos::new(1, 1), Pos::new(4, 4));
        run(&mut s, Command::Place(a));
        run(&mut s, Command::Place(b));
        assert_eq!(run(&mut s, Command::Erase(a)), Dispatch::Mutated);
        assert_eq!(s.start(), None);
        assert_eq!(s.grid().state(a).unwrap(), CellState::Empty);
        // The next placement refills the missing start.
        let c = Pos::new(2, 3);
        run(&mut s, Command::Place(c));
        assert_eq!(s.start(), Some(c));
        assert_eq!(s.end(), Some(b));
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut s = session(6);
        let before = states(&s);
        assert_eq!(run(&mut s, Command::Place(Pos::new(6, 0))), Dispatch::Ignored);
        assert_eq!(run(&mut s, Command::Erase(Pos::new(-1, 2))), Dispatch::Ignored);
        assert_eq!(states(&s), before);
    }

    #[test]
    fn search_needs_both_endpoints() {
        let mut s = session(6);
        run(&mut s, Command::Place(Pos::new(1, 1)));
        let before = states(&s);
        for algorithm in Algorithm::ALL {
            assert_eq!(run(&mut s, Command::Search(algorithm)), Dispatch::Ignored);
        }
        assert_eq!(states(&s), before);
    }

    #[test]
    fn small_grid_examples() {
        let mut s = session(5);
        run(&mut s, Command::Place(Pos::new(1, 1)));
        run(&mut s, Command::Place(Pos::new(3, 3)));
        let Dispatch::Searched(report) =
            run(&mut s, Command::Search(Algorithm::AStar(Heuristic::Manhattan)))
        else {
            panic!("search did not run");
        };
        assert_eq!(report.outcome.cost(), Some(4));

        run(&mut s, Command::SoftReset);
        run(&mut s, Command::Place(Pos::new(2, 2)));
        for algorithm in Algorithm::ALL {
            run(&mut s, Command::SoftReset);
            let Dispatch::Searched(report) = run(&mut s, Command::Search(algorithm)) else {
                panic!("search did not run");
            };
            assert_eq!(report.outcome.cost(), Some(4), "{algorithm}");
        }
    }

    #[test]
    fn search_sees_barriers_placed_since_last_run() {
        let mut s = session(7);
        run(&mut s, Command::Place(Pos::new(3, 1)));
        run(&mut s, Command::Place(Pos::new(3, 5)));
        let Dispatch::Searched(first) = run(&mut s, Command::Search(Algorithm::UniformCost)) else {
            panic!("search did not run");
        };
        assert_eq!(first.outcome.cost(), Some(4));

        run(&mut s, Command::SoftReset);
        for row in 1..5 {
            run(&mut s, Command::Place(Pos::new(row, 3)));
        }
        let Dispatch::Searched(second) = run(&mut s, Command::Search(Algorithm::UniformCost)) else {
            panic!("search did not run");
        };
        assert_eq!(second.outcome.cost(), Some(8));
    }

    #[test]
    fn walled_off_end_reports_no_path() {
        let mut s = session(7);
        run(&mut s, Command::Place(Pos::new(1, 1)));
        run(&mut s, Command::Place(Pos::new(5, 5)));
        for row in 1..6 {
            run(&mut s, Command::Place(Pos::new(row, 3)));
        }
        let Dispatch::Searched(report) =
            run(&mut s, Command::Search(Algorithm::AStar(Heuristic::Euclidean)))
        else {
            panic!("search did not run");
        };
        assert!(matches!(report.outcome, SearchOutcome::NoPath { .. }));
        assert_eq!(s.grid().count(CellState::Path), 0);
        assert!(s.grid().count(CellState::Closed) > 0);
    }

    #[test]
    fn hook_can_interrupt() {
        let mut s = session(10);
        run(&mut s, Command::Place(Pos::new(1, 1)));
        run(&mut s, Command::Place(Pos::new(8, 8)));
        let mut hook = |_: &Grid, _: SearchEvent| ControlFlow::Break(());
        let result = s.dispatch(Command::Search(Algorithm::UniformCost), &mut hook);
        let Dispatch::Searched(report) = result else {
            panic!("search did not run");
        };
        assert_eq!(report.outcome, SearchOutcome::Interrupted);
        assert_eq!(report.to_string(), "uniform-cost: interrupted");
    }

    #[test]
    fn regenerate_places_interior_endpoints() {
        let mut s = session(20);
        assert_eq!(run(&mut s, Command::Regenerate), Dispatch::Mutated);
        let (start, end) = (s.start().unwrap(), s.end().unwrap());
        assert_ne!(start, end);
        for p in [start, end] {
            assert!((1..19).contains(&p.row) && (1..19).contains(&p.col), "{p}");
        }
        assert!(s.grid().iter().all(|c| {
            let p = c.pos();
            let border = p.row == 0 || p.col == 0 || p.row == 19 || p.col == 19;
            !border || c.state == CellState::Barrier
        }));
    }

    #[test]
    fn seeded_sessions_regenerate_identically() {
        let mut a = session(30);
        let mut b = session(30);
        for _ in 0..3 {
            run(&mut a, Command::Regenerate);
            run(&mut b, Command::Regenerate);
            assert_eq!(states(&a), states(&b));
        }
    }

    #[test]
    fn maze_density_is_about_a_fifth() {
        let mut s = session(50);
        run(&mut s, Command::Regenerate);
        let interior = s
            .grid()
            .iter()
            .filter(|c| c.pos().row > 0 && c.pos().row < 49 && c.pos().col > 0 && c.pos().col < 49);
        let (total, barriers) = interior.fold((0usize, 0usize), |(t, b), c| {
            (t + 1, b + usize::from(c.state == CellState::Barrier))
        });
        let density = barriers as f64 / total as f64;
        assert!((density - 0.2).abs() < 0.04, "density {density}");
    }

    #[test]
    fn clear_and_soft_reset() {
        let mut s = session(12);
        run(&mut s, Command::Regenerate);
        run(&mut s, Command::Search(Algorithm::UniformCost));
        let barriers = s.grid().count(CellState::Barrier);

        assert_eq!(run(&mut s, Command::SoftReset), Dispatch::Mutated);
        assert_eq!(s.grid().count(CellState::Barrier), barriers);
        assert!(s.start().is_some() && s.end().is_some());
        for mark in [CellState::Open, CellState::Closed, CellState::Path] {
            assert_eq!(s.grid().count(mark), 0);
        }

        assert_eq!(run(&mut s, Command::Clear), Dispatch::Mutated);
        assert_eq!(s.start(), None);
        assert_eq!(s.end(), None);
        assert_eq!(s.grid().count(CellState::Barrier), 44);
    }

    #[test]
    fn report_display() {
        let mut s = session(5);
        run(&mut s, Command::Place(Pos::new(1, 1)));
        run(&mut s, Command::Place(Pos::new(1, 3)));
        let Dispatch::Searched(report) =
            run(&mut s, Command::Search(Algorithm::AStar(Heuristic::Manhattan)))
        else {
            panic!("search did not run");
        };
        let text = report.to_string();
        assert!(text.starts_with("A* (manhattan): path of 2 steps"), "{text}");
    }
}
