//! Non-interactive runs: regenerate a maze and search it without a terminal.

use pathviz_core::GridError;
use pathviz_search::NoRender;

use crate::config::SessionConfig;
use crate::session::{Algorithm, Command, Dispatch, SearchReport, Session};

/// Regenerate one random maze from `config`, then run each of `algorithms`
/// on it in turn, clearing search marks between runs.
pub fn run(config: SessionConfig, algorithms: &[Algorithm]) -> Result<Vec<SearchReport>, GridError> {
    let mut session = Session::new(config)?;
    if session.dispatch(Command::Regenerate, &mut NoRender) == Dispatch::Ignored {
        return Err(GridError::InvalidSize(session.config().size));
    }

    let mut reports = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        session.dispatch(Command::SoftReset, &mut NoRender);
        if let Dispatch::Searched(report) = session.dispatch(Command::Search(algorithm), &mut NoRender) {
            reports.push(report);
        }
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> SessionConfig {
        SessionConfig {
            size: 30,
            logical_width: 300,
            seed: Some(seed),
            ..SessionConfig::default()
        }
    }

    #[test]
    fn uniform_cost_is_never_beaten() {
        for seed in 0..10 {
            let reports = run(config(seed), &Algorithm::ALL).unwrap();
            assert_eq!(reports.len(), 3);
            let costs: Vec<_> = reports.iter().map(|r| r.outcome.cost()).collect();
            let best = costs[2];
            for &cost in &costs[..2] {
                assert_eq!(cost.is_some(), best.is_some(), "seed {seed}: {costs:?}");
                assert!(cost >= best, "seed {seed}: {costs:?}");
            }
        }
    }

    #[test]
    fn seeded_runs_repeat() {
        let a = run(config(99), &Algorithm::ALL).unwrap();
        let b = run(config(99), &Algorithm::ALL).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn too_small_for_a_maze() {
        let cfg = SessionConfig {
            size: 3,
            logical_width: 30,
            seed: Some(1),
            ..SessionConfig::default()
        };
        assert_eq!(run(cfg, &Algorithm::ALL), Err(GridError::InvalidSize(3)));
    }
}
