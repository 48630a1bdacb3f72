//! Aggregate statistics over a batch of goldfish games

use crate::game::GameResult;
use crate::simulation::session::SessionError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Statistics over the games of a session.
///
/// Turn statistics only cover games that reached the damage threshold;
/// games abandoned at the turn cap are counted in `did_not_converge`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub trials: usize,
    pub converged: usize,
    pub did_not_converge: usize,
    pub mean: f64,
    /// Sample standard deviation of the win turn
    pub std_dev: f64,
    /// Standard error of `mean`
    pub standard_error: f64,
    pub min: u32,
    pub max: u32,
    pub median: f64,
    /// Win turn -> number of games
    pub distribution: BTreeMap<u32, usize>,
}

impl Summary {
    pub fn from_results(results: &[GameResult]) -> Result<Self, SessionError> {
        if results.is_empty() {
            return Err(SessionError::NoResults);
        }

        let mut turns: Vec<u32> = results.iter().filter_map(|r| r.win_turn).collect();
        if turns.is_empty() {
            return Err(SessionError::NoConvergedTrials(results.len()));
        }
        turns.sort_unstable();

        let n = turns.len();
        let mean = turns.iter().map(|&t| t as f64).sum::<f64>() / n as f64;
        let std_dev = if n > 1 {
            let sum_sq: f64 = turns.iter().map(|&t| (t as f64 - mean).powi(2)).sum();
            (sum_sq / (n - 1) as f64).sqrt()
        } else {
            0.0
        };
        let median = if n % 2 == 0 {
            (turns[n / 2 - 1] + turns[n / 2]) as f64 / 2.0
        } else {
            turns[n / 2] as f64
        };

        let mut distribution = BTreeMap::new();
        for &t in &turns {
            *distribution.entry(t).or_insert(0) += 1;
        }

        Ok(Summary {
            trials: results.len(),
            converged: n,
            did_not_converge: results.len() - n,
            mean,
            std_dev,
            standard_error: std_dev / (n as f64).sqrt(),
            min: turns[0],
            max: turns[n - 1],
            median,
            distribution,
        })
    }

    pub fn convergence_rate(&self) -> f64 {
        self.converged as f64 / self.trials as f64
    }
}
