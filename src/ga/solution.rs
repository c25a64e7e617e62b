//! Run outcome in schedule-score terms.
//!
//! The driver minimizes the negated score; this converts its result back
//! so callers read scores where higher is better.

use serde::Serialize;
use u_metaheur::ga::{GaResult, GenerationStats};

use super::chromosome::ScheduleChromosome;
use crate::models::ScheduleGrid;

/// Score statistics of one generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationScore {
    /// Generation number (0 = initial population).
    pub generation: usize,
    /// Highest score in the population.
    pub best: f64,
    /// Lowest score in the population.
    pub worst: f64,
    /// Mean score.
    pub mean: f64,
    /// Population standard deviation of the score.
    pub std_dev: f64,
}

impl From<&GenerationStats> for GenerationScore {
    fn from(stats: &GenerationStats) -> Self {
        Self {
            generation: stats.generation,
            best: -stats.best_fitness,
            worst: -stats.worst_fitness,
            mean: -stats.mean_fitness,
            std_dev: stats.std_dev,
        }
    }
}

/// Best schedule of a run and its score history.
#[derive(Debug, Clone)]
pub struct CampSolution {
    /// Best-ever individual.
    pub best: ScheduleChromosome,
    /// Score of `best` (higher = better).
    pub score: i64,
    /// Generations executed after the initial one.
    pub generations: usize,
    /// Per-generation statistics, starting with generation 0.
    pub history: Vec<GenerationScore>,
}

impl CampSolution {
    /// Best schedule grid.
    pub fn grid(&self) -> &ScheduleGrid {
        &self.best.grid
    }
}

impl From<GaResult<ScheduleChromosome>> for CampSolution {
    fn from(result: GaResult<ScheduleChromosome>) -> Self {
        Self {
            score: (-result.best_fitness) as i64,
            generations: result.generations,
            history: result.generation_stats.iter().map(GenerationScore::from).collect(),
            best: result.best,
        }
    }
}
