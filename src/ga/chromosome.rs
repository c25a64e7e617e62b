//! Grid chromosome for team-camp scheduling.
//!
//! # Encoding
//!
//! The genome is the schedule grid itself (`slots × courts × 2` sides).
//! The team order used by crossover is not stored; it is recovered from
//! the grid by first appearance (see [`ScheduleGrid::team_order`]).

use u_metaheur::ga::Individual;

use crate::models::{ScheduleGrid, TeamId};

/// Schedule grid plus its fitness.
///
/// Lower fitness = better schedule (minimization convention). The fitness
/// is the negated schedule score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleChromosome {
    /// Schedule grid.
    pub grid: ScheduleGrid,
    /// Fitness value (lower = better, `+inf` until evaluated).
    pub fitness: f64,
}

impl Individual for ScheduleChromosome {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl ScheduleChromosome {
    /// Wraps an unevaluated grid.
    pub fn new(grid: ScheduleGrid) -> Self {
        Self {
            grid,
            fitness: f64::INFINITY,
        }
    }

    /// Schedule score (higher = better) recovered from the fitness.
    /// `None` until evaluated.
    pub fn score(&self) -> Option<i64> {
        self.fitness.is_finite().then(|| (-self.fitness) as i64)
    }

    /// Distinct team ids in first-appearance order.
    pub fn team_order(&self) -> Vec<TeamId> {
        self.grid.team_order()
    }

    /// Grid dimensions as `(slots, courts)`.
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Match;

    #[test]
    fn test_new_is_unevaluated() {
        let ch = ScheduleChromosome::new(ScheduleGrid::new(3, 2));
        assert_eq!(ch.fitness(), f64::INFINITY);
        assert_eq!(ch.score(), None);
        assert_eq!(ch.dimensions(), (3, 2));
    }

    #[test]
    fn test_fitness_is_negated_score() {
        let mut ch = ScheduleChromosome::new(ScheduleGrid::new(1, 1));
        ch.set_fitness(120.0);
        assert_eq!(ch.fitness(), 120.0);
        assert_eq!(ch.score(), Some(-120));
    }

    #[test]
    fn test_team_order() {
        let grid = ScheduleGrid::from_rows(vec![
            vec![Match::versus(4, 2), Match::new(Some(1), None)],
            vec![Match::versus(2, 3), Match::default()],
        ]);
        let ch = ScheduleChromosome::new(grid);
        assert_eq!(ch.team_order(), vec![4, 2, 1, 3]);
    }
}
