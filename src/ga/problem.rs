//! Team-camp GA problem definition.
//!
//! Implements [`GaProblem`] for camp scheduling. Binds the validated team
//! set, the conflict pairs, the court layout and the fitness weights
//! once, so the operators read them through `&self` instead of shared
//! global state.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};
use u_metaheur::ga::{GaConfig, GaProblem, GaRunner, Selection};

use super::chromosome::ScheduleChromosome;
use super::fitness::{FitnessEvaluator, FitnessWeights};
use super::operators::{recombine, repair, swap_mutation};
use super::placement::Placer;
use super::solution::CampSolution;
use crate::config::{CampConfig, SearchConfig};
use crate::error::CampError;
use crate::models::{CampLayout, ConflictPair, ConflictSet, ScheduleGrid, Team, TeamId};
use crate::report::ScheduleReport;
use crate::roster::Roster;
use crate::validation::validate_roster;

/// GA problem definition for team-camp scheduling.
///
/// # Example
/// ```
/// use u_teamcamp::SearchConfig;
/// use u_teamcamp::ga::TeamCampProblem;
/// use u_teamcamp::models::{CampLayout, Level, Team};
///
/// let teams: Vec<Team> = (1..=6).map(|id| Team::new(id, Level::Varsity)).collect();
/// let layout = CampLayout::new().with_day(8, 12).with_venue("Gym", 2);
/// let problem = TeamCampProblem::new(&teams, &[], layout).unwrap();
///
/// let search = SearchConfig::default()
///     .with_population_size(20)
///     .with_max_generations(5)
///     .with_seed(1);
/// let solution = problem.solve_with(&search).unwrap();
/// assert_eq!(solution.grid().dimensions(), (4, 2));
/// assert_eq!(solution.score, problem.score(solution.grid()));
/// ```
#[derive(Debug, Clone)]
pub struct TeamCampProblem {
    teams: Vec<Team>,
    team_ids: Vec<TeamId>,
    conflicts: ConflictSet,
    layout: CampLayout,
    weights: FitnessWeights,
    matches_per_team: usize,
}

impl TeamCampProblem {
    /// Creates a problem from a validated roster.
    ///
    /// # Errors
    /// `CampError::Validation` when the teams or pairs are malformed;
    /// `CampError::Config` when the layout has no slots or no courts.
    pub fn new(
        teams: &[Team],
        conflicts: &[ConflictPair],
        layout: CampLayout,
    ) -> Result<Self, CampError> {
        validate_roster(teams, conflicts)?;
        if layout.total_slots() == 0 || layout.total_courts() == 0 {
            return Err(CampError::Config(format!(
                "layout must have at least one slot and one court (got {} x {})",
                layout.total_slots(),
                layout.total_courts()
            )));
        }

        let mut teams = teams.to_vec();
        teams.sort_by_key(|t| t.id);
        let team_ids = teams.iter().map(|t| t.id).collect();

        Ok(Self {
            teams,
            team_ids,
            conflicts: ConflictSet::new(conflicts),
            layout,
            weights: FitnessWeights::default(),
            matches_per_team: 3,
        })
    }

    /// Creates a problem from a parsed roster and camp configuration.
    pub fn from_roster(roster: &Roster, config: &CampConfig) -> Result<Self, CampError> {
        if config.matches_per_team == 0 {
            return Err(CampError::Config("matches_per_team must be at least 1".into()));
        }
        Ok(Self::new(&roster.teams, &roster.conflicts, config.layout.clone())?
            .with_weights(config.weights)
            .with_matches_per_team(config.matches_per_team))
    }

    /// Sets the fitness weights.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the per-team match quota (default: 3).
    pub fn with_matches_per_team(mut self, n: usize) -> Self {
        self.matches_per_team = n;
        self
    }

    /// Teams sorted by id.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team_ids(&self) -> &[TeamId] {
        &self.team_ids
    }

    pub fn conflicts(&self) -> &ConflictSet {
        &self.conflicts
    }

    pub fn layout(&self) -> &CampLayout {
        &self.layout
    }

    pub fn weights(&self) -> &FitnessWeights {
        &self.weights
    }

    pub fn matches_per_team(&self) -> usize {
        self.matches_per_team
    }

    /// Placer bound to this problem's conflicts and quota.
    pub fn placer(&self) -> Placer<'_> {
        Placer::new(&self.conflicts, self.matches_per_team)
    }

    /// Evaluator bound to this problem's teams, weights and layout.
    pub fn evaluator(&self) -> FitnessEvaluator<'_> {
        FitnessEvaluator::new(&self.teams, &self.weights)
            .with_quota(self.matches_per_team)
            .with_layout(&self.layout)
    }

    /// Empty grid with the layout's dimensions.
    pub fn empty_grid(&self) -> ScheduleGrid {
        ScheduleGrid::new(self.layout.total_slots(), self.layout.total_courts())
    }

    /// Places teams in `order` into a fresh grid.
    pub fn build_grid(&self, order: &[TeamId]) -> ScheduleGrid {
        let mut grid = self.empty_grid();
        self.placer().populate(&mut grid, order);
        grid
    }

    /// Uniformly random permutation of all team ids.
    pub fn random_order<R: Rng>(&self, rng: &mut R) -> Vec<TeamId> {
        let mut order = self.team_ids.clone();
        order.shuffle(rng);
        order
    }

    /// Builds `size` unevaluated individuals from random team orders.
    pub fn initialize<R: Rng>(&self, size: usize, rng: &mut R) -> Vec<ScheduleChromosome> {
        (0..size).map(|_| self.create_individual(rng)).collect()
    }

    /// Fitness of a grid.
    pub fn score(&self, grid: &ScheduleGrid) -> i64 {
        self.evaluator().evaluate(grid)
    }

    /// Crossover of two individuals into two fresh children.
    pub fn recombine(
        &self,
        parent1: &ScheduleChromosome,
        parent2: &ScheduleChromosome,
    ) -> (ScheduleChromosome, ScheduleChromosome) {
        let (c1, c2) = recombine(&parent1.grid, &parent2.grid, &self.placer(), &self.team_ids);
        (ScheduleChromosome::new(c1), ScheduleChromosome::new(c2))
    }

    /// Violation report for a grid.
    pub fn report(&self, grid: &ScheduleGrid) -> ScheduleReport {
        ScheduleReport::analyze(
            grid,
            &self.teams,
            &self.conflicts,
            &self.layout,
            self.matches_per_team,
        )
    }

    /// Runs the GA and returns the best-ever schedule.
    ///
    /// # Errors
    /// `CampError::Config` when `config` is rejected by its own validation
    /// or uses a zero-size tournament.
    pub fn solve(&self, config: &GaConfig) -> Result<CampSolution, CampError> {
        if config.selection == Selection::Tournament(0) {
            return Err(CampError::Config("tournament size must be at least 1".into()));
        }
        config.validate().map_err(CampError::Config)?;

        info!(
            teams = self.teams.len(),
            population = config.population_size,
            generations = config.max_generations,
            "starting camp search"
        );
        let solution = CampSolution::from(GaRunner::run(self, config));
        info!(
            best_score = solution.score,
            generations = solution.generations,
            "camp search finished"
        );
        Ok(solution)
    }

    /// Validates `search` and runs [`solve`](Self::solve) with it.
    pub fn solve_with(&self, search: &SearchConfig) -> Result<CampSolution, CampError> {
        search.validate().map_err(CampError::Config)?;
        self.solve(&search.to_ga_config())
    }
}

impl GaProblem for TeamCampProblem {
    type Individual = ScheduleChromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> ScheduleChromosome {
        let order = self.random_order(rng);
        ScheduleChromosome::new(self.build_grid(&order))
    }

    fn evaluate(&self, individual: &ScheduleChromosome) -> f64 {
        -(self.score(&individual.grid) as f64)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &ScheduleChromosome,
        parent2: &ScheduleChromosome,
        _rng: &mut R,
    ) -> Vec<ScheduleChromosome> {
        let (c1, c2) = self.recombine(parent1, parent2);
        vec![c1, c2]
    }

    fn mutate<R: Rng>(&self, individual: &mut ScheduleChromosome, rng: &mut R) {
        swap_mutation(&mut individual.grid, self.teams.len(), rng);
        repair(&mut individual.grid);
    }

    fn on_generation(&self, generation: usize, best_fitness: f64) {
        debug!(generation, best_score = -best_fitness, "generation done");
    }
}
