//! Camp-level configuration.

use serde::{Deserialize, Serialize};
use u_metaheur::ga::GaConfig;

use crate::ga::FitnessWeights;
use crate::models::CampLayout;

/// Search settings for one scheduling run.
///
/// Serializable counterpart of [`GaConfig`]. Converted with
/// [`SearchConfig::to_ga_config`], which disables elitism, stagnation
/// stopping and parallel evaluation so each generation is fully replaced
/// and runs sequentially.
///
/// # Examples
///
/// ```
/// use u_teamcamp::SearchConfig;
///
/// let search = SearchConfig::default()
///     .with_population_size(200)
///     .with_max_generations(30)
///     .with_seed(7);
/// assert!(search.validate().is_ok());
/// assert_eq!(search.to_ga_config().population_size, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Number of generations after the initial one.
    pub max_generations: usize,
    /// Probability that a selected pair is recombined.
    pub crossover_rate: f64,
    /// Probability that an offspring is mutated.
    pub mutation_rate: f64,
    /// Contestants per tournament.
    pub tournament_size: usize,
    /// Random seed (`None` = random).
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            max_generations: 50,
            crossover_rate: 0.2,
            mutation_rate: 0.15,
            tournament_size: 3,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        for (name, p) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(format!("{name} ({p}) must be within [0, 1]"));
            }
        }
        self.to_ga_config().validate()
    }

    /// Builds the driver configuration.
    pub fn to_ga_config(&self) -> GaConfig {
        let config = GaConfig::default()
            .with_population_size(self.population_size)
            .with_max_generations(self.max_generations)
            .with_tournament_size(self.tournament_size)
            .with_crossover_rate(self.crossover_rate)
            .with_mutation_rate(self.mutation_rate)
            .with_elite_ratio(0.0)
            .with_stagnation_limit(0)
            .with_parallel(false);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Everything a scheduling run needs besides the roster.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampConfig {
    /// Days and venues, which fix the grid dimensions.
    pub layout: CampLayout,
    /// Evolutionary search settings.
    pub search: SearchConfig,
    /// Fitness rewards and penalties.
    pub weights: FitnessWeights,
    /// Target matches per team (default: 3).
    pub matches_per_team: usize,
}

impl Default for CampConfig {
    fn default() -> Self {
        Self {
            layout: CampLayout::default(),
            search: SearchConfig::default(),
            weights: FitnessWeights::default(),
            matches_per_team: 3,
        }
    }
}

impl CampConfig {
    pub fn with_layout(mut self, layout: CampLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_matches_per_team(mut self, n: usize) -> Self {
        self.matches_per_team = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_metaheur::ga::Selection;

    #[test]
    fn test_default_config() {
        let config = CampConfig::default();
        assert_eq!(config.matches_per_team, 3);
        assert_eq!(config.layout.total_slots(), 30);
        assert_eq!(config.layout.total_courts(), 9);
        assert_eq!(config.weights.incomplete_match, -50);
        assert_eq!(config.search.population_size, 500);
        assert_eq!(config.search.max_generations, 50);
        assert_eq!(config.search.tournament_size, 3);
        assert!((config.search.crossover_rate - 0.2).abs() < 1e-10);
        assert!((config.search.mutation_rate - 0.15).abs() < 1e-10);
        assert!(config.search.seed.is_none());
    }

    #[test]
    fn test_to_ga_config() {
        let ga = SearchConfig::default().with_seed(11).to_ga_config();
        assert_eq!(ga.population_size, 500);
        assert_eq!(ga.max_generations, 50);
        assert_eq!(ga.selection, Selection::Tournament(3));
        assert_eq!(ga.elite_ratio, 0.0);
        assert_eq!(ga.stagnation_limit, 0);
        assert!(!ga.parallel);
        assert_eq!(ga.seed, Some(11));
        assert!((ga.crossover_rate - 0.2).abs() < 1e-10);
        assert!((ga.mutation_rate - 0.15).abs() < 1e-10);
    }

    #[test]
    fn test_validate() {
        assert!(SearchConfig::default().validate().is_ok());
        assert!(SearchConfig::default().with_population_size(1).validate().is_err());
        assert!(SearchConfig::default().with_tournament_size(0).validate().is_err());
        assert!(SearchConfig::default().with_max_generations(0).validate().is_err());
        let unclamped = SearchConfig {
            mutation_rate: 2.0,
            ..SearchConfig::default()
        };
        assert!(unclamped.validate().is_err());
    }

    #[test]
    fn test_clamp_rates() {
        let search = SearchConfig::default()
            .with_crossover_rate(1.7)
            .with_mutation_rate(-0.2);
        assert!((search.crossover_rate - 1.0).abs() < 1e-10);
        assert!(search.mutation_rate.abs() < 1e-10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"matches_per_team":2,"search":{"population_size":40,"seed":11},
            "weights":{"incomplete_match":-40,"self_match":-50,
            "same_rank":5,"adjacent_rank":2,"distant_rank":-1,"cross_level_fair":1,
            "cross_level_unfair":-5,"double_booking":-50,"rematch":-50,"novel_opponent":5,
            "outside_availability":-3}}"#;
        let config: CampConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.matches_per_team, 2);
        assert_eq!(config.search.population_size, 40);
        assert_eq!(config.search.max_generations, 50);
        assert_eq!(config.search.seed, Some(11));
        assert_eq!(config.weights.incomplete_match, -40);
        assert_eq!(config.weights.outside_availability, -3);
        assert_eq!(config.layout, CampLayout::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = CampConfig::default()
            .with_matches_per_team(4)
            .with_search(SearchConfig::default().with_seed(9));
        let json = serde_json::to_string(&config).unwrap();
        let back: CampConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
