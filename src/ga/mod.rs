//! GA encoding for team-camp scheduling.
//!
//! Plugs the schedule grid into the generational driver of
//! [`u_metaheur::ga`]. The driver minimizes, so an individual's fitness is
//! its negated schedule score.
//!
//! # Encoding
//!
//! The chromosome is the `slots × courts` grid itself. A team order is
//! the only thing crossover exchanges: it is read off a parent grid by
//! first appearance and turned back into a grid by the greedy placer.
//!
//! # Submodules
//!
//! - [`fitness`]: additive reward/penalty scoring
//! - [`operators`]: crossover, swap mutation, repair hook
//! - [`placement`]: first-fit placer shared by initialization and crossover

mod chromosome;
pub mod fitness;
pub mod operators;
pub mod placement;
mod problem;
mod solution;

pub use chromosome::ScheduleChromosome;
pub use fitness::{FitnessEvaluator, FitnessWeights};
pub use operators::{interleave_orders, recombine, repair, swap_mutation, swap_teams};
pub use placement::Placer;
pub use problem::TeamCampProblem;
pub use solution::{CampSolution, GenerationScore};
