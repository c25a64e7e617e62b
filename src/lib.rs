//! Team-camp game scheduling.
//!
//! Assigns basketball squads to hourly time slots and courts over a
//! multi-day camp so that every team plays a fixed number of games
//! against well-matched, distinct opponents, and the varsity and JV
//! squads of one club play in the same hours.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Team`, `ConflictPair`, `CampLayout`,
//!   `ScheduleGrid`, `Match`
//! - **`roster`**: Roster text ingestion
//! - **`validation`**: Input integrity checks (team ids, ranks, pair refs)
//! - **`ga`**: Grid encoding, greedy placement, operators, fitness, and the
//!   [`u_metaheur::ga`] problem binding
//! - **`report`**: Violation analysis and timetable rendering
//! - **`config`**: Search settings and the camp-level configuration bundle
//!
//! # Example
//!
//! ```
//! use u_teamcamp::{CampConfig, Roster, SearchConfig, TeamCampProblem};
//! use u_teamcamp::models::CampLayout;
//!
//! let roster = Roster::parse(
//!     "Central-3-N-1,2-8-22\nLakeside-3-Y-2,2-8-22\nHillcrest-1-Y-1-8-22\nRidge-2-Y-3-8-22\n",
//! ).unwrap();
//! let config = CampConfig::default()
//!     .with_layout(CampLayout::new().with_day(8, 14).with_venue("Main", 3))
//!     .with_search(SearchConfig::default().with_population_size(30).with_max_generations(10).with_seed(3));
//!
//! let problem = TeamCampProblem::from_roster(&roster, &config).unwrap();
//! let solution = problem.solve_with(&config.search).unwrap();
//! let report = problem.report(solution.grid());
//! assert_eq!(report.matches_per_team.len(), 6);
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

pub mod config;
pub mod error;
pub mod ga;
pub mod models;
pub mod report;
pub mod roster;
pub mod validation;

pub use config::{CampConfig, SearchConfig};
pub use error::{CampError, RosterError};
pub use ga::{CampSolution, TeamCampProblem};
pub use report::{render_schedule, ScheduleReport};
pub use roster::Roster;
