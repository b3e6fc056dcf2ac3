//! Two-processor task partitioning with a genetic algorithm.
//!
//! Given task durations and a per-processor time budget, searches for an
//! assignment of every task to processor A or B that minimizes the
//! makespan (the larger of the two loads) without either load exceeding
//! the budget.
//!
//! - [`TaskSet`]: Immutable problem input
//! - [`Candidate`]: One partition, with cached [`Fitness`]
//! - [`Population`]: Candidates of one generation; best-of and roulette sampling
//! - [`ga`]: Configuration, selection and the evolutionary loop
//!
//! # Example
//!
//! ```
//! use task_partition_ga::ga::{GaConfig, GaRunner};
//! use task_partition_ga::{Processor, TaskSet};
//!
//! let tasks = TaskSet::new(vec![5, 4, 3, 3, 2, 1], 10).unwrap();
//! let config = GaConfig::default().with_max_generations(200).with_seed(42);
//! let result = GaRunner::run(&tasks, &config).unwrap();
//!
//! assert!(result.is_feasible());
//! let total = result.load(Processor::A) + result.load(Processor::B);
//! assert_eq!(total, tasks.total_duration());
//! ```
//!
//! Infeasibility is not an error. When no partition fits the budget the
//! result carries [`Fitness::Infeasible`] and [`GaResult::is_feasible`]
//! returns `false`.
//!
//! [`GaResult::is_feasible`]: ga::GaResult::is_feasible

pub mod candidate;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod population;
pub mod task_set;

pub use candidate::{Candidate, Processor};
pub use error::ConfigError;
pub use fitness::{Fitness, INFEASIBLE_COST};
pub use population::Population;
pub use task_set::TaskSet;
