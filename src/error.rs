//! Configuration errors.
//!
//! Every error here is raised before the evolutionary loop starts.
//! Infeasible task sets are not errors: they surface as
//! [`Fitness::Infeasible`](crate::fitness::Fitness::Infeasible) in the result.

/// Invalid input or configuration for a GA run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("task set must contain at least one task")]
    EmptyTaskSet,
    #[error("time budget must be positive")]
    ZeroTimeBudget,
    #[error("population_size must be at least 1")]
    ZeroPopulationSize,
    #[error("max_generations must be at least 1")]
    ZeroGenerations,
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },
}
