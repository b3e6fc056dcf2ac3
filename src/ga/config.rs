//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::ConfigError;

/// Configuration for the partitioning GA.
///
/// # Defaults
///
/// ```
/// use task_partition_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use task_partition_ga::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_selection(Selection::RawCostRoulette)
///     .with_mutation_rate(0.02)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of candidates bred per generation.
    ///
    /// The retained elite is appended on top of this, so every bred
    /// generation holds `population_size + 1` candidates.
    pub population_size: usize,

    /// Number of generations to run. The run always performs exactly this many.
    pub max_generations: usize,

    /// How parents are chosen.
    pub selection: Selection,

    /// Probability of applying one-point crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, the children are copies of the parents.
    pub crossover_rate: f64,

    /// Probability of flipping each gene of an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            selection: Selection::default(),
            crossover_rate: 0.8,
            mutation_rate: 0.05,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`ConfigError::ZeroPopulationSize`], [`ConfigError::ZeroGenerations`],
    /// or [`ConfigError::InvalidRate`] for a rate that is NaN or outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulationSize);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidRate { name, value })
    }
}
