//! Genetic search over two-processor partitions.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, selection, seed)
//! - [`Selection`]: Roulette-wheel parent selection, cost-inverted or raw
//! - [`Evolution`]: Step-wise engine with an injectable random source
//! - [`GaRunner`]: Runs the engine to completion
//! - [`GaResult`]: Best partition found, with its task set and elite history
//!
//! # Generation
//!
//! Each generation evaluates the population, updates the global elite,
//! breeds `population_size` offspring by roulette selection, one-point
//! crossover and per-gene bit-flip mutation, then appends the elite.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;

pub use config::GaConfig;
pub use runner::{EngineState, Evolution, GaResult, GaRunner, GenerationStats};
pub use selection::Selection;
