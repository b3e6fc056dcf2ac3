//! GA evolutionary loop execution.
//!
//! [`Evolution`] drives one run step by step:
//! evaluation → elite tracking → selection and breeding → elitism → repeat.
//! [`GaRunner`] is the one-shot entry point that runs it to completion.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

use super::config::GaConfig;
use crate::candidate::{mutate_genes, one_point_crossover, Candidate, Processor};
use crate::error::ConfigError;
use crate::fitness::Fitness;
use crate::population::Population;
use crate::task_set::TaskSet;

/// Phase of the engine, as of the last completed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Initial population created; no generation run yet.
    Initialized,
    /// Computing fitness for the current population.
    Evaluating,
    /// Building the next population from selected parents.
    SelectingAndBreeding,
    /// The global elite has been appended to the next population.
    ElitismInserted,
    /// The generation budget is exhausted.
    Terminated,
}

/// Snapshot of one completed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// Zero-based index of the generation.
    pub generation: usize,
    /// Best fitness in the evaluated population of this generation.
    pub generation_best: Fitness,
    /// Best fitness seen in any generation so far.
    pub elite_fitness: Fitness,
    /// Size of the population bred for the next generation, elite included.
    pub next_population_size: usize,
}

/// Result of a GA run.
///
/// Contains the best candidate found, the task set it was evaluated
/// against, and the history of the global elite.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best candidate found across all generations.
    pub best: Candidate,

    /// Fitness of `best`. [`Fitness::Infeasible`] means no feasible
    /// partition was found.
    pub best_fitness: Fitness,

    /// The task set the run optimized.
    pub task_set: TaskSet,

    /// Number of generations executed.
    pub generations: usize,

    /// Global elite fitness after initialization, then at the end of
    /// each generation (`generations + 1` entries).
    pub fitness_history: Vec<Fitness>,
}

impl GaResult {
    /// Returns `true` if the best candidate respects the time budget.
    pub fn is_feasible(&self) -> bool {
        self.best_fitness.is_feasible()
    }

    /// Indices of the tasks the best candidate places on `processor`.
    pub fn tasks_on(&self, processor: Processor) -> Vec<usize> {
        self.best.tasks_on(processor)
    }

    /// Total busy time of `processor` under the best candidate.
    pub fn load(&self, processor: Processor) -> u64 {
        let (a, b) = self.best.loads(&self.task_set);
        match processor {
            Processor::A => a,
            Processor::B => b,
        }
    }
}

/// Step-wise evolution engine.
///
/// Owns the task set, the current population and the single random
/// source every draw goes through. Two engines built from the same task
/// set, configuration and seeded RNG produce identical generations.
///
/// # Usage
///
/// ```
/// use task_partition_ga::ga::{Evolution, GaConfig};
/// use task_partition_ga::TaskSet;
///
/// let tasks = TaskSet::new(vec![4, 2, 3, 1], 6).unwrap();
/// let config = GaConfig::default().with_max_generations(20).with_seed(1);
/// let mut engine = Evolution::new(tasks, &config).unwrap();
/// while let Some(stats) = engine.step() {
///     assert!(stats.elite_fitness <= stats.generation_best);
/// }
/// let result = engine.into_result();
/// assert_eq!(result.generations, 20);
/// ```
pub struct Evolution<R: Rng> {
    task_set: TaskSet,
    config: GaConfig,
    rng: R,
    population: Population,
    elite: Candidate,
    generation: usize,
    state: EngineState,
    fitness_history: Vec<Fitness>,
}

impl Evolution<StdRng> {
    /// Creates an engine seeded from `config.seed`, or from a random seed
    /// when unset.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn new(task_set: TaskSet, config: &GaConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(task_set, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Evolution<R> {
    /// Creates an engine drawing all randomness from `rng`.
    ///
    /// The initial population is created and evaluated here.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the configuration or task set is invalid.
    #[instrument(level = "debug", skip_all, fields(task_count = task_set.task_count(), population_size = config.population_size))]
    pub fn with_rng(task_set: TaskSet, config: &GaConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        if task_set.task_count() == 0 {
            return Err(ConfigError::EmptyTaskSet);
        }
        if task_set.time_budget() == 0 {
            return Err(ConfigError::ZeroTimeBudget);
        }

        let population = Population::initialize(config.population_size, &task_set, &mut rng);
        let elite = population
            .best()
            .cloned()
            .ok_or(ConfigError::ZeroPopulationSize)?;
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(elite.rank_fitness());

        Ok(Self {
            task_set,
            config: config.clone(),
            rng,
            population,
            elite,
            generation: 0,
            state: EngineState::Initialized,
            fitness_history,
        })
    }

    /// Runs one generation.
    ///
    /// Returns `None` once the generation budget is exhausted.
    pub fn step(&mut self) -> Option<GenerationStats> {
        if self.state == EngineState::Terminated {
            return None;
        }

        self.state = EngineState::Evaluating;
        self.population.evaluate_all(&self.task_set);

        let generation_best = match self.population.best() {
            Some(best) => {
                let fitness = best.rank_fitness();
                if fitness < self.elite.rank_fitness() {
                    tracing::debug!(
                        generation = self.generation,
                        fitness = %fitness,
                        "new elite"
                    );
                    self.elite = best.clone();
                }
                fitness
            }
            None => Fitness::worst(),
        };

        self.state = EngineState::SelectingAndBreeding;
        let mut next = self.breed();

        next.add(self.elite.clone());
        self.state = EngineState::ElitismInserted;

        let stats = GenerationStats {
            generation: self.generation,
            generation_best,
            elite_fitness: self.elite.rank_fitness(),
            next_population_size: next.size(),
        };

        self.population = next;
        self.fitness_history.push(stats.elite_fitness);
        self.generation += 1;
        if self.generation >= self.config.max_generations {
            self.state = EngineState::Terminated;
        }

        Some(stats)
    }

    /// Runs every remaining generation and returns the result.
    pub fn run(mut self) -> GaResult {
        while self.step().is_some() {}
        self.into_result()
    }

    /// Consumes the engine, returning the global elite as the result.
    pub fn into_result(self) -> GaResult {
        GaResult {
            best_fitness: self.elite.rank_fitness(),
            best: self.elite,
            task_set: self.task_set,
            generations: self.generation,
            fitness_history: self.fitness_history,
        }
    }

    /// Builds `population_size` offspring from the current population.
    ///
    /// Parents come in pairs; if the size is odd, the second child of the
    /// last pair is dropped.
    fn breed(&mut self) -> Population {
        let size = self.config.population_size;
        let task_count = self.task_set.task_count();
        let mut next = Population::with_capacity(size + 1);

        while next.size() < size {
            let parent1 = self.population.select_one(self.config.selection, &mut self.rng);
            let parent2 = self.population.select_one(self.config.selection, &mut self.rng);

            // A single task has no interior cut point.
            let (mut child1, mut child2) = if task_count >= 2
                && self.rng.random_range(0.0..1.0) < self.config.crossover_rate
            {
                let cut = self.rng.random_range(1..task_count);
                one_point_crossover(parent1, parent2, cut)
            } else {
                (parent1.clone(), parent2.clone())
            };

            mutate_genes(&mut child1, self.config.mutation_rate, &mut self.rng);
            mutate_genes(&mut child2, self.config.mutation_rate, &mut self.rng);

            next.add(child1);
            if next.size() < size {
                next.add(child2);
            }
        }

        next
    }

    /// Current phase.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Number of generations completed.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best candidate seen so far.
    pub fn elite(&self) -> &Candidate {
        &self.elite
    }

    /// The population the next generation will evaluate.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// The task set being optimized.
    pub fn task_set(&self) -> &TaskSet {
        &self.task_set
    }
}

/// Executes a full GA run.
///
/// # Usage
///
/// ```
/// use task_partition_ga::ga::{GaConfig, GaRunner};
/// use task_partition_ga::{Fitness, TaskSet};
///
/// let tasks = TaskSet::new(vec![1, 1, 1, 1], 2).unwrap();
/// let config = GaConfig::default().with_max_generations(50).with_seed(42);
/// let result = GaRunner::run(&tasks, &config).unwrap();
/// assert_eq!(result.best_fitness, Fitness::Makespan(2));
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA, seeding from `config.seed`.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] before any generation runs if the
    /// configuration is invalid.
    #[instrument(level = "info", skip_all, fields(task_count = task_set.task_count(), generations = config.max_generations))]
    pub fn run(task_set: &TaskSet, config: &GaConfig) -> Result<GaResult, ConfigError> {
        let result = Evolution::new(task_set.clone(), config)?.run();
        log_result(&result);
        Ok(result)
    }

    /// Runs the GA with a caller-supplied random source.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] before any generation runs if the
    /// configuration is invalid.
    pub fn run_with_rng<R: Rng>(
        task_set: &TaskSet,
        config: &GaConfig,
        rng: R,
    ) -> Result<GaResult, ConfigError> {
        let result = Evolution::with_rng(task_set.clone(), config, rng)?.run();
        log_result(&result);
        Ok(result)
    }
}

fn log_result(result: &GaResult) {
    if result.is_feasible() {
        tracing::info!(
            fitness = %result.best_fitness,
            generations = result.generations,
            "run finished"
        );
    } else {
        tracing::info!(
            generations = result.generations,
            "run finished without a feasible partition"
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
