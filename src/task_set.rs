//! Immutable problem input.

use crate::error::ConfigError;

/// Tasks to partition and the per-processor time budget.
///
/// Built once per problem instance and passed by reference into every
/// fitness computation. There is no way to change it after construction.
///
/// # Examples
///
/// ```
/// use task_partition_ga::TaskSet;
///
/// let tasks = TaskSet::new(vec![3, 5, 2], 6).unwrap();
/// assert_eq!(tasks.task_count(), 3);
/// assert_eq!(tasks.total_duration(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskSet {
    durations: Vec<u32>,
    time_budget: u64,
}

impl TaskSet {
    /// Creates a task set.
    ///
    /// # Errors
    /// [`ConfigError::EmptyTaskSet`] if `durations` is empty,
    /// [`ConfigError::ZeroTimeBudget`] if `time_budget` is zero.
    pub fn new(durations: Vec<u32>, time_budget: u64) -> Result<Self, ConfigError> {
        if durations.is_empty() {
            return Err(ConfigError::EmptyTaskSet);
        }
        if time_budget == 0 {
            return Err(ConfigError::ZeroTimeBudget);
        }
        Ok(Self {
            durations,
            time_budget,
        })
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.durations.len()
    }

    /// Per-task durations, indexed by task.
    pub fn durations(&self) -> &[u32] {
        &self.durations
    }

    /// Duration of a single task.
    ///
    /// # Panics
    /// Panics if `index >= task_count()`.
    pub fn duration(&self, index: usize) -> u32 {
        self.durations[index]
    }

    /// Maximum total busy time allowed on either processor.
    pub fn time_budget(&self) -> u64 {
        self.time_budget
    }

    /// Sum of all durations.
    pub fn total_duration(&self) -> u64 {
        self.durations.iter().map(|&d| d as u64).sum()
    }
}
