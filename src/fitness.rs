//! Fitness evaluation.
//!
//! Fitness is a cost: the makespan of a feasible partition, or a hard
//! penalty when either processor exceeds the time budget. Lower is better.
//!
//! The penalty is not graded. [`Fitness::Infeasible`] orders after every
//! [`Fitness::Makespan`], however small the overrun, so feasibility always
//! dominates makespan when candidates are compared.

use crate::candidate::Processor;
use crate::task_set::TaskSet;

/// Cost reported for an infeasible partition by [`Fitness::cost`].
///
/// Durations are `u32` and loads are summed in `u64`, so no feasible
/// makespan can reach this value.
pub const INFEASIBLE_COST: u64 = u64::MAX;

/// Cost of a candidate partition.
///
/// Variant order matters: the derived `Ord` places every `Makespan`
/// before `Infeasible`.
///
/// ```
/// use task_partition_ga::Fitness;
///
/// assert!(Fitness::Makespan(1_000_000) < Fitness::Infeasible);
/// assert!(Fitness::Makespan(3) < Fitness::Makespan(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fitness {
    /// Both loads fit the budget; the value is the larger load.
    Makespan(u64),
    /// At least one processor exceeds the budget.
    Infeasible,
}

impl Fitness {
    /// The worst possible fitness.
    pub fn worst() -> Self {
        Fitness::Infeasible
    }

    /// Scalar cost, with [`INFEASIBLE_COST`] standing in for infeasibility.
    pub fn cost(self) -> u64 {
        match self {
            Fitness::Makespan(m) => m,
            Fitness::Infeasible => INFEASIBLE_COST,
        }
    }

    /// Cost as `f64`, for selection weights and statistics.
    pub fn to_f64(self) -> f64 {
        self.cost() as f64
    }

    /// Returns `true` for [`Fitness::Makespan`].
    pub fn is_feasible(self) -> bool {
        matches!(self, Fitness::Makespan(_))
    }
}

impl std::fmt::Display for Fitness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fitness::Makespan(m) => write!(f, "{m}"),
            Fitness::Infeasible => f.write_str("infeasible"),
        }
    }
}

/// Total busy time on processor A and processor B.
///
/// # Panics
/// Panics if `assignment` is longer than the task set.
pub fn processor_loads(assignment: &[Processor], task_set: &TaskSet) -> (u64, u64) {
    let mut load_a = 0u64;
    let mut load_b = 0u64;
    for (i, gene) in assignment.iter().enumerate() {
        let d = task_set.duration(i) as u64;
        match gene {
            Processor::A => load_a += d,
            Processor::B => load_b += d,
        }
    }
    (load_a, load_b)
}

/// Evaluates an assignment against a task set.
pub fn fitness(assignment: &[Processor], task_set: &TaskSet) -> Fitness {
    let (load_a, load_b) = processor_loads(assignment, task_set);
    let budget = task_set.time_budget();
    if load_a > budget || load_b > budget {
        Fitness::Infeasible
    } else {
        Fitness::Makespan(load_a.max(load_b))
    }
}
