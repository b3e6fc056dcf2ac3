//! Parent selection.
//!
//! Both strategies are roulette wheels over the population: a uniform
//! point is drawn in `[0, total_weight)` and the population is walked,
//! accumulating weights, until the running sum reaches the point. They
//! differ only in how a candidate's cost becomes a weight.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1.

use rand::Rng;

use crate::candidate::Candidate;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use task_partition_ga::ga::Selection;
///
/// // Lower cost, larger slice of the wheel.
/// let sel = Selection::Roulette;
///
/// // Historical behaviour: slice proportional to raw cost.
/// let sel = Selection::RawCostRoulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Roulette over inverted cost: `weight = 1 / (1 + cost)`.
    ///
    /// Cheaper candidates are more likely to be picked. Infeasible
    /// candidates get a vanishing but non-zero weight, so an all-infeasible
    /// population degrades to uniform sampling.
    #[default]
    Roulette,

    /// Roulette over raw cost: `weight = cost`.
    ///
    /// This favours *worse* candidates, since fitness is a cost. Infeasible
    /// candidates, weighted by the sentinel cost, take nearly the whole
    /// wheel whenever one is present. Kept for reproducing historical runs.
    RawCostRoulette,
}

impl Selection {
    /// Selects a parent index from the population.
    ///
    /// Unevaluated candidates are weighted as infeasible.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &[Candidate], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let weights: Vec<f64> = match self {
            Selection::Roulette => population
                .iter()
                .map(|c| 1.0 / (1.0 + c.rank_fitness().to_f64()))
                .collect(),
            Selection::RawCostRoulette => population
                .iter()
                .map(|c| c.rank_fitness().to_f64())
                .collect(),
        };

        spin(&weights, rng)
    }
}

/// Spins a wheel with the given slice weights.
///
/// Returns the first index whose running sum reaches the drawn point.
/// A zero or non-finite total falls back to a uniform draw.
fn spin<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let n = weights.len();
    if n == 1 {
        return 0;
    }

    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return rng.random_range(0..n);
    }

    let point = rng.random_range(0.0..total);
    let mut running = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        running += w;
        if running >= point {
            return i;
        }
    }

    n - 1 // rounding fallback
}
