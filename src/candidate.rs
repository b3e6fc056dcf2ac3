//! Candidate encoding and its genetic operators.
//!
//! A candidate is one gene per task, each gene naming the processor the
//! task runs on. Fitness is cached on the candidate and dropped whenever a
//! gene changes, so a stale value can never be compared.

use rand::Rng;

use crate::fitness::{self, Fitness};
use crate::task_set::TaskSet;

/// One of the two processors. A gene of the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Processor {
    /// Label `1`.
    A,
    /// Label `0`.
    B,
}

impl Processor {
    /// Binary label: `1` for A, `0` for B.
    pub fn label(self) -> u8 {
        match self {
            Processor::A => 1,
            Processor::B => 0,
        }
    }

    /// Inverse of [`label`](Self::label). Any non-zero label maps to A.
    pub fn from_label(label: u8) -> Self {
        if label == 0 {
            Processor::B
        } else {
            Processor::A
        }
    }

    /// The other processor.
    pub fn flipped(self) -> Self {
        match self {
            Processor::A => Processor::B,
            Processor::B => Processor::A,
        }
    }
}

/// A proposed partition of tasks between the two processors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    assignment: Vec<Processor>,
    fitness: Option<Fitness>,
}

impl Candidate {
    /// Creates a candidate with `task_count` independent fair coin flips.
    pub fn create_random<R: Rng>(task_count: usize, rng: &mut R) -> Self {
        let assignment = (0..task_count)
            .map(|_| {
                if rng.random_bool(0.5) {
                    Processor::A
                } else {
                    Processor::B
                }
            })
            .collect();
        Self::create_from(assignment)
    }

    /// Wraps an existing assignment. The candidate starts unevaluated.
    pub fn create_from(assignment: Vec<Processor>) -> Self {
        Self {
            assignment,
            fitness: None,
        }
    }

    /// Computes fitness against `task_set`, caches it and returns it.
    ///
    /// # Panics
    /// Panics if the assignment length differs from the task count.
    pub fn evaluate(&mut self, task_set: &TaskSet) -> Fitness {
        assert_eq!(
            self.assignment.len(),
            task_set.task_count(),
            "assignment length must match task count"
        );
        let f = fitness::fitness(&self.assignment, task_set);
        self.fitness = Some(f);
        f
    }

    /// Flips the gene at `index` and invalidates the cached fitness.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn mutate_bit(&mut self, index: usize) {
        self.assignment[index] = self.assignment[index].flipped();
        self.fitness = None;
    }

    /// The genes, one per task.
    pub fn assignment(&self) -> &[Processor] {
        &self.assignment
    }

    /// The genes as binary labels.
    pub fn labels(&self) -> Vec<u8> {
        self.assignment.iter().map(|p| p.label()).collect()
    }

    /// Cached fitness, or `None` if the candidate has not been evaluated
    /// since it was created or last mutated.
    pub fn fitness(&self) -> Option<Fitness> {
        self.fitness
    }

    /// Fitness used for ranking. Unevaluated candidates rank as worst.
    pub(crate) fn rank_fitness(&self) -> Fitness {
        self.fitness.unwrap_or(Fitness::worst())
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    /// Returns `true` if there are no genes.
    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    /// Indices of the tasks placed on `processor`, ascending.
    pub fn tasks_on(&self, processor: Processor) -> Vec<usize> {
        self.assignment
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == processor)
            .map(|(i, _)| i)
            .collect()
    }

    /// Busy time of processor A and processor B under `task_set`.
    pub fn loads(&self, task_set: &TaskSet) -> (u64, u64) {
        fitness::processor_loads(&self.assignment, task_set)
    }
}

/// One-point crossover at `cut`.
///
/// The first child takes `parent1[..cut]` and `parent2[cut..]`; the second
/// child is the complementary recombination. Both children are unevaluated.
///
/// # Panics
/// Panics if the parents differ in length or `cut > len`.
pub fn one_point_crossover(
    parent1: &Candidate,
    parent2: &Candidate,
    cut: usize,
) -> (Candidate, Candidate) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(cut <= n, "cut index out of range");

    let (p1, p2) = (parent1.assignment(), parent2.assignment());

    let mut c1 = Vec::with_capacity(n);
    c1.extend_from_slice(&p1[..cut]);
    c1.extend_from_slice(&p2[cut..]);

    let mut c2 = Vec::with_capacity(n);
    c2.extend_from_slice(&p2[..cut]);
    c2.extend_from_slice(&p1[cut..]);

    (Candidate::create_from(c1), Candidate::create_from(c2))
}

/// Flips each gene independently with probability `rate`.
///
/// `rate` is clamped to `[0, 1]`; NaN counts as `0`. Returns the number
/// of flipped genes.
pub fn mutate_genes<R: Rng>(candidate: &mut Candidate, rate: f64, rng: &mut R) -> usize {
    let rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
    let mut flipped = 0;
    for i in 0..candidate.len() {
        if rng.random_bool(rate) {
            candidate.mutate_bit(i);
            flipped += 1;
        }
    }
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn from_labels(labels: &[u8]) -> Candidate {
        Candidate::create_from(labels.iter().map(|&l| Processor::from_label(l)).collect())
    }

    #[test]
    fn test_processor_labels() {
        assert_eq!(Processor::A.label(), 1);
        assert_eq!(Processor::B.label(), 0);
        assert_eq!(Processor::from_label(1), Processor::A);
        assert_eq!(Processor::from_label(0), Processor::B);
        assert_eq!(Processor::A.flipped(), Processor::B);
    }

    #[test]
    fn test_create_random_length_and_mix() {
        let mut rng = StdRng::seed_from_u64(42);
        let c = Candidate::create_random(1000, &mut rng);
        assert_eq!(c.len(), 1000);
        assert!(c.fitness().is_none());
        let on_a = c.tasks_on(Processor::A).len();
        assert!(on_a > 400 && on_a < 600, "expected roughly half on A, got {on_a}");
    }

    #[test]
    fn test_evaluate_caches() {
        let tasks = TaskSet::new(vec![2, 3], 5).unwrap();
        let mut c = from_labels(&[1, 0]);
        assert_eq!(c.evaluate(&tasks), Fitness::Makespan(3));
        assert_eq!(c.fitness(), Some(Fitness::Makespan(3)));
    }

    #[test]
    fn test_mutate_bit_invalidates_fitness() {
        let tasks = TaskSet::new(vec![2, 3], 5).unwrap();
        let mut c = from_labels(&[1, 0]);
        c.evaluate(&tasks);
        c.mutate_bit(0);
        assert_eq!(c.labels(), vec![0, 0]);
        assert!(c.fitness().is_none());
        assert_eq!(c.rank_fitness(), Fitness::Infeasible);
        assert_eq!(c.evaluate(&tasks), Fitness::Makespan(5));
    }

    #[test]
    #[should_panic(expected = "assignment length must match task count")]
    fn test_evaluate_length_mismatch_panics() {
        let tasks = TaskSet::new(vec![2, 3, 4], 5).unwrap();
        from_labels(&[1, 0]).evaluate(&tasks);
    }

    #[test]
    fn test_tasks_on_and_loads() {
        let tasks = TaskSet::new(vec![5, 1, 7, 2], 20).unwrap();
        let c = from_labels(&[1, 0, 0, 1]);
        assert_eq!(c.tasks_on(Processor::A), vec![0, 3]);
        assert_eq!(c.tasks_on(Processor::B), vec![1, 2]);
        assert_eq!(c.loads(&tasks), (7, 8));
    }

    #[test]
    fn test_crossover_example() {
        let p1 = from_labels(&[1, 1, 1, 1, 1]);
        let p2 = from_labels(&[0, 0, 0, 0, 0]);
        let (c1, c2) = one_point_crossover(&p1, &p2, 2);
        assert_eq!(c1.labels(), vec![1, 1, 0, 0, 0]);
        assert_eq!(c2.labels(), vec![0, 0, 1, 1, 1]);
        assert!(c1.fitness().is_none());
    }

    #[test]
    fn test_mutation_rate_zero_and_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let original = from_labels(&[1, 0, 1, 1, 0, 0]);

        let mut c = original.clone();
        assert_eq!(mutate_genes(&mut c, 0.0, &mut rng), 0);
        assert_eq!(c, original);

        let mut c = original.clone();
        assert_eq!(mutate_genes(&mut c, 1.0, &mut rng), 6);
        assert_eq!(c.labels(), vec![0, 1, 0, 0, 1, 1]);
    }

    #[test]
    fn test_mutation_nan_rate_is_noop() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut c = from_labels(&[1, 0, 1]);
        assert_eq!(mutate_genes(&mut c, f64::NAN, &mut rng), 0);
        assert_eq!(c.labels(), vec![1, 0, 1]);
    }

    fn labels_strategy() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
        (1usize..64).prop_flat_map(|n| {
            (
                prop::collection::vec(0u8..2, n),
                prop::collection::vec(0u8..2, n),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_crossover_splits_at_cut((l1, l2) in labels_strategy(), cut_seed in any::<usize>()) {
            let n = l1.len();
            let cut = cut_seed % (n + 1);
            let (p1, p2) = (from_labels(&l1), from_labels(&l2));
            let (c1, c2) = one_point_crossover(&p1, &p2, cut);
            prop_assert_eq!(&c1.assignment()[..cut], &p1.assignment()[..cut]);
            prop_assert_eq!(&c1.assignment()[cut..], &p2.assignment()[cut..]);
            prop_assert_eq!(&c2.assignment()[..cut], &p2.assignment()[..cut]);
            prop_assert_eq!(&c2.assignment()[cut..], &p1.assignment()[cut..]);
        }

        #[test]
        fn prop_full_mutation_flips_every_gene(labels in prop::collection::vec(0u8..2, 1..64), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut c = from_labels(&labels);
            mutate_genes(&mut c, 1.0, &mut rng);
            for (before, after) in labels.iter().zip(c.labels()) {
                prop_assert_eq!(1 - before, after);
            }
        }

        #[test]
        fn prop_zero_mutation_is_identity(labels in prop::collection::vec(0u8..2, 1..64), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut c = from_labels(&labels);
            mutate_genes(&mut c, 0.0, &mut rng);
            prop_assert_eq!(c.labels(), labels);
        }
    }
}
