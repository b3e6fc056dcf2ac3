//! Population of candidates for one generation.

use rand::Rng;

use crate::candidate::Candidate;
use crate::ga::Selection;
use crate::task_set::TaskSet;

/// An ordered collection of candidates.
///
/// Duplicates are allowed. While the next generation is being bred the
/// population grows through [`add`](Self::add); once handed to the
/// engine it is only read and evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    candidates: Vec<Candidate>,
}

impl Population {
    /// Creates an empty population with room for `capacity` candidates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            candidates: Vec::with_capacity(capacity),
        }
    }

    /// Creates `size` random candidates, each evaluated against `task_set`.
    pub fn initialize<R: Rng>(size: usize, task_set: &TaskSet, rng: &mut R) -> Self {
        let candidates = (0..size)
            .map(|_| {
                let mut c = Candidate::create_random(task_set.task_count(), rng);
                c.evaluate(task_set);
                c
            })
            .collect();
        Self { candidates }
    }

    /// Evaluates every candidate whose fitness is not cached.
    ///
    /// Returns the number of candidates evaluated.
    pub fn evaluate_all(&mut self, task_set: &TaskSet) -> usize {
        let mut evaluated = 0;
        for c in self.candidates.iter_mut().filter(|c| c.fitness().is_none()) {
            c.evaluate(task_set);
            evaluated += 1;
        }
        evaluated
    }

    /// The candidate with the lowest fitness. Ties go to the earliest stored.
    ///
    /// Returns `None` only for an empty population.
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.iter().min_by_key(|c| c.rank_fitness())
    }

    /// Picks one parent with the given selection strategy.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn select_one<R: Rng>(&self, selection: Selection, rng: &mut R) -> &Candidate {
        &self.candidates[selection.select(&self.candidates, rng)]
    }

    /// Appends a candidate.
    pub fn add(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    /// Number of candidates.
    pub fn size(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The candidates in storage order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Iterates over the candidates in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }
}

impl From<Vec<Candidate>> for Population {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
