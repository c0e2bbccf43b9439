//! Offspring generation: crossover followed by mutation.

use crate::error::Result;
use crate::operators::{Crossover, Mutation};
use crate::solution::Solution;
use rand::RngCore;
use std::fmt;

/// Applies crossover to consecutive parent groups, then mutation to every
/// child.
///
/// The mating pool is split into groups of `crossover.number_of_parents()`;
/// a trailing partial group is ignored.
pub struct Variation<T> {
    crossover: Box<dyn Crossover<T>>,
    mutation: Box<dyn Mutation<T>>,
    offspring_population_size: usize,
}

impl<T> fmt::Debug for Variation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variation")
            .field("crossover", &self.crossover.name())
            .field("mutation", &self.mutation.name())
            .field("offspring_population_size", &self.offspring_population_size)
            .finish()
    }
}

impl<T> Variation<T> {
    pub fn new<C, M>(offspring_population_size: usize, crossover: C, mutation: M) -> Self
    where
        C: Crossover<T> + 'static,
        M: Mutation<T> + 'static,
    {
        Self {
            crossover: Box::new(crossover),
            mutation: Box::new(mutation),
            offspring_population_size,
        }
    }

    /// Mating pool size needed for `offspring_population_size` children:
    /// `offspring * parents / children`.
    pub fn mating_pool_size(&self) -> usize {
        let children = self.crossover.number_of_children().max(1);
        self.offspring_population_size * self.crossover.number_of_parents() / children
    }

    pub fn offspring_population_size(&self) -> usize {
        self.offspring_population_size
    }

    pub fn crossover(&self) -> &dyn Crossover<T> {
        self.crossover.as_ref()
    }

    pub fn mutation(&self) -> &dyn Mutation<T> {
        self.mutation.as_ref()
    }

    /// Produces offspring from `mating_pool`.
    pub fn variate(
        &self,
        mating_pool: &[&Solution<T>],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Solution<T>>> {
        let arity = self.crossover.number_of_parents().max(1);
        let mut offspring = Vec::with_capacity(
            mating_pool.len() / arity * self.crossover.number_of_children(),
        );

        for parents in mating_pool.chunks_exact(arity) {
            for child in self.crossover.execute(parents, rng)? {
                offspring.push(self.mutation.execute(child, rng)?);
            }
        }
        Ok(offspring)
    }
}
