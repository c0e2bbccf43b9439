//! Initial population creation.

use crate::problem::Problem;
use crate::solution::Solution;
use rand::Rng;
use std::collections::VecDeque;

/// Source of new solutions.
#[derive(Debug, Clone)]
pub enum Generator<T> {
    /// Delegates to [`Problem::create_solution`].
    Random,

    /// Hands out the queued solutions first, then falls back to random.
    ///
    /// Used to warm-start a run from known good solutions.
    Injector(VecDeque<Solution<T>>),
}

impl<T> Default for Generator<T> {
    fn default() -> Self {
        Generator::Random
    }
}

impl<T> Generator<T> {
    pub fn injector(solutions: impl IntoIterator<Item = Solution<T>>) -> Self {
        Generator::Injector(solutions.into_iter().collect())
    }

    /// Produces the next solution. Injected solutions have their attributes
    /// cleared.
    pub fn new_solution<P, R>(&mut self, problem: &P, rng: &mut R) -> Solution<T>
    where
        P: Problem<Variable = T>,
        R: Rng + ?Sized,
    {
        if let Generator::Injector(queue) = self {
            if let Some(mut solution) = queue.pop_front() {
                solution.attributes.clear();
                return solution;
            }
        }
        problem.create_solution(rng)
    }
}

/// Builds the initial population.
#[derive(Debug, Clone)]
pub struct SolutionCreation<T> {
    population_size: usize,
    generator: Generator<T>,
}

impl<T> SolutionCreation<T> {
    pub fn new(population_size: usize) -> Self {
        Self {
            population_size,
            generator: Generator::Random,
        }
    }

    pub fn with_generator(mut self, generator: Generator<T>) -> Self {
        self.generator = generator;
        self
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Creates `population_size` unevaluated solutions.
    pub fn create<P, R>(&mut self, problem: &P, rng: &mut R) -> Vec<Solution<T>>
    where
        P: Problem<Variable = T>,
        R: Rng + ?Sized,
    {
        (0..self.population_size)
            .map(|_| self.generator.new_solution(problem, rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Zdt1;
    use crate::random::create_rng;

    #[test]
    fn test_random_creation_size() {
        let problem = Zdt1::new(5);
        let mut rng = create_rng(42);
        let mut creation = SolutionCreation::new(12);
        let pop = creation.create(&problem, &mut rng);
        assert_eq!(pop.len(), 12);
        assert!(pop.iter().all(|s| s.variables.len() == 5));
    }

    #[test]
    fn test_injector_first_then_random() {
        let problem = Zdt1::new(3);
        let mut rng = create_rng(42);

        let mut seeded = Solution::new(vec![0.0, 0.0, 0.0], 2, 0);
        seeded.attributes.dominance_ranking = Some(4);
        let mut creation =
            SolutionCreation::new(4).with_generator(Generator::injector(vec![seeded]));

        let pop = creation.create(&problem, &mut rng);
        assert_eq!(pop.len(), 4);
        assert_eq!(pop[0].variables, vec![0.0, 0.0, 0.0]);
        assert_eq!(pop[0].attributes.dominance_ranking, None);
        assert_ne!(pop[1].variables, vec![0.0, 0.0, 0.0]);
    }
}
