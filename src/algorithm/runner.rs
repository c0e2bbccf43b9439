//! Generational loop execution.
//!
//! [`EvolutionaryAlgorithm`] orchestrates the complete process:
//! creation → evaluation → (selection → variation → evaluation →
//! replacement → termination) repeated.

use super::config::Nsga2Config;
use crate::comparator::Comparator;
use crate::components::{
    Evaluation, RemovalPolicy, Replacement, Selection, SolutionCreation, Termination, Variation,
};
use crate::error::{MoeaError, Result};
use crate::multi_objective::{CrowdingDistance, FastNonDominatedRanking};
use crate::operators::{PolynomialMutation, SbxCrossover};
use crate::problem::{FloatProblem, Problem};
use crate::random::{create_rng, rng_from_option};
use crate::solution::Solution;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmState {
    NotStarted,
    Initializing,
    Evaluating,
    Iterating,
    Terminated,
}

/// Progress snapshot of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservableData {
    /// Initial population size plus the configured offspring size per
    /// generation.
    pub evaluations: usize,

    /// Completed generations.
    pub generations: usize,

    /// Wall time of the last finished run, or zero before it ends.
    pub computing_time: Duration,

    pub state: AlgorithmState,
}

/// A generational evolutionary algorithm assembled from components.
///
/// # Usage
///
/// ```
/// use u_moea::algorithm::{EvolutionaryAlgorithm, Nsga2Config};
/// use u_moea::problem::Zdt1;
///
/// let config = Nsga2Config::default()
///     .with_population_size(20)
///     .with_offspring_population_size(20)
///     .with_max_evaluations(200)
///     .with_seed(42);
///
/// let mut nsga2 = EvolutionaryAlgorithm::nsga2(Zdt1::new(5), &config).unwrap();
/// nsga2.run().unwrap();
/// assert_eq!(nsga2.result().len(), 20);
/// ```
pub struct EvolutionaryAlgorithm<P: Problem> {
    name: String,
    problem: P,
    creation: SolutionCreation<P::Variable>,
    evaluation: Evaluation,
    selection: Selection,
    variation: Variation<P::Variable>,
    replacement: Replacement,
    termination: Termination,
    rng: StdRng,

    population: Vec<Solution<P::Variable>>,
    evaluations: usize,
    generations: usize,
    state: AlgorithmState,
    computing_time: Duration,
}

impl<P: Problem> EvolutionaryAlgorithm<P> {
    /// Assembles an algorithm with sequential evaluation, binary tournament
    /// on rank and crowding distance, and a randomly seeded generator.
    pub fn new(
        problem: P,
        creation: SolutionCreation<P::Variable>,
        variation: Variation<P::Variable>,
        replacement: Replacement,
        termination: Termination,
    ) -> Self {
        let selection = Selection::BinaryTournament {
            mating_pool_size: variation.mating_pool_size(),
            comparator: Comparator::ranking_and_crowding(),
        };
        Self {
            name: "EvolutionaryAlgorithm".into(),
            problem,
            creation,
            evaluation: Evaluation::default(),
            selection,
            variation,
            replacement,
            termination,
            rng: create_rng(rand::random()),
            population: Vec::new(),
            evaluations: 0,
            generations: 0,
            state: AlgorithmState::NotStarted,
            computing_time: Duration::ZERO,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Seeds the random generator for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = create_rng(seed);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn state(&self) -> AlgorithmState {
        self.state
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn total_computing_time(&self) -> Duration {
        self.computing_time
    }

    pub fn observable_data(&self) -> ObservableData {
        ObservableData {
            evaluations: self.evaluations,
            generations: self.generations,
            computing_time: self.computing_time,
            state: self.state,
        }
    }

    /// The current population; after [`run`](Self::run) this is the final
    /// approximation of the Pareto front.
    ///
    /// Dominated solutions are not filtered out; use
    /// [`get_non_dominated_solutions`](crate::multi_objective::get_non_dominated_solutions)
    /// for a strict front.
    pub fn result(&self) -> &[Solution<P::Variable>] {
        &self.population
    }

    pub fn into_result(self) -> Vec<Solution<P::Variable>> {
        self.population
    }

    /// Runs the algorithm until the termination criterion is met.
    ///
    /// # Errors
    /// Any component error aborts the run and is returned unchanged. The
    /// algorithm is left in [`AlgorithmState::Terminated`].
    pub fn run(&mut self) -> Result<()> {
        let start = Instant::now();
        info!(
            algorithm = %self.name,
            problem = self.problem.name(),
            population_size = self.creation.population_size(),
            offspring_population_size = self.variation.offspring_population_size(),
            "run started"
        );
        if self.evaluation == Evaluation::Parallel && !self.evaluation.is_parallel() {
            warn!("parallel evaluation requested without the `parallel` feature; evaluating sequentially");
        }

        let outcome = self.execute();
        self.computing_time = start.elapsed();
        self.state = AlgorithmState::Terminated;

        match &outcome {
            Ok(()) => info!(
                algorithm = %self.name,
                evaluations = self.evaluations,
                generations = self.generations,
                elapsed_ms = self.computing_time.as_millis() as u64,
                "run finished"
            ),
            Err(e) => error!(
                algorithm = %self.name,
                evaluations = self.evaluations,
                generations = self.generations,
                error = %e,
                "run aborted"
            ),
        }
        outcome
    }

    fn execute(&mut self) -> Result<()> {
        self.termination.start();
        self.evaluations = 0;
        self.generations = 0;

        // The counter advances by the configured offspring size; zero never terminates.
        if self.variation.offspring_population_size() == 0 {
            return Err(MoeaError::InvariantViolation(
                "offspring population size must be at least 1".into(),
            ));
        }

        self.state = AlgorithmState::Initializing;
        let population = self.creation.create(&self.problem, &mut self.rng);

        self.state = AlgorithmState::Evaluating;
        self.population = self.evaluation.evaluate(population, &self.problem)?;
        self.evaluations = self.population.len();

        self.state = AlgorithmState::Iterating;
        while !self.termination.is_met() {
            self.step()?;
        }
        Ok(())
    }

    /// One generation: select, vary, evaluate, replace, update termination.
    fn step(&mut self) -> Result<()> {
        let mating_pool = self.selection.select(&self.population, &mut self.rng)?;
        let offspring = self.variation.variate(&mating_pool, &mut self.rng)?;
        let offspring = self.evaluation.evaluate(offspring, &self.problem)?;
        let produced = offspring.len();

        let population = std::mem::take(&mut self.population);
        self.population = self.replacement.replace(population, offspring)?;

        self.evaluations += self.variation.offspring_population_size();
        self.generations += 1;
        self.termination.update(self.evaluations);

        debug!(
            generation = self.generations,
            evaluations = self.evaluations,
            offspring = produced,
            "generation completed"
        );
        Ok(())
    }
}

impl<P: FloatProblem> EvolutionaryAlgorithm<P> {
    /// NSGA-II with SBX crossover, polynomial mutation, binary tournament
    /// on rank and crowding distance, and ranking-plus-crowding replacement.
    ///
    /// # Errors
    /// [`MoeaError::InvalidConfig`] if `config` fails validation, or an
    /// operator construction error.
    pub fn nsga2(problem: P, config: &Nsga2Config) -> Result<Self> {
        config.validate()?;

        let bounds = problem.bounds().clone();
        let mutation_probability = config
            .mutation_probability
            .unwrap_or(1.0 / problem.number_of_variables().max(1) as f64);

        let variation = Variation::new(
            config.offspring_population_size,
            SbxCrossover::new(
                config.crossover_probability,
                config.crossover_distribution_index,
                bounds.clone(),
            )?,
            PolynomialMutation::new(
                mutation_probability,
                config.mutation_distribution_index,
                bounds,
            )?,
        );

        let ranking = FastNonDominatedRanking::default().with_parallel(config.parallel);
        let replacement = Replacement::new(ranking, CrowdingDistance, config.removal_policy);

        let by_evaluations = Termination::by_evaluations(config.max_evaluations);
        let termination = match config.time_limit_ms {
            Some(ms) => Termination::any([by_evaluations, Termination::by_time(Duration::from_millis(ms))]),
            None => by_evaluations,
        };

        let evaluation = if config.parallel {
            Evaluation::Parallel
        } else {
            Evaluation::Sequential
        };

        let mut algorithm = Self::new(
            problem,
            SolutionCreation::new(config.population_size),
            variation,
            replacement,
            termination,
        )
        .with_name(match config.removal_policy {
            RemovalPolicy::OneShot => "NSGA-II",
            RemovalPolicy::Sequential => "NSGA-II (sequential truncation)",
        })
        .with_evaluation(evaluation);
        algorithm.rng = rng_from_option(config.seed);
        Ok(algorithm)
    }
}

// ============================================================================
// Tests
// ============================================================================
