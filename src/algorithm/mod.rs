//! Generational evolutionary algorithms.
//!
//! [`EvolutionaryAlgorithm`] wires the [`components`](crate::components)
//! into the generational loop. [`EvolutionaryAlgorithm::nsga2`] assembles
//! NSGA-II for real-coded problems from an [`Nsga2Config`].
//!
//! # Key Types
//!
//! - [`Nsga2Config`]: Algorithm parameters (population size, budget, operator rates, presets)
//! - [`EvolutionaryAlgorithm`]: Executes the generational loop
//! - [`ObservableData`]: Evaluation count, generations, and computing time of a run
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous Search Space"

mod config;
mod runner;

pub use config::Nsga2Config;
pub use runner::{AlgorithmState, EvolutionaryAlgorithm, ObservableData};
