//! Pluggable multi-objective evolutionary algorithms.
//!
//! Provides the building blocks of NSGA-II-style optimizers:
//!
//! - **Solutions and comparators**: constraint-first Pareto dominance,
//!   attribute ordering, and composite tie-breaking.
//! - **Fast non-dominated ranking**: partitions a population into Pareto
//!   fronts, optionally in parallel.
//! - **Crowding distance**: density estimate used to keep fronts spread out.
//! - **Components**: creation, evaluation, selection, variation,
//!   replacement (one-shot or sequential truncation), and termination.
//! - **Operators**: SBX and polynomial mutation for real-coded problems,
//!   single-point and bit-flip for binary, PMX and swap for permutations.
//! - **Algorithm**: the generational loop, with an NSGA-II preset.
//! - **Quality indicators**: hypervolume and a non-dominated archive.
//!
//! # Quick Start
//!
//! ```
//! use u_moea::algorithm::{EvolutionaryAlgorithm, Nsga2Config};
//! use u_moea::multi_objective::get_non_dominated_solutions;
//! use u_moea::problem::Zdt1;
//!
//! let config = Nsga2Config::fast().with_max_evaluations(1_000).with_seed(7);
//! let mut nsga2 = EvolutionaryAlgorithm::nsga2(Zdt1::new(10), &config).unwrap();
//! nsga2.run().unwrap();
//!
//! let front = get_non_dominated_solutions(nsga2.result());
//! assert!(!front.is_empty());
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluation and ranking on the rayon thread pool
//! - `serde`: `Serialize`/`Deserialize` for solutions, bounds, and configuration

pub mod algorithm;
pub mod comparator;
pub mod components;
pub mod error;
pub mod multi_objective;
pub mod operators;
pub mod problem;
pub mod random;
pub mod solution;
