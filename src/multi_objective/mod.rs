//! Multi-objective optimization utilities.
//!
//! Domain-agnostic building blocks for Pareto-based methods such as NSGA-II.
//!
//! # Algorithms
//!
//! - [`FastNonDominatedRanking`]: Fast non-dominated sorting into fronts
//! - [`CrowdingDistance`]: Per-front diversity estimation
//! - [`NonDominatedArchive`]: Dominance-filtered solution set
//! - [`hypervolume`]: Exact hypervolume quality indicator
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

mod archive;
mod crowding;
mod hypervolume;
mod ranking;

pub use archive::{get_non_dominated_solutions, NonDominatedArchive};
pub use crowding::CrowdingDistance;
pub use hypervolume::hypervolume;
pub use ranking::{FastNonDominatedRanking, Ranking};
