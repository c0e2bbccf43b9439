//! Environmental replacement: ranking plus density-based truncation.

use crate::error::Result;
use crate::multi_objective::{CrowdingDistance, FastNonDominatedRanking};
use crate::solution::Solution;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the front that overflows the survivor budget is cut down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RemovalPolicy {
    /// Compute crowding once and keep the top `remaining` solutions.
    #[default]
    OneShot,

    /// Drop the single most crowded solution, recompute crowding, repeat.
    Sequential,
}

/// Merges parents and offspring and keeps the best `population.len()`.
///
/// # Algorithm
///
/// 1. Rank the joined pool into fronts
/// 2. Accept whole fronts while they are strictly smaller than the remaining budget
/// 3. Cut the first front that does not fit according to the [`RemovalPolicy`]
///
/// Crowding distance is computed for every front that is visited, so
/// survivors carry both rank and distance for the next tournament.
#[derive(Debug, Clone, Default)]
pub struct Replacement {
    ranking: FastNonDominatedRanking,
    density_estimator: CrowdingDistance,
    removal_policy: RemovalPolicy,
}

impl Replacement {
    pub fn new(
        ranking: FastNonDominatedRanking,
        density_estimator: CrowdingDistance,
        removal_policy: RemovalPolicy,
    ) -> Self {
        Self {
            ranking,
            density_estimator,
            removal_policy,
        }
    }

    /// Default ranking and crowding with the given policy.
    pub fn with_policy(removal_policy: RemovalPolicy) -> Self {
        Self {
            removal_policy,
            ..Self::default()
        }
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal_policy
    }

    /// Returns exactly `population.len()` survivors from `population` and
    /// `offspring`.
    ///
    /// # Errors
    /// [`MoeaError::InvalidRank`](crate::error::MoeaError::InvalidRank) if the
    /// pool runs out of fronts before the budget is met.
    pub fn replace<T: Send + Sync>(
        &self,
        population: Vec<Solution<T>>,
        offspring: Vec<Solution<T>>,
    ) -> Result<Vec<Solution<T>>> {
        let target = population.len();
        if target == 0 {
            return Ok(Vec::new());
        }

        let mut pool = population;
        pool.extend(offspring);

        let ranking = self.ranking.compute_ranking(&mut pool, None);

        let mut survivors: Vec<usize> = Vec::with_capacity(target);
        let mut rank = 0;
        while survivors.len() < target {
            let remaining = target - survivors.len();
            let mut front = ranking.subfront(rank)?.to_vec();
            self.density_estimator
                .compute_density_estimator(&mut pool, &front);

            if front.len() < remaining {
                survivors.extend_from_slice(&front);
                rank += 1;
                continue;
            }

            trace!(
                rank,
                front_size = front.len(),
                remaining,
                policy = ?self.removal_policy,
                "truncating front"
            );
            match self.removal_policy {
                RemovalPolicy::OneShot => {
                    self.density_estimator.sort(&pool, &mut front);
                    front.truncate(remaining);
                }
                RemovalPolicy::Sequential => {
                    while front.len() > remaining {
                        self.density_estimator.sort(&pool, &mut front);
                        front.pop();
                        self.density_estimator
                            .compute_density_estimator(&mut pool, &front);
                    }
                }
            }
            survivors.extend_from_slice(&front);
        }

        survivors.sort_unstable();
        let mut keep = vec![false; pool.len()];
        for &i in &survivors {
            keep[i] = true;
        }
        Ok(pool
            .into_iter()
            .zip(keep)
            .filter_map(|(s, k)| k.then_some(s))
            .collect())
    }
}
