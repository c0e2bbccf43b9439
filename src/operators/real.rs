//! Real-coded operators.

use super::{check_len, check_parents, offspring_of, Crossover, Mutation};
use crate::error::{check_distribution_index, check_probability, Result};
use crate::problem::Bounds;
use crate::solution::Solution;
use rand::{Rng, RngCore};

const EPS: f64 = 1.0e-14;

/// Simulated binary crossover (SBX).
///
/// Each variable is recombined with probability 0.5 when the parents differ
/// by more than `1e-14`. Children are clamped into the variable's bounds.
/// Larger distribution indices keep children closer to their parents.
#[derive(Debug, Clone)]
pub struct SbxCrossover {
    probability: f64,
    distribution_index: f64,
    bounds: Bounds,
}

impl SbxCrossover {
    pub fn new(probability: f64, distribution_index: f64, bounds: Bounds) -> Result<Self> {
        check_probability("SBX crossover", probability)?;
        check_distribution_index("SBX crossover", distribution_index)?;
        Ok(Self {
            probability,
            distribution_index,
            bounds,
        })
    }

    pub fn distribution_index(&self) -> f64 {
        self.distribution_index
    }

    /// Spread factor for one side of the parent interval.
    fn betaq(&self, beta: f64, u: f64) -> f64 {
        let eta1 = self.distribution_index + 1.0;
        let alpha = 2.0 - beta.powf(-eta1);
        if u <= 1.0 / alpha {
            (u * alpha).powf(1.0 / eta1)
        } else {
            (1.0 / (2.0 - u * alpha)).powf(1.0 / eta1)
        }
    }
}

impl Crossover<f64> for SbxCrossover {
    fn probability(&self) -> f64 {
        self.probability
    }

    fn number_of_parents(&self) -> usize {
        2
    }

    fn number_of_children(&self) -> usize {
        2
    }

    fn execute(
        &self,
        parents: &[&Solution<f64>],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Solution<f64>>> {
        check_parents("SBX crossover", 2, parents)?;
        let (p1, p2) = (parents[0], parents[1]);
        check_len(self.bounds.len(), p1.variables.len())?;
        check_len(self.bounds.len(), p2.variables.len())?;

        let mut c1 = offspring_of(p1);
        let mut c2 = offspring_of(p2);

        if rng.random::<f64>() > self.probability {
            return Ok(vec![c1, c2]);
        }

        for i in 0..self.bounds.len() {
            let (x1, x2) = (p1.variables[i], p2.variables[i]);
            if rng.random::<f64>() > 0.5 || (x1 - x2).abs() <= EPS {
                continue;
            }

            let (y1, y2) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
            let (lower, upper) = (self.bounds.lower(i), self.bounds.upper(i));
            let u = rng.random::<f64>();

            let beta_low = self.betaq(1.0 + 2.0 * (y1 - lower) / (y2 - y1), u);
            let low = 0.5 * (y1 + y2 - beta_low * (y2 - y1));

            let beta_high = self.betaq(1.0 + 2.0 * (upper - y2) / (y2 - y1), u);
            let high = 0.5 * (y1 + y2 + beta_high * (y2 - y1));

            let low = low.clamp(lower, upper);
            let high = high.clamp(lower, upper);

            if rng.random::<f64>() <= 0.5 {
                c1.variables[i] = high;
                c2.variables[i] = low;
            } else {
                c1.variables[i] = low;
                c2.variables[i] = high;
            }
        }

        Ok(vec![c1, c2])
    }

    fn name(&self) -> &str {
        "SBX crossover"
    }
}

/// Polynomial mutation.
///
/// Each variable mutates with `probability`; the perturbation follows a
/// polynomial distribution shaped by `distribution_index` and stays inside
/// the variable's bounds.
#[derive(Debug, Clone)]
pub struct PolynomialMutation {
    probability: f64,
    distribution_index: f64,
    bounds: Bounds,
}

impl PolynomialMutation {
    pub fn new(probability: f64, distribution_index: f64, bounds: Bounds) -> Result<Self> {
        check_probability("Polynomial mutation", probability)?;
        check_distribution_index("Polynomial mutation", distribution_index)?;
        Ok(Self {
            probability,
            distribution_index,
            bounds,
        })
    }

    pub fn distribution_index(&self) -> f64 {
        self.distribution_index
    }
}

impl Mutation<f64> for PolynomialMutation {
    fn probability(&self) -> f64 {
        self.probability
    }

    fn execute(&self, mut solution: Solution<f64>, rng: &mut dyn RngCore) -> Result<Solution<f64>> {
        check_len(self.bounds.len(), solution.variables.len())?;
        let eta1 = self.distribution_index + 1.0;
        let mut_pow = 1.0 / eta1;

        for (i, y) in solution.variables.iter_mut().enumerate() {
            if rng.random::<f64>() > self.probability {
                continue;
            }
            let (lower, upper) = (self.bounds.lower(i), self.bounds.upper(i));
            if lower == upper {
                *y = lower;
                continue;
            }

            let span = upper - lower;
            let delta1 = (*y - lower) / span;
            let delta2 = (upper - *y) / span;
            let u = rng.random::<f64>();

            let deltaq = if u <= 0.5 {
                let xy = 1.0 - delta1;
                let val = 2.0 * u + (1.0 - 2.0 * u) * xy.powf(eta1);
                val.powf(mut_pow) - 1.0
            } else {
                let xy = 1.0 - delta2;
                let val = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * xy.powf(eta1);
                1.0 - val.powf(mut_pow)
            };

            *y = (*y + deltaq * span).clamp(lower, upper);
        }

        Ok(solution)
    }

    fn name(&self) -> &str {
        "Polynomial mutation"
    }
}
