//! Binary-coded operators.
//!
//! A binary solution holds one bit vector per variable; these operators treat
//! the concatenation of all vectors as a single bit string.

use super::{check_len, check_parents, offspring_of, Crossover, Mutation};
use crate::error::{check_probability, Result};
use crate::solution::Solution;
use rand::{Rng, RngCore};

/// Single-point crossover over the concatenated bit string.
#[derive(Debug, Clone)]
pub struct SinglePointCrossover {
    probability: f64,
}

impl SinglePointCrossover {
    pub fn new(probability: f64) -> Result<Self> {
        check_probability("Single point crossover", probability)?;
        Ok(Self { probability })
    }
}

impl Crossover<Vec<bool>> for SinglePointCrossover {
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
        parents: &[&Solution<Vec<bool>>],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Solution<Vec<bool>>>> {
        check_parents("Single point crossover", 2, parents)?;
        let (p1, p2) = (parents[0], parents[1]);
        check_len(p1.variables.len(), p2.variables.len())?;
        for (v1, v2) in p1.variables.iter().zip(&p2.variables) {
            check_len(v1.len(), v2.len())?;
        }

        let mut c1 = offspring_of(p1);
        let mut c2 = offspring_of(p2);

        let total_bits: usize = p1.variables.iter().map(Vec::len).sum();
        if total_bits == 0 || rng.random::<f64>() > self.probability {
            return Ok(vec![c1, c2]);
        }

        let cut = rng.random_range(0..total_bits);
        let tail = c1
            .variables
            .iter_mut()
            .flatten()
            .zip(c2.variables.iter_mut().flatten())
            .skip(cut);
        for (b1, b2) in tail {
            std::mem::swap(b1, b2);
        }

        Ok(vec![c1, c2])
    }

    fn name(&self) -> &str {
        "Single point crossover"
    }
}

/// Flips each bit independently with `probability`.
#[derive(Debug, Clone)]
pub struct BitFlipMutation {
    probability: f64,
}

impl BitFlipMutation {
    pub fn new(probability: f64) -> Result<Self> {
        check_probability("BitFlip mutation", probability)?;
        Ok(Self { probability })
    }
}

impl Mutation<Vec<bool>> for BitFlipMutation {
    fn probability(&self) -> f64 {
        self.probability
    }

    fn execute(
        &self,
        mut solution: Solution<Vec<bool>>,
        rng: &mut dyn RngCore,
    ) -> Result<Solution<Vec<bool>>> {
        for bit in solution.variables.iter_mut().flatten() {
            if rng.random::<f64>() <= self.probability {
                *bit = !*bit;
            }
        }
        Ok(solution)
    }

    fn name(&self) -> &str {
        "BitFlip mutation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoeaError;
    use crate::random::create_rng;

    fn bits(vars: Vec<Vec<bool>>) -> Solution<Vec<bool>> {
        Solution::new(vars, 1, 0)
    }

    #[test]
    fn test_bitflip_probability_one_flips_all() {
        let m = BitFlipMutation::new(1.0).unwrap();
        let mut rng = create_rng(42);
        let s = bits(vec![vec![true, false, true], vec![false]]);
        let out = m.execute(s, &mut rng).unwrap();
        assert_eq!(out.variables, vec![vec![false, true, false], vec![true]]);
    }

    #[test]
    fn test_bitflip_rejects_bad_probability() {
        assert!(matches!(
            BitFlipMutation::new(2.0),
            Err(MoeaError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn test_single_point_preserves_bit_counts_per_position() {
        let x = SinglePointCrossover::new(1.0).unwrap();
        let mut rng = create_rng(7);
        let p1 = bits(vec![vec![true; 6], vec![true; 4]]);
        let p2 = bits(vec![vec![false; 6], vec![false; 4]]);

        for _ in 0..50 {
            let children = x.execute(&[&p1, &p2], &mut rng).unwrap();
            let flat1: Vec<bool> = children[0].variables.iter().flatten().copied().collect();
            let flat2: Vec<bool> = children[1].variables.iter().flatten().copied().collect();

            // each position keeps one bit from each parent
            for (a, b) in flat1.iter().zip(&flat2) {
                assert_ne!(a, b);
            }
            // child 1 is a prefix of ones followed by zeros
            let cut = flat1.iter().position(|b| !b).unwrap_or(flat1.len());
            assert!(flat1[cut..].iter().all(|b| !b));
            assert_eq!(children[0].variables[1].len(), 4);
        }
    }

    #[test]
    fn test_single_point_shape_mismatch() {
        let x = SinglePointCrossover::new(1.0).unwrap();
        let mut rng = create_rng(7);
        let p1 = bits(vec![vec![true; 3]]);
        let p2 = bits(vec![vec![false; 2]]);
        assert!(matches!(
            x.execute(&[&p1, &p2], &mut rng),
            Err(MoeaError::DimensionMismatch { .. })
        ));
    }
}
