//! Candidate solutions.
//!
//! A [`Solution`] carries decision variables, objective values, constraint
//! values, and the [`Attributes`] that ranking and density estimation attach
//! to it. The engine never inspects `variables`; only problems and operators
//! do.
//!
//! All objectives are **minimized**. Problems negate maximization objectives
//! before storing them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metadata written onto a solution by algorithm components.
///
/// Both fields start out `None`. Comparators treat a missing value as "no
/// preference".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attributes {
    /// Front index assigned by non-dominated ranking (0 = best).
    pub dominance_ranking: Option<usize>,

    /// Crowding distance within the solution's front (higher = more isolated).
    pub crowding_distance: Option<f64>,
}

/// Numeric attribute addressable by [`Comparator::Attribute`](crate::comparator::Comparator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AttributeKey {
    DominanceRanking,
    CrowdingDistance,
}

impl Attributes {
    /// Reads an attribute as `f64`, or `None` if it has not been set.
    pub fn get(&self, key: AttributeKey) -> Option<f64> {
        match key {
            AttributeKey::DominanceRanking => self.dominance_ranking.map(|r| r as f64),
            AttributeKey::CrowdingDistance => self.crowding_distance,
        }
    }

    /// Clears every attribute.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A candidate solution with variables of type `T`.
///
/// # Example
///
/// ```
/// use u_moea::solution::Solution;
///
/// let mut s: Solution<f64> = Solution::new(vec![0.5, 0.5], 2, 1);
/// s.objectives = vec![1.0, 2.0];
/// s.constraints = vec![-0.5];
///
/// assert!(!s.is_feasible());
/// assert_eq!(s.overall_constraint_violation(), -0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution<T> {
    /// Decision variables.
    pub variables: Vec<T>,

    /// Objective values, one per objective.
    pub objectives: Vec<f64>,

    /// Constraint values. Negative means violated.
    pub constraints: Vec<f64>,

    /// Ranking and density metadata.
    pub attributes: Attributes,
}

/// Real-coded solution.
pub type FloatSolution = Solution<f64>;

/// Binary-coded solution: one bit vector per variable.
pub type BinarySolution = Solution<Vec<bool>>;

/// Permutation-coded solution.
pub type PermutationSolution = Solution<usize>;

impl<T> Solution<T> {
    /// Creates an unevaluated solution.
    ///
    /// Objectives and constraints are zero-filled to the declared sizes.
    pub fn new(variables: Vec<T>, number_of_objectives: usize, number_of_constraints: usize) -> Self {
        Self {
            variables,
            objectives: vec![0.0; number_of_objectives],
            constraints: vec![0.0; number_of_constraints],
            attributes: Attributes::default(),
        }
    }

    pub fn number_of_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn number_of_objectives(&self) -> usize {
        self.objectives.len()
    }

    pub fn number_of_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Sum of the negative constraint values; 0 when feasible.
    pub fn overall_constraint_violation(&self) -> f64 {
        self.constraints.iter().filter(|&&c| c < 0.0).sum()
    }

    /// Returns `true` if no constraint is violated.
    pub fn is_feasible(&self) -> bool {
        self.constraints.iter().all(|&c| c >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sizes() {
        let s: FloatSolution = Solution::new(vec![0.1, 0.2, 0.3], 2, 1);
        assert_eq!(s.number_of_variables(), 3);
        assert_eq!(s.number_of_objectives(), 2);
        assert_eq!(s.number_of_constraints(), 1);
        assert_eq!(s.attributes, Attributes::default());
    }

    #[test]
    fn test_constraint_violation() {
        let mut s: FloatSolution = Solution::new(vec![], 1, 3);
        s.constraints = vec![-1.0, 2.0, -0.5];
        assert!((s.overall_constraint_violation() + 1.5).abs() < 1e-12);
        assert!(!s.is_feasible());

        s.constraints = vec![0.0, 1.0, 3.0];
        assert_eq!(s.overall_constraint_violation(), 0.0);
        assert!(s.is_feasible());
    }

    #[test]
    fn test_no_constraints_is_feasible() {
        let s: BinarySolution = Solution::new(vec![vec![true, false]], 2, 0);
        assert!(s.is_feasible());
    }

    #[test]
    fn test_attribute_get() {
        let mut attrs = Attributes::default();
        assert_eq!(attrs.get(AttributeKey::DominanceRanking), None);
        assert_eq!(attrs.get(AttributeKey::CrowdingDistance), None);

        attrs.dominance_ranking = Some(2);
        attrs.crowding_distance = Some(f64::INFINITY);
        assert_eq!(attrs.get(AttributeKey::DominanceRanking), Some(2.0));
        assert_eq!(attrs.get(AttributeKey::CrowdingDistance), Some(f64::INFINITY));

        attrs.clear();
        assert_eq!(attrs, Attributes::default());
    }
}
