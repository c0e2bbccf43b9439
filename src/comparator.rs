//! Solution comparators.
//!
//! A [`Comparator`] orders two solutions: [`Ordering::Less`] means the first
//! is preferred (dominates), [`Ordering::Greater`] means the second is, and
//! [`Ordering::Equal`] means neither is.
//!
//! # References
//!
//! - Deb, Pratap, Agarwal & Meyarivan (2002), constrained-domination principle,
//!   "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"

use crate::solution::{AttributeKey, Solution};
use std::cmp::Ordering;

/// Strategy for comparing two solutions.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use u_moea::comparator::Comparator;
/// use u_moea::solution::Solution;
///
/// let mut a: Solution<f64> = Solution::new(vec![], 2, 0);
/// let mut b: Solution<f64> = Solution::new(vec![], 2, 0);
/// a.objectives = vec![1.0, 1.0];
/// b.objectives = vec![2.0, 1.0];
///
/// assert_eq!(Comparator::Dominance.compare(&a, &b), Ordering::Less);
/// assert_eq!(Comparator::Dominance.compare(&b, &a), Ordering::Greater);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Comparator {
    /// Constraint violation first, then Pareto dominance on objectives.
    #[default]
    Dominance,

    /// Constraint violation only.
    ///
    /// A feasible solution beats an infeasible one; between two infeasible
    /// solutions the smaller total violation wins.
    OverallConstraintViolation,

    /// A single numeric attribute. `Equal` if either side lacks it.
    Attribute {
        key: AttributeKey,
        lowest_is_best: bool,
    },

    /// Chain of comparators; the first non-`Equal` result wins.
    Multi(Vec<Comparator>),
}

impl Comparator {
    /// Rank ascending, then crowding distance descending.
    ///
    /// The usual NSGA-II tournament comparator.
    pub fn ranking_and_crowding() -> Self {
        Comparator::Multi(vec![
            Comparator::Attribute {
                key: AttributeKey::DominanceRanking,
                lowest_is_best: true,
            },
            Comparator::Attribute {
                key: AttributeKey::CrowdingDistance,
                lowest_is_best: false,
            },
        ])
    }

    /// Compares two solutions.
    pub fn compare<T>(&self, a: &Solution<T>, b: &Solution<T>) -> Ordering {
        match self {
            Comparator::Dominance => match constraint_violation_test(a, b) {
                Ordering::Equal => dominance_test(&a.objectives, &b.objectives),
                decided => decided,
            },
            Comparator::OverallConstraintViolation => constraint_violation_test(a, b),
            Comparator::Attribute {
                key,
                lowest_is_best,
            } => attribute_test(a, b, *key, *lowest_is_best),
            Comparator::Multi(chain) => chain
                .iter()
                .map(|c| c.compare(a, b))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal),
        }
    }
}

/// Pareto dominance on raw objective vectors (minimization).
///
/// `Less` if `a` is no worse everywhere and strictly better somewhere,
/// `Greater` for the converse, `Equal` otherwise.
pub fn dominance_test(a: &[f64], b: &[f64]) -> Ordering {
    let mut a_better = false;
    let mut b_better = false;

    for (&va, &vb) in a.iter().zip(b) {
        if va < vb {
            a_better = true;
        } else if vb < va {
            b_better = true;
        }
        if a_better && b_better {
            return Ordering::Equal;
        }
    }

    match (a_better, b_better) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

fn constraint_violation_test<T>(a: &Solution<T>, b: &Solution<T>) -> Ordering {
    let va = a.overall_constraint_violation();
    let vb = b.overall_constraint_violation();

    match (va < 0.0, vb < 0.0) {
        // Both infeasible: less negative violation wins.
        (true, true) => vb.partial_cmp(&va).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => Ordering::Equal,
    }
}

fn attribute_test<T>(
    a: &Solution<T>,
    b: &Solution<T>,
    key: AttributeKey,
    lowest_is_best: bool,
) -> Ordering {
    let (Some(va), Some(vb)) = (a.attributes.get(key), b.attributes.get(key)) else {
        return Ordering::Equal;
    };

    let ord = va.partial_cmp(&vb).unwrap_or(Ordering::Equal);
    if lowest_is_best {
        ord
    } else {
        ord.reverse()
    }
}
