//! Crowding distance density estimator.

use crate::comparator::Comparator;
use crate::solution::{AttributeKey, Solution};
use std::cmp::Ordering;

/// Crowding distance assignment (Deb et al., 2002).
///
/// Measures how isolated each solution is within its front. Higher distance
/// means more diverse; boundary solutions receive `f64::INFINITY`.
///
/// # Algorithm
///
/// For each objective:
/// 1. Stable-sort the front by the objective value
/// 2. Assign infinity to the first and last solution
/// 3. Add `(next - prev) / (max - min)` to each interior solution
///    (the raw difference when `max == min`)
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = front size
#[derive(Debug, Clone, Copy, Default)]
pub struct CrowdingDistance;

impl CrowdingDistance {
    /// Writes `crowding_distance` for every solution in `front`.
    ///
    /// `front` indexes into `solutions`. Fronts of size 1 or 2 get infinite
    /// distance; an empty front is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use u_moea::multi_objective::CrowdingDistance;
    /// use u_moea::solution::Solution;
    ///
    /// let mut front: Vec<Solution<f64>> = [[1.0, 5.0], [3.0, 3.0], [5.0, 1.0]]
    ///     .iter()
    ///     .map(|o| {
    ///         let mut s = Solution::new(vec![], 2, 0);
    ///         s.objectives = o.to_vec();
    ///         s
    ///     })
    ///     .collect();
    ///
    /// CrowdingDistance.compute_density_estimator(&mut front, &[0, 1, 2]);
    ///
    /// assert_eq!(front[0].attributes.crowding_distance, Some(f64::INFINITY));
    /// assert_eq!(front[1].attributes.crowding_distance, Some(2.0));
    /// assert_eq!(front[2].attributes.crowding_distance, Some(f64::INFINITY));
    /// ```
    pub fn compute_density_estimator<T>(&self, solutions: &mut [Solution<T>], front: &[usize]) {
        let size = front.len();
        if size == 0 {
            return;
        }
        if size <= 2 {
            for &i in front {
                solutions[i].attributes.crowding_distance = Some(f64::INFINITY);
            }
            return;
        }

        let number_of_objectives = solutions[front[0]].objectives.len();
        let mut distances = vec![0.0f64; size];
        let mut order: Vec<usize> = (0..size).collect();

        for m in 0..number_of_objectives {
            let value = |pos: usize| solutions[front[pos]].objectives[m];

            order.sort_by(|&a, &b| value(a).partial_cmp(&value(b)).unwrap_or(Ordering::Equal));

            let min = value(order[0]);
            let max = value(order[size - 1]);
            let range = max - min;

            distances[order[0]] = f64::INFINITY;
            distances[order[size - 1]] = f64::INFINITY;

            for w in order.windows(3) {
                let gap = value(w[2]) - value(w[0]);
                distances[w[1]] += if range == 0.0 { gap } else { gap / range };
            }
        }

        for (pos, &i) in front.iter().enumerate() {
            solutions[i].attributes.crowding_distance = Some(distances[pos]);
        }
    }

    /// Orders `front` by crowding distance, highest first.
    ///
    /// Stable: ties keep their current relative order. Solutions without a
    /// distance compare as equal to everything.
    pub fn sort<T>(&self, solutions: &[Solution<T>], front: &mut [usize]) {
        let cmp = Comparator::Attribute {
            key: AttributeKey::CrowdingDistance,
            lowest_is_best: false,
        };
        front.sort_by(|&a, &b| cmp.compare(&solutions[a], &solutions[b]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front(objectives: &[&[f64]]) -> Vec<Solution<f64>> {
        objectives
            .iter()
            .map(|o| {
                let mut s = Solution::new(vec![], o.len(), 0);
                s.objectives = o.to_vec();
                s
            })
            .collect()
    }

    fn distances(solutions: &[Solution<f64>]) -> Vec<f64> {
        solutions
            .iter()
            .map(|s| s.attributes.crowding_distance.unwrap_or(f64::NAN))
            .collect()
    }

    #[test]
    fn test_empty_front_untouched() {
        let mut pop = front(&[&[1.0, 2.0]]);
        CrowdingDistance.compute_density_estimator(&mut pop, &[]);
        assert_eq!(pop[0].attributes.crowding_distance, None);
    }

    #[test]
    fn test_small_fronts_are_infinite() {
        let mut pop = front(&[&[1.0, 3.0], &[3.0, 1.0]]);
        CrowdingDistance.compute_density_estimator(&mut pop, &[0, 1]);
        assert!(distances(&pop).iter().all(|d| d.is_infinite()));

        let mut pop = front(&[&[1.0, 3.0]]);
        CrowdingDistance.compute_density_estimator(&mut pop, &[0]);
        assert!(pop[0].attributes.crowding_distance.unwrap().is_infinite());
    }

    #[test]
    fn test_evenly_spaced() {
        let mut pop = front(&[
            &[0.0, 4.0],
            &[1.0, 3.0],
            &[2.0, 2.0],
            &[3.0, 1.0],
            &[4.0, 0.0],
        ]);
        CrowdingDistance.compute_density_estimator(&mut pop, &[0, 1, 2, 3, 4]);
        let d = distances(&pop);

        assert!(d[0].is_infinite());
        assert!(d[4].is_infinite());
        // each objective contributes 2/4
        for &x in &d[1..4] {
            assert!((x - 1.0).abs() < 1e-12, "expected 1.0, got {x}");
        }
    }

    #[test]
    fn test_zero_range_uses_raw_difference() {
        let mut pop = front(&[&[1.0, 5.0], &[2.0, 5.0], &[4.0, 5.0]]);
        CrowdingDistance.compute_density_estimator(&mut pop, &[0, 1, 2]);
        let d = distances(&pop);
        // objective 0: (4 - 1) / 3 = 1; objective 1: range 0, raw gap 0
        assert!((d[1] - 1.0).abs() < 1e-12);
        // with constant objective, boundaries of the stable sort are positions 0 and 2
        assert!(d[0].is_infinite());
        assert!(d[2].is_infinite());
    }

    #[test]
    fn test_operates_on_subset() {
        let mut pop = front(&[&[9.0, 9.0], &[0.0, 4.0], &[2.0, 2.0], &[4.0, 0.0]]);
        CrowdingDistance.compute_density_estimator(&mut pop, &[1, 2, 3]);
        assert_eq!(pop[0].attributes.crowding_distance, None);
        assert!((pop[2].attributes.crowding_distance.unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let mut pop = front(&[
            &[0.1, 0.9],
            &[0.3, 0.6],
            &[0.35, 0.5],
            &[0.7, 0.2],
            &[0.9, 0.05],
        ]);
        let idx = [0, 1, 2, 3, 4];
        CrowdingDistance.compute_density_estimator(&mut pop, &idx);
        let first = distances(&pop);
        CrowdingDistance.compute_density_estimator(&mut pop, &idx);
        assert_eq!(first, distances(&pop));
    }

    #[test]
    fn test_sort_highest_first() {
        let mut pop = front(&[&[0.0], &[0.0], &[0.0], &[0.0]]);
        pop[0].attributes.crowding_distance = Some(0.5);
        pop[1].attributes.crowding_distance = Some(f64::INFINITY);
        pop[2].attributes.crowding_distance = Some(0.1);
        pop[3].attributes.crowding_distance = Some(0.5);

        let mut order = vec![0, 1, 2, 3];
        CrowdingDistance.sort(&pop, &mut order);
        assert_eq!(order, vec![1, 0, 3, 2]);
    }
}
