//! Exact hypervolume indicator.

use crate::error::{MoeaError, Result};
use std::cmp::Ordering;

/// Hypervolume of a minimization front with respect to `reference_point`.
///
/// The volume of the union of boxes `[p, reference_point]` over every point
/// `p` that strictly dominates the reference point. Other points contribute
/// nothing and are ignored.
///
/// Two objectives use an O(n log n) sweep; higher dimensions slice along the
/// last objective and recurse (Hypervolume by Slicing Objectives).
///
/// # Errors
///
/// [`MoeaError::DimensionMismatch`] if a point's length differs from the
/// reference point's.
///
/// # Example
///
/// ```
/// use u_moea::multi_objective::hypervolume;
///
/// let front = vec![vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 0.0]];
/// let hv = hypervolume(&front, &[2.0, 2.0, 2.0]).unwrap();
/// assert!((hv - 5.0).abs() < 1e-12);
/// ```
///
/// # References
///
/// - While, Hingston, Barone & Huband (2006), "A Faster Algorithm for
///   Calculating Hypervolume"
pub fn hypervolume<P: AsRef<[f64]>>(front: &[P], reference_point: &[f64]) -> Result<f64> {
    let dim = reference_point.len();
    let mut points: Vec<&[f64]> = Vec::with_capacity(front.len());

    for p in front {
        let p = p.as_ref();
        if p.len() != dim {
            return Err(MoeaError::DimensionMismatch {
                expected: dim,
                actual: p.len(),
            });
        }
        if p.iter().zip(reference_point).all(|(x, r)| x < r) {
            points.push(p);
        }
    }

    if dim == 0 || points.is_empty() {
        return Ok(0.0);
    }
    Ok(slice_volume(&mut points, reference_point, dim))
}

/// Volume dominated by `points` over their first `dim` coordinates.
fn slice_volume(points: &mut [&[f64]], reference: &[f64], dim: usize) -> f64 {
    match dim {
        1 => points
            .iter()
            .map(|p| reference[0] - p[0])
            .fold(0.0, f64::max),
        2 => sweep_2d(points, reference),
        _ => {
            let last = dim - 1;
            points.sort_by(|a, b| a[last].partial_cmp(&b[last]).unwrap_or(Ordering::Equal));

            let mut volume = 0.0;
            for i in 0..points.len() {
                let upper = points.get(i + 1).map_or(reference[last], |p| p[last]);
                let depth = upper - points[i][last];
                if depth > 0.0 {
                    let mut slab: Vec<&[f64]> = points[..=i].to_vec();
                    volume += slice_volume(&mut slab, reference, last) * depth;
                }
            }
            volume
        }
    }
}

fn sweep_2d(points: &mut [&[f64]], reference: &[f64]) -> f64 {
    points.sort_by(|a, b| a[0].partial_cmp(&b[0]).unwrap_or(Ordering::Equal));

    let mut area = 0.0;
    let mut ceiling = reference[1];
    for p in points.iter() {
        if p[1] < ceiling {
            area += (reference[0] - p[0]) * (ceiling - p[1]);
            ceiling = p[1];
        }
    }
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_dimensional_known_value() {
        let front = vec![vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 0.0]];
        let hv = hypervolume(&front, &[2.0, 2.0, 2.0]).unwrap();
        assert!((hv - 5.0).abs() < 1e-12, "got {hv}");
    }

    #[test]
    fn test_single_point_box() {
        let hv = hypervolume(&[[0.5, 0.25]], &[1.0, 1.0]).unwrap();
        assert!((hv - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_two_dimensional_staircase() {
        let front = [[0.0, 2.0], [1.0, 1.0], [2.0, 0.0]];
        let hv = hypervolume(&front, &[3.0, 3.0]).unwrap();
        // 3*1 + 2*1 + 1*1
        assert!((hv - 6.0).abs() < 1e-12, "got {hv}");
    }

    #[test]
    fn test_dominated_points_add_nothing() {
        let base = hypervolume(&[[0.2, 0.2]], &[1.0, 1.0]).unwrap();
        let with_dominated = hypervolume(&[[0.2, 0.2], [0.5, 0.5]], &[1.0, 1.0]).unwrap();
        assert!((base - with_dominated).abs() < 1e-12);
    }

    #[test]
    fn test_points_outside_reference_ignored() {
        let hv = hypervolume(&[[1.5, 0.0], [0.0, 1.0]], &[1.0, 1.0]).unwrap();
        assert_eq!(hv, 0.0);
    }

    #[test]
    fn test_zdt1_true_front() {
        let front: Vec<[f64; 2]> = (0..=1000)
            .map(|i| {
                let f1 = i as f64 / 1000.0;
                [f1, 1.0 - f1.sqrt()]
            })
            .collect();
        let hv = hypervolume(&front, &[1.0, 1.0]).unwrap();
        assert!((hv - 0.666).abs() < 0.001, "got {hv}");
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = hypervolume(&[vec![0.0, 0.0, 0.0]], &[1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            MoeaError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_empty_front() {
        let front: Vec<Vec<f64>> = Vec::new();
        assert_eq!(hypervolume(&front, &[1.0, 1.0]).unwrap(), 0.0);
    }
}
