//! Time windowing and linear resampling onto the integration grid

use log::warn;

use crate::error::{SorptionError, SorptionResult};
use crate::solver::{check_grid, GRID_TOLERANCE};

/// Keep the points covering `[start, start + window]`
///
/// Every point inside the window is kept, both ends inclusive, plus the
/// last point before `start` and the first point after the window end.
/// These anchors let [`interpolate`] evaluate the signal at the window
/// edges. `points` must be sorted by time.
pub fn select_window(points: &[(f64, f64)], start: f64, window: f64) -> Vec<(f64, f64)> {
    let end = start + window;
    let first = points.partition_point(|&(t, _)| t < start);
    let last = points.partition_point(|&(t, _)| t <= end);

    let from = first.saturating_sub(1);
    let to = (last + 1).min(points.len()).max(from);
    points[from..to].to_vec()
}

/// Resample `points` on the grid `start + k·dt`
///
/// The grid covers `[start, min(end, t_last)]`, the step count rounded
/// down with the same 1e-9 slack as
/// [`sample_count`](crate::solver::sample_count). Each grid value is
/// interpolated linearly between the two bracketing points. A grid time
/// within 1e-9 relative of a raw timestamp takes the raw value unchanged,
/// and grid times before the first point hold its value.
///
/// # Errors
///
/// - [`SorptionError::InsufficientData`] with fewer than two points, or
///   when every point lies before `start`
/// - [`SorptionError::Configuration`] when the grid would exceed
///   [`MAX_SAMPLES`](crate::solver::MAX_SAMPLES)
pub fn interpolate(
    points: &[(f64, f64)],
    start: f64,
    end: f64,
    dt: f64,
) -> SorptionResult<Vec<f64>> {
    if points.len() < 2 {
        return Err(SorptionError::InsufficientData {
            retained: points.len(),
        });
    }

    let first_time = points[0].0;
    let last_time = points[points.len() - 1].0;
    if last_time < start {
        return Err(SorptionError::InsufficientData { retained: 0 });
    }
    if first_time > start {
        warn!(
            "Trace starts at {} s, after the window start {} s; holding its first value",
            first_time, start
        );
    }

    let span = end.min(last_time) - start;
    check_grid("Resampled window", span, dt)?;

    let steps = grid_steps(span, dt);
    let mut samples = Vec::with_capacity(steps + 1);
    let mut upper = 1;

    for k in 0..=steps {
        let t = start + k as f64 * dt;
        while upper < points.len() - 1 && points[upper].0 <= t {
            upper += 1;
        }
        samples.push(value_at(points[upper - 1], points[upper], t, dt));
    }

    Ok(samples)
}

fn grid_steps(span: f64, dt: f64) -> usize {
    let k = (span / dt * (1.0 + GRID_TOLERANCE)).floor();
    if k.is_finite() && k >= 0.0 { k as usize } else { 0 }
}

fn value_at((t0, c0): (f64, f64), (t1, c1): (f64, f64), t: f64, dt: f64) -> f64 {
    let tolerance = GRID_TOLERANCE * dt.max(t.abs());
    if t <= t0 + tolerance {
        c0
    } else if t >= t1 - tolerance {
        c1
    } else {
        c0 + (c1 - c0) * (t - t0) / (t1 - t0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_keeps_one_anchor_on_each_side() {
        let points = vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0), (5.0, 5.0)];
        let window = select_window(&points, 1.5, 2.0);

        assert_eq!(window, vec![(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);
    }

    #[test]
    fn test_window_ends_are_inclusive() {
        let points = vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)];
        let window = select_window(&points, 0.0, 3.0);

        assert_eq!(window, points);
    }

    #[test]
    fn test_window_after_trace_keeps_last_point() {
        let points = vec![(0.0, 0.0), (1.0, 1.0)];
        assert_eq!(select_window(&points, 5.0, 1.0), vec![(1.0, 1.0)]);
    }

    #[test]
    fn test_aligned_samples_are_reproduced() {
        let points = vec![(0.0, 1.0), (0.5, 4.0), (1.0, -2.0)];
        let samples = interpolate(&points, 0.0, 1.0, 0.5).unwrap();

        assert_eq!(samples, vec![1.0, 4.0, -2.0]);
    }

    #[test]
    fn test_linear_fill_between_samples() {
        let points = vec![(0.0, 0.0), (1.0, 4.0)];
        let samples = interpolate(&points, 0.0, 1.0, 0.25).unwrap();

        assert_eq!(samples.len(), 5);
        for (j, value) in samples.iter().enumerate() {
            assert!((value - j as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_grid_starts_at_window_start() {
        let points: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, i as f64)).collect();
        let window = select_window(&points, 0.5, 3.0);

        let samples = interpolate(&window, 0.5, 3.5, 0.25).unwrap();

        // 0.5, 0.75, ..., 3.5
        assert_eq!(samples.len(), 13);
        for (k, value) in samples.iter().enumerate() {
            let t = 0.5 + k as f64 * 0.25;
            assert!((value - t).abs() < 1e-12, "sample {} = {}", k, value);
        }
    }

    #[test]
    fn test_grid_clipped_at_window_end() {
        let points = vec![(0.0, 0.0), (10.0, 10.0)];
        let samples = interpolate(&points, 2.0, 5.0, 1.0).unwrap();

        assert_eq!(samples, vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_partial_last_step_is_dropped() {
        // 0.25 s at dt 0.1 → grid 0, 0.1, 0.2
        let points = vec![(0.0, 0.0), (0.25, 2.5)];
        let samples = interpolate(&points, 0.0, 1.0, 0.1).unwrap();

        assert_eq!(samples.len(), 3);
        assert!((samples[2] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_representation_error_does_not_drop_step() {
        // 0.07 / 0.01 evaluates to 7.000000000000001
        let points = vec![(0.0, 0.0), (0.07, 7.0)];
        let samples = interpolate(&points, 0.0, 1.0, 0.01).unwrap();

        assert_eq!(samples.len(), 8);
        assert_eq!(samples[7], 7.0);
    }

    #[test]
    fn test_late_trace_holds_first_value() {
        let points = vec![(1.0, 3.0), (2.0, 5.0)];
        let samples = interpolate(&points, 0.0, 2.0, 0.5).unwrap();

        assert_eq!(samples, vec![3.0, 3.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_single_point_is_insufficient() {
        let result = interpolate(&[(0.0, 1.0)], 0.0, 1.0, 0.1);
        assert!(matches!(
            result,
            Err(SorptionError::InsufficientData { retained: 1 })
        ));
    }

    #[test]
    fn test_trace_before_start_is_insufficient() {
        let result = interpolate(&[(0.0, 1.0), (1.0, 1.0)], 2.0, 3.0, 0.1);
        assert!(matches!(
            result,
            Err(SorptionError::InsufficientData { retained: 0 })
        ));
    }

    #[test]
    fn test_grid_beyond_sample_cap() {
        let points = vec![(0.0, 0.0), (1.0, 1.0)];
        assert!(matches!(
            interpolate(&points, 0.0, 1.0, 1e-300),
            Err(SorptionError::Configuration(_))
        ));
    }
}
