//! cognicell_bench — long-run behavioral tests for cell dynamics.
//!
//! Validates emergent behavior over whole workouts rather than single steps:
//! - Homeostasis (activation and fatigue anti-correlate under steady work)
//! - Curiosity effect (high-curiosity cells respond more to novelty)
//! - Memory boundary (FIFO eviction at the 100-experience limit)
//! - Individuality (different personalities live measurably different lives)

use cognicell_core::Cell;

/// Drive a cell with the same stimulus `steps` times, collecting the
/// (activation, fatigue) trajectory. `input` must be finite.
pub fn drive_fixed(cell: &mut Cell, input: f32, steps: usize) -> Vec<(f32, f32)> {
    (0..steps)
        .map(|_| {
            let act = cell
                .process_stimulus(input)
                .expect("finite stimulus is always accepted");
            (act, cell.fatigue())
        })
        .collect()
}

/// Pearson correlation coefficient of two equal-length samples.
/// Returns 0.0 for degenerate inputs (fewer than two points or zero variance).
pub fn pearson(xs: &[f32], ys: &[f32]) -> f32 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return 0.0;
    }
    let mean_x: f32 = xs[..n].iter().sum::<f32>() / n as f32;
    let mean_y: f32 = ys[..n].iter().sum::<f32>() / n as f32;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = xs[i] - mean_x;
        let dy = ys[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Tired cells work worse: over 50 steps of the same stimulus,
    /// activation and fatigue should be strongly anti-correlated.
    #[test]
    fn test_homeostasis_anticorrelation() {
        for trial in 0..5 {
            let mut cell = Cell::new(format!("homeo_{}", trial), 0.6);
            let trajectory = drive_fixed(&mut cell, 0.7, 50);

            let acts: Vec<f32> = trajectory.iter().map(|(a, _)| *a).collect();
            let fats: Vec<f32> = trajectory.iter().map(|(_, f)| *f).collect();

            let corr = pearson(&acts, &fats);
            assert!(
                corr < -0.5,
                "trial {}: expected strong anti-correlation, got {}",
                trial,
                corr
            );
        }
    }

    /// High-curiosity cells amplify novel stimuli more: after an identical
    /// baseline, the response ratio to a big jump should exceed 1.1.
    #[test]
    fn test_curiosity_response_ratio() {
        let mut low = Cell::new("low", 0.1);
        let mut high = Cell::new("high", 0.9);

        // Shared baseline
        low.process_stimulus(0.2).unwrap();
        high.process_stimulus(0.2).unwrap();

        // Big change triggers the novelty path in both
        let low_novel = low.process_stimulus(0.9).unwrap();
        let high_novel = high.process_stimulus(0.9).unwrap();

        let ratio = high_novel / low_novel;
        assert!(
            ratio > 1.1,
            "high-curiosity response should be >1.1x the low one, got {:.2}x",
            ratio
        );
    }

    /// The memory system holds exactly 100 experiences and forgets the
    /// oldest first: after 150 stimuli of i*0.01, the oldest survivor
    /// is the 51st (input 0.50).
    #[test]
    fn test_memory_fifo_boundary() {
        let mut cell = Cell::new("memory_test", 0.6);
        for i in 0..150 {
            cell.process_stimulus(i as f32 * 0.01).unwrap();
        }

        let status = cell.snapshot();
        assert_eq!(status.history_len, 100);
        assert_eq!(status.age, 150, "age keeps counting past eviction");

        let oldest = cell.history().oldest().unwrap();
        assert!(
            (0.45..=0.55).contains(&oldest.input),
            "oldest survivor should be ~0.50, got {}",
            oldest.input
        );
    }

    /// Different curiosity means a different life: cells fed the identical
    /// novelty-rich schedule end up with a clear spread of average activation.
    #[test]
    fn test_individuality_spread() {
        // Alternating quiet/loud schedule, jittered but shared by all cells
        let mut rng = StdRng::seed_from_u64(1234);
        let schedule: Vec<f32> = (0..50)
            .map(|i| {
                if i % 2 == 0 {
                    0.1 + 0.2 * rng.gen::<f32>()
                } else {
                    0.7 + 0.2 * rng.gen::<f32>()
                }
            })
            .collect();

        let curiosities = [0.1, 0.3, 0.5, 0.7, 0.9];
        let mut averages = Vec::new();

        for (i, &curiosity) in curiosities.iter().enumerate() {
            let mut cell = Cell::new(format!("indiv_{}", i), curiosity);
            let mut acts = Vec::new();
            for &input in &schedule {
                acts.push(cell.process_stimulus(input).unwrap());
            }
            averages.push(acts.iter().sum::<f32>() / acts.len() as f32);
        }

        let max = averages.iter().cloned().fold(f32::MIN, f32::max);
        let min = averages.iter().cloned().fold(f32::MAX, f32::min);
        assert!(
            max - min > 0.05,
            "personalities should diverge, activation range was {:.3}",
            max - min
        );

        // More curiosity, more response — the ordering should hold end to end
        assert!(
            averages.last().unwrap() > averages.first().unwrap(),
            "most curious cell should out-respond the least curious"
        );
    }

    /// Aggregation sanity: snapshots across many independently built cells
    /// stay within documented bounds after a shared workout.
    #[test]
    fn test_population_snapshot_bounds() {
        let mut rng = StdRng::seed_from_u64(99);
        for i in 0..20 {
            let mut cell = Cell::with_random_curiosity(format!("pop_{}", i), &mut rng);
            for _ in 0..30 {
                cell.process_stimulus(rng.gen_range(-1.0..=1.0)).unwrap();
            }
            let s = cell.snapshot();
            assert!((-1.0..=1.0).contains(&s.activation));
            assert!((0.0..=1.0).contains(&s.fatigue));
            assert!((0.3..=0.9).contains(&s.curiosity));
            assert!((-1.0..=1.0).contains(&s.recent_average_output));
            assert_eq!(s.age, 30);
        }
    }

    #[test]
    fn test_pearson_degenerate_inputs() {
        assert_eq!(pearson(&[], &[]), 0.0);
        assert_eq!(pearson(&[1.0], &[1.0]), 0.0);
        // Zero variance on one side
        assert_eq!(pearson(&[1.0, 1.0, 1.0], &[0.1, 0.2, 0.3]), 0.0);
    }

    #[test]
    fn test_pearson_perfect_correlation() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 4.0, 6.0, 8.0];
        assert!((pearson(&xs, &ys) - 1.0).abs() < 1e-5);

        let neg: Vec<f32> = ys.iter().map(|y| -y).collect();
        assert!((pearson(&xs, &neg) + 1.0).abs() < 1e-5);
    }
}
