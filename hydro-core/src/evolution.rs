//! Evolution thresholds.
//!
//! A freak at stage `s` evolves once the hydration score reaches
//! `THRESHOLDS[s]`. Thresholds are global: the same score table applies to
//! every monster type.

use crate::catalog::MAX_STAGE;

/// Score needed for stages 1, 2 and 3.
pub const THRESHOLDS: [f64; MAX_STAGE as usize] = [100.0, 300.0, 500.0];

/// Stage a freak should move to for `score`, if that is above `current`.
///
/// Picks the highest threshold index `i` with `score >= THRESHOLDS[i]` and
/// `current <= i`, so a large jump in score skips straight to the highest
/// stage it satisfies. Returns `None` when nothing is gained.
pub fn target_stage(score: f64, current: u8) -> Option<u8> {
    THRESHOLDS
        .iter()
        .enumerate()
        .rev()
        .find(|&(i, &threshold)| score >= threshold && usize::from(current) <= i)
        .map(|(i, _)| (i + 1) as u8)
}

/// Score needed for the next stage after `stage`, or `None` at the final stage.
pub fn next_threshold(stage: u8) -> Option<f64> {
    THRESHOLDS.get(usize::from(stage)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_first_threshold() {
        assert_eq!(target_stage(0.0, 0), None);
        assert_eq!(target_stage(99.9, 0), None);
    }

    #[test]
    fn test_exact_threshold_counts() {
        assert_eq!(target_stage(100.0, 0), Some(1));
        assert_eq!(target_stage(300.0, 1), Some(2));
        assert_eq!(target_stage(500.0, 2), Some(3));
    }

    #[test]
    fn test_highest_threshold_wins() {
        assert_eq!(target_stage(650.0, 0), Some(3));
        assert_eq!(target_stage(320.0, 0), Some(2));
    }

    #[test]
    fn test_never_regresses() {
        assert_eq!(target_stage(150.0, 2), None);
        assert_eq!(target_stage(1000.0, 3), None);
    }

    #[test]
    fn test_next_threshold() {
        assert_eq!(next_threshold(0), Some(100.0));
        assert_eq!(next_threshold(2), Some(500.0));
        assert_eq!(next_threshold(3), None);
    }
}
