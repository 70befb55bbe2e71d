use super::{test_match, MatchResult, ReferenceSet};
use crate::config::MatchConfig;
use crate::geometry::Point;
use tracing::debug;

/// How much of the blended distance ratio survives as leniency in the retest.
pub const LENIENCY_REDUCTION: f64 = 0.6;

/// A later reference stroke that fits the captured input better than the
/// stroke the user was supposed to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaterCandidate {
    pub index: usize,
    pub avg_distance: f64,
}

/// Phase 1: scans the strokes after `current_index` for one that passes its
/// own match test with a strictly lower average distance than `current`.
/// Returns the closest such stroke.
pub fn find_better_later_stroke(
    captured: &[Point],
    strokes: &ReferenceSet,
    current_index: usize,
    current: &MatchResult,
    cfg: &MatchConfig,
    leniency: f64,
    average_distance_threshold: f64,
) -> Option<LaterCandidate> {
    let mut best: Option<LaterCandidate> = None;
    let mut closest = current.avg_distance;

    for stroke in strokes.iter().skip(current_index + 1) {
        let later = test_match(
            captured,
            &stroke.points,
            cfg,
            leniency,
            average_distance_threshold,
        );
        if later.is_match && later.avg_distance < closest {
            closest = later.avg_distance;
            best = Some(LaterCandidate {
                index: stroke.ordinal,
                avg_distance: later.avg_distance,
            });
        }
    }

    best
}

/// Leniency for the retest: shrinks as the better candidate gets closer.
/// The result is a multiple of the caller's `leniency`, so a relaxed config
/// stays relaxed in the retest.
pub fn reduced_leniency(leniency: f64, later_avg_distance: f64, current_avg_distance: f64) -> f64 {
    if current_avg_distance <= 0.0 {
        return leniency;
    }
    leniency * LENIENCY_REDUCTION * (later_avg_distance + current_avg_distance)
        / (2.0 * current_avg_distance)
}

/// Phase 2: re-judges the original target with the reduced leniency. The
/// result may now be a non-match; the later stroke is never accepted instead.
pub fn retest_with_reduced_leniency(
    captured: &[Point],
    target: &[Point],
    current: &MatchResult,
    candidate: &LaterCandidate,
    cfg: &MatchConfig,
    leniency: f64,
    average_distance_threshold: f64,
) -> MatchResult {
    let stricter = reduced_leniency(leniency, candidate.avg_distance, current.avg_distance);
    debug!(
        later_index = candidate.index,
        later_avg = candidate.avg_distance,
        current_avg = current.avg_distance,
        leniency = stricter,
        "Later stroke fits better, retesting target"
    );
    test_match(captured, target, cfg, stricter, average_distance_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_leniency_equal_distances() {
        // Equal distances collapse to the bare reduction factor.
        assert!((reduced_leniency(1.0, 10.0, 10.0) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_reduced_leniency_scales_with_caller_leniency() {
        let base = reduced_leniency(1.0, 5.0, 20.0);
        assert!((base - 0.375).abs() < 1e-12);
        assert!((reduced_leniency(2.0, 5.0, 20.0) - 2.0 * base).abs() < 1e-12);
    }
}
