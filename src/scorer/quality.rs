use crate::geometry::{distance, Point};
use crate::matcher::MatchResult;

pub const BASE_SCORE: f64 = 60.0;
pub const MAX_DISTANCE_BONUS: f64 = 25.0;
pub const MAX_ENDPOINT_BONUS: f64 = 7.5;
pub const PENALTY_PER_MISTAKE: f64 = 5.0;

/// Quality of one accepted stroke, in 0..=100.
///
/// 60 base, up to 25 for closeness, up to 7.5 for each endpoint, minus 5 per
/// miss already made on this stroke. The endpoint bonus is skipped if either
/// curve is empty.
pub fn stroke_quality(
    result: &MatchResult,
    reference: &[Point],
    captured: &[Point],
    mistakes_on_stroke: u32,
) -> f64 {
    let mut score = BASE_SCORE;
    score += (MAX_DISTANCE_BONUS - result.avg_distance / 10.0).max(0.0);

    if let (Some(&r0), Some(&r1), Some(&c0), Some(&c1)) = (
        reference.first(),
        reference.last(),
        captured.first(),
        captured.last(),
    ) {
        score += (MAX_ENDPOINT_BONUS - distance(c0, r0) / 20.0).max(0.0);
        score += (MAX_ENDPOINT_BONUS - distance(c1, r1) / 20.0).max(0.0);
    }

    score -= PENALTY_PER_MISTAKE * mistakes_on_stroke as f64;
    score.clamp(0.0, 100.0)
}
