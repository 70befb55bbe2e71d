use crate::config::MatchConfig;
use crate::geometry::{
    average, cosine_similarity, distance, edge_vectors, frechet_dist, normalize_curve,
    path_length, rotate, Point,
};
use std::f64::consts::PI;

/// Tilts tried by the shape check. Fixed for every comparison.
pub const SHAPE_FIT_ROTATIONS: [f64; 5] = [PI / 16.0, PI / 32.0, 0.0, -PI / 32.0, -PI / 16.0];

/// Added to both path lengths so tiny strokes don't produce wild ratios.
pub const LENGTH_PADDING: f64 = 25.0;

/// Mean distance from each captured point to its nearest reference point.
/// Ignores drawing order. Infinite when either side is empty.
pub fn average_distance(captured: &[Point], reference: &[Point]) -> f64 {
    if captured.is_empty() || reference.is_empty() {
        return f64::INFINITY;
    }
    let total: f64 = captured
        .iter()
        .map(|&c| {
            reference
                .iter()
                .map(|&r| distance(c, r))
                .fold(f64::INFINITY, f64::min)
        })
        .sum();
    total / captured.len() as f64
}

pub fn start_and_end_match(
    captured: &[Point],
    reference: &[Point],
    cfg: &MatchConfig,
    leniency: f64,
) -> bool {
    let (Some(&c0), Some(&c1), Some(&r0), Some(&r1)) = (
        captured.first(),
        captured.last(),
        reference.first(),
        reference.last(),
    ) else {
        return false;
    };
    let threshold = cfg.start_end_threshold * leniency;
    distance(r0, c0) <= threshold && distance(r1, c1) <= threshold
}

/// Average over captured edges of the best cosine against any reference edge.
/// `None` when either curve has no edges.
pub fn mean_best_alignment(captured: &[Point], reference: &[Point]) -> Option<f64> {
    let ref_edges = edge_vectors(reference);
    if ref_edges.is_empty() {
        return None;
    }
    let best: Vec<f64> = edge_vectors(captured)
        .into_iter()
        .map(|user| {
            ref_edges
                .iter()
                .map(|&r| cosine_similarity(r, user))
                .fold(f64::NEG_INFINITY, f64::max)
        })
        .collect();
    average(&best)
}

/// Leniency does not apply here: the threshold is a cosine, not a distance.
pub fn direction_matches(captured: &[Point], reference: &[Point], cfg: &MatchConfig) -> bool {
    mean_best_alignment(captured, reference)
        .is_some_and(|avg| avg > cfg.cosine_similarity_threshold)
}

/// Smallest Fréchet distance between the normalized curves over the fixed
/// rotation sweep of the reference.
pub fn best_rotated_frechet(captured: &[Point], reference: &[Point]) -> f64 {
    let norm_user = normalize_curve(captured);
    let norm_ref = normalize_curve(reference);

    SHAPE_FIT_ROTATIONS
        .iter()
        .map(|&angle| frechet_dist(&norm_user, &rotate(&norm_ref, angle)))
        .fold(f64::INFINITY, f64::min)
}

pub fn shape_fit(captured: &[Point], reference: &[Point], cfg: &MatchConfig, leniency: f64) -> bool {
    best_rotated_frechet(captured, reference) <= cfg.frechet_threshold * leniency
}

pub fn length_ratio(captured: &[Point], reference: &[Point], leniency: f64) -> f64 {
    leniency * (path_length(captured) + LENGTH_PADDING) / (path_length(reference) + LENGTH_PADDING)
}

pub fn length_matches(
    captured: &[Point],
    reference: &[Point],
    cfg: &MatchConfig,
    leniency: f64,
) -> bool {
    let ratio = length_ratio(captured, reference, leniency);
    ratio >= cfg.min_length_ratio && ratio <= cfg.max_length_ratio
}

/// Every check evaluated without short-circuiting, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredicateReport {
    pub avg_distance: f64,
    pub within_average_distance: bool,
    pub endpoints: bool,
    pub direction: bool,
    pub shape: bool,
    pub length: bool,
}

impl PredicateReport {
    pub fn evaluate(
        captured: &[Point],
        reference: &[Point],
        cfg: &MatchConfig,
        leniency: f64,
        average_distance_threshold: f64,
    ) -> Self {
        let avg_distance = average_distance(captured, reference);
        Self {
            avg_distance,
            within_average_distance: avg_distance <= average_distance_threshold * leniency,
            endpoints: start_and_end_match(captured, reference, cfg, leniency),
            direction: direction_matches(captured, reference, cfg),
            shape: shape_fit(captured, reference, cfg, leniency),
            length: length_matches(captured, reference, cfg, leniency),
        }
    }

    pub fn all_pass(&self) -> bool {
        self.within_average_distance && self.endpoints && self.direction && self.shape && self.length
    }
}
