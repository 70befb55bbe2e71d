pub mod disambiguate;
pub mod predicates;

pub use self::disambiguate::{find_better_later_stroke, retest_with_reduced_leniency, LaterCandidate};
pub use self::predicates::PredicateReport;

use crate::config::{MatchConfig, ThresholdOverrides};
use crate::error::{IfResult, InkForgeError};
use crate::geometry::{Curve, Point};
use tracing::debug;
use typed_builder::TypedBuilder;

/// Strokes after the first are held to half the average-distance threshold.
pub const PRIOR_STROKES_DISTANCE_FACTOR: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub is_match: bool,
    /// `f64::INFINITY` when the input was too degenerate to measure.
    pub avg_distance: f64,
}

impl MatchResult {
    pub const REJECTED: MatchResult = MatchResult {
        is_match: false,
        avg_distance: f64::INFINITY,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceStroke {
    pub ordinal: usize,
    pub points: Curve,
}

/// The ordered strokes of one character. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSet {
    strokes: Vec<ReferenceStroke>,
}

impl ReferenceSet {
    pub fn from_curves(curves: Vec<Curve>) -> IfResult<Self> {
        if curves.is_empty() {
            return Err(InkForgeError::Validation(
                "Reference set has 0 strokes".to_string(),
            ));
        }
        if let Some(i) = curves.iter().position(|c| c.is_empty()) {
            return Err(InkForgeError::Validation(format!(
                "Reference stroke {} has no points",
                i
            )));
        }
        let strokes = curves
            .into_iter()
            .enumerate()
            .map(|(ordinal, points)| ReferenceStroke { ordinal, points })
            .collect();
        Ok(Self { strokes })
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ReferenceStroke> {
        self.strokes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceStroke> {
        self.strokes.iter()
    }
}

/// One captured stroke to judge against its target.
#[derive(TypedBuilder)]
pub struct MatchRequest<'a> {
    pub captured: &'a [Point],
    pub target: &'a [Point],
    pub config: &'a MatchConfig,
    /// Full stroke set; enables the stroke-order check when present.
    #[builder(default, setter(strip_option))]
    pub strokes: Option<&'a ReferenceSet>,
    #[builder(default)]
    pub current_index: usize,
    #[builder(default = false)]
    pub has_drawn_prior_strokes: bool,
    #[builder(default, setter(strip_option))]
    pub overrides: Option<&'a ThresholdOverrides>,
}

impl MatchRequest<'_> {
    pub fn run(&self) -> MatchResult {
        match_stroke(self)
    }
}

/// Drops points identical to their predecessor.
pub fn strip_duplicates(points: &[Point]) -> Curve {
    let mut out: Curve = Vec::with_capacity(points.len());
    for &p in points {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    out
}

/// Single comparison of a cleaned capture against one reference curve.
///
/// The average-distance pre-filter runs first; when it fails the four shape
/// checks are skipped. `avg_distance` is always reported.
pub fn test_match(
    captured: &[Point],
    reference: &[Point],
    cfg: &MatchConfig,
    leniency: f64,
    average_distance_threshold: f64,
) -> MatchResult {
    let avg_distance = predicates::average_distance(captured, reference);

    if avg_distance > average_distance_threshold * leniency {
        debug!(avg_distance, "Rejected by average-distance pre-filter");
        return MatchResult {
            is_match: false,
            avg_distance,
        };
    }

    let endpoints = predicates::start_and_end_match(captured, reference, cfg, leniency);
    let direction = predicates::direction_matches(captured, reference, cfg);
    let shape = predicates::shape_fit(captured, reference, cfg, leniency);
    let length = predicates::length_matches(captured, reference, cfg, leniency);

    debug!(
        avg_distance,
        endpoints, direction, shape, length, leniency, "Predicate outcomes"
    );

    MatchResult {
        is_match: endpoints && direction && shape && length,
        avg_distance,
    }
}

/// Decides whether the captured stroke matches its target.
pub fn match_stroke(req: &MatchRequest) -> MatchResult {
    let clean = strip_duplicates(req.captured);
    if clean.len() < 2 {
        return MatchResult::REJECTED;
    }

    let cfg = &match req.overrides {
        Some(overrides) => req.config.with_overrides(overrides),
        None => *req.config,
    };
    let leniency = cfg.leniency;
    let avg_threshold = if req.has_drawn_prior_strokes {
        cfg.average_distance_threshold * PRIOR_STROKES_DISTANCE_FACTOR
    } else {
        cfg.average_distance_threshold
    };

    let current = test_match(&clean, req.target, cfg, leniency, avg_threshold);
    if !current.is_match {
        return current;
    }

    let Some(strokes) = req.strokes else {
        return current;
    };

    match find_better_later_stroke(
        &clean,
        strokes,
        req.current_index,
        &current,
        cfg,
        leniency,
        avg_threshold,
    ) {
        Some(candidate) => retest_with_reduced_leniency(
            &clean,
            req.target,
            &current,
            &candidate,
            cfg,
            leniency,
            avg_threshold,
        ),
        None => current,
    }
}
