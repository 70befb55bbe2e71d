use crate::config::{Config, SessionPolicy};
use crate::geometry::Point;
use crate::matcher::{MatchRequest, MatchResult, ReferenceSet};
use crate::scorer::{self, FinalScore};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Counters for one attempt at writing a character. Owned by the caller;
/// calls against it must be serialized.
#[derive(Debug, Clone)]
pub struct StrokeSession {
    pub stroke_count: usize,
    pub current_stroke_index: usize,
    pub mistakes_on_stroke: u32,
    pub total_mistakes: u32,
    pub stroke_scores: Vec<f64>,
    pub started_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeVerdict {
    Accepted {
        stroke_index: usize,
        quality: f64,
        result: MatchResult,
    },
    Mistake {
        stroke_index: usize,
        result: MatchResult,
        show_hint: bool,
    },
    SessionComplete,
}

impl StrokeSession {
    pub fn new(stroke_count: usize) -> Self {
        Self {
            stroke_count,
            current_stroke_index: 0,
            mistakes_on_stroke: 0,
            total_mistakes: 0,
            stroke_scores: Vec::with_capacity(stroke_count),
            started_at: Instant::now(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current_stroke_index >= self.stroke_count
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn record_accepted(&mut self, quality: f64) {
        self.stroke_scores.push(quality);
        self.mistakes_on_stroke = 0;
        self.current_stroke_index += 1;
    }

    pub fn record_mistake(&mut self) {
        self.mistakes_on_stroke += 1;
        self.total_mistakes += 1;
    }

    /// Scores the session with an explicit duration.
    pub fn score(&self, policy: &SessionPolicy, elapsed_secs: f64) -> FinalScore {
        scorer::final_score(
            self.stroke_count,
            self.total_mistakes,
            &self.stroke_scores,
            elapsed_secs,
            policy.seconds_per_stroke,
        )
    }

    /// Scores the session against wall-clock time since `new`.
    pub fn finish(&self, policy: &SessionPolicy) -> FinalScore {
        let secs = self.elapsed().as_secs_f64();
        let final_score = self.score(policy, secs);
        info!(
            total = final_score.total_score,
            grade = %final_score.grade,
            mistakes = self.total_mistakes,
            secs,
            "Session complete"
        );
        final_score
    }
}

/// Judges one captured stroke against the session's current stroke and
/// updates the counters.
pub fn validate_stroke(
    session: &mut StrokeSession,
    captured: &[Point],
    strokes: &ReferenceSet,
    config: &Config,
) -> StrokeVerdict {
    let index = session.current_stroke_index;
    let Some(target) = strokes.get(index).filter(|_| !session.is_complete()) else {
        return StrokeVerdict::SessionComplete;
    };

    let result = MatchRequest::builder()
        .captured(captured)
        .target(&target.points)
        .config(&config.matching)
        .strokes(strokes)
        .current_index(index)
        .has_drawn_prior_strokes(index > 0)
        .build()
        .run();

    let quality = scorer::stroke_quality(
        &result,
        &target.points,
        captured,
        session.mistakes_on_stroke,
    );

    let policy = &config.session;
    let auto_accept = policy.mark_correct_after_misses > 0
        && session.mistakes_on_stroke + 1 >= policy.mark_correct_after_misses;

    if result.is_match || auto_accept {
        debug!(
            stroke = index,
            quality,
            auto_accept = !result.is_match,
            "Stroke accepted"
        );
        session.record_accepted(quality);
        StrokeVerdict::Accepted {
            stroke_index: index,
            quality,
            result,
        }
    } else {
        session.record_mistake();
        let show_hint = policy.show_hint_after_misses > 0
            && session.mistakes_on_stroke >= policy.show_hint_after_misses;
        debug!(
            stroke = index,
            misses = session.mistakes_on_stroke,
            show_hint,
            "Stroke rejected"
        );
        StrokeVerdict::Mistake {
            stroke_index: index,
            result,
            show_hint,
        }
    }
}
