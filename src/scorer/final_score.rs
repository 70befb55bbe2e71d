use super::types::{FinalScore, Grade};
use crate::geometry::average;

pub const WEIGHT_ACCURACY: f64 = 0.4;
pub const WEIGHT_QUALITY: f64 = 0.4;
pub const WEIGHT_SPEED: f64 = 0.2;
pub const PENALTY_PER_MISTAKE: f64 = 10.0;

pub fn accuracy_score(total_mistakes: u32) -> f64 {
    (100.0 - PENALTY_PER_MISTAKE * total_mistakes as f64).clamp(0.0, 100.0)
}

pub fn quality_score(stroke_scores: &[f64]) -> f64 {
    average(stroke_scores).unwrap_or(0.0)
}

/// Speed band from `ideal / elapsed`: full marks between 0.5 and 2, a linear
/// penalty for rushing, and a gentler one for stalling that never drops
/// below 60.
pub fn speed_score(time_ratio: f64) -> f64 {
    let speed = if time_ratio < 0.5 {
        time_ratio * 200.0
    } else if time_ratio > 2.0 {
        (100.0 - (time_ratio - 2.0) * 20.0).max(60.0)
    } else {
        100.0
    };
    speed.clamp(0.0, 100.0)
}

/// Session score from raw counters. `elapsed_secs` at or below zero is
/// treated as the smallest positive duration.
pub fn final_score(
    stroke_count: usize,
    total_mistakes: u32,
    stroke_scores: &[f64],
    elapsed_secs: f64,
    seconds_per_stroke: f64,
) -> FinalScore {
    let accuracy = accuracy_score(total_mistakes);
    let quality = quality_score(stroke_scores);

    let ideal = seconds_per_stroke * stroke_count as f64;
    let elapsed = if elapsed_secs > 0.0 {
        elapsed_secs
    } else {
        f64::MIN_POSITIVE
    };
    let speed = speed_score(ideal / elapsed);

    let total = WEIGHT_ACCURACY * accuracy + WEIGHT_QUALITY * quality + WEIGHT_SPEED * speed;

    FinalScore {
        total_score: total,
        accuracy_score: accuracy,
        quality_score: quality,
        speed_score: speed,
        grade: Grade::from_total(total),
    }
}
