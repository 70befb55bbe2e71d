use crate::reports;
use clap::Args;
use inkforge::config::Config;
use inkforge::error::{IfResult, InkForgeError};
use inkforge::matcher::{strip_duplicates, MatchRequest, PredicateReport, ReferenceSet};
use inkforge::scorer::stroke_quality;
use inkforge::trial::TrialFile;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: Config,

    /// Reference stroke to compare against.
    #[arg(short, long, default_value_t = 0)]
    pub stroke: usize,

    /// Captured attempt to judge.
    #[arg(short, long, default_value_t = 0)]
    pub attempt: usize,
}

pub fn run(args: &CheckArgs, trial: &TrialFile, strokes: &ReferenceSet, config: &Config) -> IfResult<()> {
    let target = strokes.get(args.stroke).ok_or_else(|| {
        InkForgeError::Validation(format!(
            "Stroke {} out of range (character has {})",
            args.stroke,
            strokes.len()
        ))
    })?;
    let captured = trial.attempts.get(args.attempt).ok_or_else(|| {
        InkForgeError::Validation(format!(
            "Attempt {} out of range (trial has {})",
            args.attempt,
            trial.attempts.len()
        ))
    })?;

    let has_prior = args.stroke > 0;
    let result = MatchRequest::builder()
        .captured(captured)
        .target(&target.points)
        .config(&config.matching)
        .strokes(strokes)
        .current_index(args.stroke)
        .has_drawn_prior_strokes(has_prior)
        .build()
        .run();

    let avg_threshold = if has_prior {
        config.matching.average_distance_threshold * inkforge::matcher::PRIOR_STROKES_DISTANCE_FACTOR
    } else {
        config.matching.average_distance_threshold
    };
    let report = PredicateReport::evaluate(
        &strip_duplicates(captured),
        &target.points,
        &config.matching,
        config.matching.leniency,
        avg_threshold,
    );
    let quality = stroke_quality(&result, &target.points, captured, 0);

    reports::print_check_report(args.stroke, args.attempt, &report, &result, quality);
    Ok(())
}
