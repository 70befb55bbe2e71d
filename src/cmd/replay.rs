use crate::reports;
use clap::Args;
use inkforge::config::Config;
use inkforge::error::IfResult;
use inkforge::matcher::ReferenceSet;
use inkforge::session::{validate_stroke, StrokeSession, StrokeVerdict};
use inkforge::trial::TrialFile;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub config: Config,

    /// Overrides the trial's recorded duration.
    #[arg(short = 'E', long)]
    pub elapsed: Option<f64>,
}

pub fn run(args: &ReplayArgs, trial: &TrialFile, strokes: &ReferenceSet, config: &Config) -> IfResult<()> {
    let mut session = StrokeSession::new(strokes.len());
    let mut verdicts = Vec::with_capacity(trial.attempts.len());

    for (i, attempt) in trial.attempts.iter().enumerate() {
        let verdict = validate_stroke(&mut session, attempt, strokes, config);
        if verdict == StrokeVerdict::SessionComplete {
            warn!("Attempt {} arrived after the last stroke; ignoring the rest", i);
            break;
        }
        verdicts.push((i, verdict));
    }

    reports::print_attempt_table(&verdicts);

    if !session.is_complete() {
        warn!(
            "Trial ended on stroke {}/{}; scoring the partial session",
            session.current_stroke_index + 1,
            session.stroke_count
        );
    }

    let final_score = match args.elapsed.or(trial.elapsed_secs) {
        Some(secs) => session.score(&config.session, secs),
        None => session.finish(&config.session),
    };
    info!("Replayed {} attempts", verdicts.len());

    reports::print_final_score(&final_score, session.total_mistakes);
    Ok(())
}
