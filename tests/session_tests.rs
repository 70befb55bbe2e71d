mod common;

use common::{line, two_bars};
use inkforge::config::{Config, SessionPolicy};
use inkforge::session::{validate_stroke, StrokeSession, StrokeVerdict};

fn top() -> Vec<inkforge::geometry::Point> {
    line((0.0, 0.0), (500.0, 0.0), 11)
}

fn bottom() -> Vec<inkforge::geometry::Point> {
    line((0.0, 600.0), (500.0, 600.0), 11)
}

#[test]
fn test_full_session_walkthrough() {
    let config = Config::default();
    let strokes = two_bars(600.0);
    let mut session = StrokeSession::new(strokes.len());

    // Stroke 1, drawn exactly.
    match validate_stroke(&mut session, &top(), &strokes, &config) {
        StrokeVerdict::Accepted {
            stroke_index,
            quality,
            result,
        } => {
            assert_eq!(stroke_index, 0);
            assert_eq!(quality, 100.0);
            assert!(result.is_match);
        }
        other => panic!("expected acceptance, got {:?}", other),
    }
    assert_eq!(session.current_stroke_index, 1);

    // Stroke 2, but the user redraws stroke 1.
    match validate_stroke(&mut session, &top(), &strokes, &config) {
        StrokeVerdict::Mistake {
            stroke_index,
            show_hint,
            ..
        } => {
            assert_eq!(stroke_index, 1);
            assert!(!show_hint);
        }
        other => panic!("expected a miss, got {:?}", other),
    }
    assert_eq!(session.mistakes_on_stroke, 1);
    assert_eq!(session.total_mistakes, 1);

    // Stroke 2, drawn exactly; one miss costs 5 quality points.
    match validate_stroke(&mut session, &bottom(), &strokes, &config) {
        StrokeVerdict::Accepted { quality, .. } => assert_eq!(quality, 95.0),
        other => panic!("expected acceptance, got {:?}", other),
    }
    assert!(session.is_complete());
    assert_eq!(session.mistakes_on_stroke, 0);
    assert_eq!(session.stroke_scores, vec![100.0, 95.0]);

    assert_eq!(
        validate_stroke(&mut session, &bottom(), &strokes, &config),
        StrokeVerdict::SessionComplete
    );
    assert_eq!(session.total_mistakes, 1);

    // 2 strokes in 8s: accuracy 90, quality 97.5, speed 100.
    let score = session.score(&config.session, 8.0);
    assert!((score.total_score - 95.0).abs() < 1e-9);
    assert_eq!(score.grade.to_string(), "S");
}

#[test]
fn test_hint_after_repeated_misses() {
    let config = Config {
        session: SessionPolicy {
            show_hint_after_misses: 2,
            ..Default::default()
        },
        ..Default::default()
    };
    let strokes = two_bars(600.0);
    let mut session = StrokeSession::new(strokes.len());

    let hints: Vec<bool> = (0..3)
        .map(|_| match validate_stroke(&mut session, &bottom(), &strokes, &config) {
            StrokeVerdict::Mistake { show_hint, .. } => show_hint,
            other => panic!("expected a miss, got {:?}", other),
        })
        .collect();
    assert_eq!(hints, vec![false, true, true]);
    assert_eq!(session.current_stroke_index, 0);
}

#[test]
fn test_hints_disabled_with_zero() {
    let config = Config {
        session: SessionPolicy {
            show_hint_after_misses: 0,
            ..Default::default()
        },
        ..Default::default()
    };
    let strokes = two_bars(600.0);
    let mut session = StrokeSession::new(strokes.len());
    for _ in 0..5 {
        let verdict = validate_stroke(&mut session, &bottom(), &strokes, &config);
        assert!(matches!(
            verdict,
            StrokeVerdict::Mistake {
                show_hint: false,
                ..
            }
        ));
    }
}

#[test]
fn test_auto_accept_after_misses() {
    let config = Config {
        session: SessionPolicy {
            mark_correct_after_misses: 2,
            ..Default::default()
        },
        ..Default::default()
    };
    let strokes = two_bars(600.0);
    let mut session = StrokeSession::new(strokes.len());

    assert!(matches!(
        validate_stroke(&mut session, &bottom(), &strokes, &config),
        StrokeVerdict::Mistake { .. }
    ));
    match validate_stroke(&mut session, &bottom(), &strokes, &config) {
        StrokeVerdict::Accepted { result, .. } => assert!(!result.is_match),
        other => panic!("expected forced acceptance, got {:?}", other),
    }
    assert_eq!(session.current_stroke_index, 1);
    assert_eq!(session.total_mistakes, 1);
}

#[test]
fn test_finish_uses_wall_clock() {
    let session = StrokeSession::new(3);
    let score = session.finish(&SessionPolicy::default());
    // Nothing accepted yet; elapsed is a few microseconds, far under 12s.
    assert_eq!(score.quality_score, 0.0);
    assert_eq!(score.accuracy_score, 100.0);
    assert_eq!(score.speed_score, 60.0);
}
