use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use inkforge::matcher::{MatchResult, PredicateReport};
use inkforge::scorer::FinalScore;
use inkforge::session::StrokeVerdict;

fn pass_cell(ok: bool) -> Cell {
    if ok {
        Cell::new("PASS").fg(Color::Green)
    } else {
        Cell::new("FAIL").fg(Color::Red)
    }
}

fn fmt_dist(d: f64) -> String {
    if d.is_finite() {
        format!("{:.1}", d)
    } else {
        "∞".to_string()
    }
}

pub fn print_check_report(
    stroke: usize,
    attempt: usize,
    report: &PredicateReport,
    result: &MatchResult,
    quality: f64,
) {
    println!("\n🔎 Attempt {} vs stroke {}", attempt, stroke + 1);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Check").add_attribute(Attribute::Bold),
            Cell::new("Result").add_attribute(Attribute::Bold),
        ]);

    table.add_row(vec![
        Cell::new(format!("Avg distance ({})", fmt_dist(report.avg_distance))),
        pass_cell(report.within_average_distance),
    ]);
    table.add_row(vec![Cell::new("Start / end"), pass_cell(report.endpoints)]);
    table.add_row(vec![Cell::new("Direction"), pass_cell(report.direction)]);
    table.add_row(vec![Cell::new("Shape"), pass_cell(report.shape)]);
    table.add_row(vec![Cell::new("Length"), pass_cell(report.length)]);
    table.add_row(vec![
        Cell::new("All checks").add_attribute(Attribute::Bold),
        pass_cell(report.all_pass()),
    ]);
    table.add_row(vec![
        Cell::new("Verdict (after order check)").add_attribute(Attribute::Bold),
        pass_cell(result.is_match),
    ]);
    println!("{}", table);
    println!("Quality score: {:.1}", quality);
}

pub fn print_attempt_table(verdicts: &[(usize, StrokeVerdict)]) {
    println!("\n✍️  === ATTEMPTS === ✍️");
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Stroke", "Outcome", "Avg Dist", "Quality", "Hint"]);

    for (i, verdict) in verdicts {
        let row = match verdict {
            StrokeVerdict::Accepted {
                stroke_index,
                quality,
                result,
            } => vec![
                Cell::new(i),
                Cell::new(stroke_index + 1),
                Cell::new("accepted").fg(Color::Green),
                Cell::new(fmt_dist(result.avg_distance)).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.1}", quality)).set_alignment(CellAlignment::Right),
                Cell::new(""),
            ],
            StrokeVerdict::Mistake {
                stroke_index,
                result,
                show_hint,
            } => vec![
                Cell::new(i),
                Cell::new(stroke_index + 1),
                Cell::new("miss").fg(Color::Red),
                Cell::new(fmt_dist(result.avg_distance)).set_alignment(CellAlignment::Right),
                Cell::new("-").set_alignment(CellAlignment::Right),
                Cell::new(if *show_hint { "yes" } else { "" }),
            ],
            StrokeVerdict::SessionComplete => continue,
        };
        table.add_row(row);
    }
    println!("{}", table);
}

pub fn print_final_score(score: &FinalScore, total_mistakes: u32) {
    println!("\n🎉 === FINAL SCORE === 🎉");
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_header(vec!["Component", "Weight", "Score"]);

    let rows = [
        ("Accuracy", "40%", score.accuracy_score),
        ("Quality", "40%", score.quality_score),
        ("Speed", "20%", score.speed_score),
    ];
    for (name, weight, value) in rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(weight),
            Cell::new(format!("{:.1}", value)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("{:.1}", score.total_score))
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
    ]);
    println!("{}", table);
    println!("Mistakes: {}   Grade: {}", total_mistakes, score.grade);
}
