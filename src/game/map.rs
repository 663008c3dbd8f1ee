use super::bridge::Lane;
use super::state::MoveRecord;

/// Render the cumulative crossing map for an attempt, upper row first.
///
/// Each recorded move contributes one column: the row matching the chosen
/// lane shows `O` for a correct step and `X` for a wrong one; the other row
/// stays blank. The map grows one column per move, so rendering after k
/// moves is a strict column-prefix of rendering after k+1.
pub fn render_rows(attempt: &[MoveRecord]) -> [String; 2] {
    [
        render_row(attempt, Lane::Up),
        render_row(attempt, Lane::Down),
    ]
}

fn render_row(attempt: &[MoveRecord], row: Lane) -> String {
    let cells: Vec<&str> = attempt
        .iter()
        .map(|record| {
            if record.lane != row {
                " "
            } else if record.correct {
                "O"
            } else {
                "X"
            }
        })
        .collect();
    format!("[ {} ]", cells.join(" | "))
}
