//! Plain-text views for the terminal.

use std::fmt::Write;

use crate::domain::stats::HistoryTable;
use crate::domain::{Scoreboard, StatsReport};

const HEADER_WIDTH: usize = 3;

pub fn scoreboard_text(board: &Scoreboard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Round {}   dealer: {}", board.round, board.dealer_name);
    if let Some(target) = &board.target_score {
        let _ = writeln!(out, "Target: {target}");
    }
    let name_width = board
        .rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);
    for row in &board.rows {
        let marks = match (row.is_leader, row.is_dealer) {
            (true, true) => "* D",
            (true, false) => "*  ",
            (false, true) => "  D",
            (false, false) => "   ",
        };
        let _ = writeln!(
            out,
            "{:>2}. {:<name_width$} {:>6} {}",
            row.rank, row.name, row.score, marks
        );
    }
    out
}

pub fn stats_text(report: &StatsReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Rounds played: {}", report.rounds_played);
    let _ = writeln!(
        out,
        "Winner:            {} ({})",
        report.winner.name, report.winner.score
    );
    let _ = writeln!(
        out,
        "Loser:             {} ({})",
        report.loser.name, report.loser.score
    );
    let _ = writeln!(
        out,
        "Most zero rounds:  {} ({})",
        report.most_zeros.player.name, report.most_zeros.zero_rounds
    );
    let _ = writeln!(
        out,
        "Max points/round:  {} ({})",
        report.worst_round.player.name, report.worst_round.points
    );
    out.push('\n');
    out.push_str(&history_text(&report.history));
    out
}

/// Column headers use the first three characters of each name.
pub fn history_text(table: &HistoryTable) -> String {
    let mut out = String::from("  #");
    for name in &table.players {
        let short: String = name.chars().take(HEADER_WIDTH).collect();
        let _ = write!(out, " {short:>5}");
    }
    out.push('\n');
    for row in &table.rows {
        let _ = write!(out, "{:>3}", row.round);
        for cell in &row.cells {
            match cell {
                Some(v) => {
                    let _ = write!(out, " {v:>5}");
                }
                None => out.push_str("      "),
            }
        }
        out.push('\n');
    }
    out
}
