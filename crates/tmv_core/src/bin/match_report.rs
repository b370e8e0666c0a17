// Terminal stats report for one charted match.
// Run with: cargo run --bin match_report -- <points.json> [matches.json]

use std::env;
use std::path::Path;
use std::process::ExitCode;

use tmv_core::analysis::analyze_match;
use tmv_core::data;
use tmv_core::models::{MatchInfo, MatchStatistics};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(points_path) = args.first() else {
        eprintln!("usage: match_report <points.json> [matches.json]");
        return ExitCode::FAILURE;
    };

    match run(Path::new(points_path), args.get(1).map(Path::new)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(points_path: &Path, index_path: Option<&Path>) -> tmv_core::Result<()> {
    let points = data::load_points(points_path)?;
    let stats = analyze_match(&points)?;

    // The match id doubles as the point file's stem, so the index entry can
    // be looked up when an index path is given.
    let info = match index_path {
        Some(index) => {
            let stem = points_path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
            data::load_match_index(index)?.into_iter().find(|m| m.id == stem)
        }
        None => None,
    };

    print_report(&stats, info.as_ref());
    Ok(())
}

fn print_report(stats: &MatchStatistics, info: Option<&MatchInfo>) {
    let (name1, name2) = match info {
        Some(info) => (info.player1.clone(), info.player2.clone()),
        None => ("Player 1".to_string(), "Player 2".to_string()),
    };

    println!("==========================================================");
    match info {
        Some(info) => println!("  {}", info.title()),
        None => println!("  Match report"),
    }
    println!("  {} games, {} sets", stats.games.len(), stats.sets.len());
    println!("==========================================================");
    println!("{:<24} {:>14} {:>14}", "", name1, name2);

    let p1 = &stats.match_totals.player1;
    let p2 = &stats.match_totals.player2;
    row("Aces", p1.aces.to_string(), p2.aces.to_string());
    row("Double Faults", p1.double_faults.to_string(), p2.double_faults.to_string());
    row("1st Serve % (est)", pct(p1.first_serve_ratio()), pct(p2.first_serve_ratio()));
    row(
        "Win % on 1st (est)",
        pct(p1.first_serve_win_ratio()),
        pct(p2.first_serve_win_ratio()),
    );
    row(
        "Win % on 2nd (est)",
        pct(p1.second_serve_win_ratio()),
        pct(p2.second_serve_win_ratio()),
    );
    row(
        "Service Pts Won",
        fraction(p1.service_points_won, p1.service_points_total),
        fraction(p2.service_points_won, p2.service_points_total),
    );
    row(
        "Service Games",
        fraction(p1.service_games_won, p1.service_games_total),
        fraction(p2.service_games_won, p2.service_games_total),
    );
    row(
        "Break Points",
        fraction(p1.break_points_converted, p1.break_points_faced),
        fraction(p2.break_points_converted, p2.break_points_faced),
    );
    row(
        "Tiebreaks Won",
        fraction(p1.tiebreaks_won, p1.tiebreaks_played),
        fraction(p2.tiebreaks_won, p2.tiebreaks_played),
    );
    row(
        "Receiving Pts",
        fraction(p1.receiving_points_won, p1.receiving_points_total),
        fraction(p2.receiving_points_won, p2.receiving_points_total),
    );
    row("Points Won", p1.points_won.to_string(), p2.points_won.to_string());
    row("Games Won", p1.games_won.to_string(), p2.games_won.to_string());
    row(
        "Max Games Streak",
        p1.max_games_in_row.to_string(),
        p2.max_games_in_row.to_string(),
    );
    row(
        "Max Points Streak",
        p1.max_points_in_row.to_string(),
        p2.max_points_in_row.to_string(),
    );

    println!("----------------------------------------------------------");
    for set in &stats.sets {
        let breaks = stats.games[set.start_game_index..=set.end_game_index]
            .iter()
            .filter(|g| g.is_break)
            .count();
        println!(
            "Set {}: games {:>2}-{:<2}  {} {} - {} {}  ({} breaks)",
            set.index + 1,
            set.start_game_index,
            set.end_game_index,
            name1,
            set.player1.games_won,
            set.player2.games_won,
            name2,
            breaks,
        );
    }
}

fn row(label: &str, p1: String, p2: String) {
    println!("{label:<24} {p1:>14} {p2:>14}");
}

fn pct(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round() as u32)
}

fn fraction(won: u32, total: u32) -> String {
    format!("{won}/{total}")
}
