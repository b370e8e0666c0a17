//! Match statistics assembly, the engine entry point.
//!
//! ## Pipeline
//! 1. Empty input short-circuits to the defined empty model
//! 2. Group points into games (validating `svr`/`ptWinner` on the scan)
//! 3. Partition games into sets
//! 4. Reduce each game to a [`GameSummary`], attaching per-set momentum
//! 5. Reduce player statistics at match scope and once per set
//!
//! Every pass is a pure scan over the immutable input; two invocations on
//! the same point log produce structurally identical output.

use crate::analysis::grouping::{self, Game, SetRun};
use crate::analysis::momentum::MomentumTracker;
use crate::analysis::player_stats::compute_player_stats;
use crate::error::{MatchError, Result};
use crate::models::point::{PlayerId, Point};
use crate::models::statistics::{
    GameSummary, MatchStatistics, MatchTotals, OutcomeType, SetSummary,
};

/// Compute the full statistics model for an ordered point log.
///
/// The engine is a pure function of its input: no I/O, no shared state, and
/// a freshly allocated output per call, so callers may cache the result on
/// the identity of the point log. An empty log is a defined outcome (empty
/// model), not an error; malformed input fails the whole computation with
/// the offending index and never returns a partial model.
pub fn analyze_match(points: &[Point]) -> Result<MatchStatistics> {
    if points.is_empty() {
        return Ok(MatchStatistics::empty());
    }

    let games = grouping::group_into_games(points)?;
    let sets = grouping::partition_sets(&games);
    let summaries = summarize_games(&games, &sets)?;

    let match_totals = MatchTotals {
        player1: compute_player_stats(points, &summaries, PlayerId::Player1),
        player2: compute_player_stats(points, &summaries, PlayerId::Player2),
    };

    let set_summaries = build_set_summaries(points, &games, &summaries, &sets);

    log::debug!(
        "analyzed {} points into {} games across {} sets",
        points.len(),
        summaries.len(),
        set_summaries.len()
    );

    Ok(MatchStatistics { match_totals, games: summaries, sets: set_summaries })
}

/// Reduce every grouped game to its summary, walking set by set so the
/// momentum differential resets at each set boundary.
fn summarize_games(games: &[Game<'_>], sets: &[SetRun]) -> Result<Vec<GameSummary>> {
    let mut summaries = Vec::with_capacity(games.len());
    let mut momentum = MomentumTracker::new();

    for run in sets {
        momentum.reset();
        for (set_index, index) in (run.start_game_index..=run.end_game_index).enumerate() {
            summaries.push(summarize_game(&games[index], index, set_index, &mut momentum)?);
        }
    }

    Ok(summaries)
}

fn summarize_game(
    game: &Game<'_>,
    index: usize,
    set_index: usize,
    momentum: &mut MomentumTracker,
) -> Result<GameSummary> {
    let mut p1_points = 0u32;
    let mut p2_points = 0u32;
    let mut aces = 0u32;
    let mut double_faults = 0u32;
    let mut rally_winners = 0u32;
    let mut unforced_errors = 0u32;
    let mut had_break_point = false;

    for point in game.points {
        match point.pt_winner {
            1 => p1_points += 1,
            _ => p2_points += 1,
        }
        if point.is_ace {
            aces += 1;
        }
        if point.is_double_fault {
            double_faults += 1;
        }
        if point.is_rally_winner {
            rally_winners += 1;
        }
        if point.is_unforced_error {
            unforced_errors += 1;
        }
        if point.is_break_point {
            had_break_point = true;
        }
    }

    let winner = if p1_points > p2_points {
        PlayerId::Player1
    } else if p2_points > p1_points {
        PlayerId::Player2
    } else {
        return Err(MatchError::TiedGame { index, p1_points, p2_points });
    };

    // Unforced-error-driven games outnumbering clean winners dim the bar.
    let outcome_type = if unforced_errors > aces + rally_winners {
        OutcomeType::Unforced
    } else {
        OutcomeType::Clean
    };

    Ok(GameSummary {
        index,
        set_score: game.set_score,
        game_score: game.game_score,
        server: game.server,
        winner,
        p1_points,
        p2_points,
        is_break: winner != game.server,
        is_tiebreak: game.is_tiebreak,
        had_break_point,
        aces,
        double_faults,
        rally_winners,
        unforced_errors,
        outcome_type,
        set_momentum: momentum.record(winner),
        set_index,
    })
}

fn build_set_summaries(
    points: &[Point],
    games: &[Game<'_>],
    summaries: &[GameSummary],
    sets: &[SetRun],
) -> Vec<SetSummary> {
    sets.iter()
        .enumerate()
        .map(|(index, run)| {
            let set_points = grouping::set_point_slice(points, games, run);
            let set_games = &summaries[run.start_game_index..=run.end_game_index];
            SetSummary {
                index,
                set_score_label: run.set_score.label(),
                set_score: run.set_score,
                start_game_index: run.start_game_index,
                end_game_index: run.end_game_index,
                game_count: run.game_count(),
                player1: compute_player_stats(set_points, set_games, PlayerId::Player1),
                player2: compute_player_stats(set_points, set_games, PlayerId::Player2),
            }
        })
        .collect()
}
