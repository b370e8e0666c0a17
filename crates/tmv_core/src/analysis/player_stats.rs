//! Per-player statistics reduction.
//!
//! One reducer serves every scope: the whole match and each individual set
//! call it with the point and game-summary sub-sequences belonging to that
//! scope. Game-derived counters always come from summaries, so they are
//! correct at match scope as well as per set.

use crate::analysis::momentum::longest_win_streak;
use crate::models::point::{PlayerId, Point};
use crate::models::statistics::{GameSummary, PlayerStatistics};

/// Reduce one scope's points and games into a flat statistics record for
/// the target player.
///
/// Serve-split counters use the documented approximation for data without a
/// first-serve-in flag: every non-double-fault service point counts as a
/// first serve in, every double fault as a second-serve point. See
/// [`PlayerStatistics`] for the contract.
pub fn compute_player_stats(
    points: &[Point],
    games: &[GameSummary],
    player: PlayerId,
) -> PlayerStatistics {
    let raw = player.as_u8();
    let mut stats = PlayerStatistics::default();

    for point in points {
        stats.points_total += 1;
        let won = point.pt_winner == raw;
        if won {
            stats.points_won += 1;
        }

        if point.svr == raw {
            stats.service_points_total += 1;
            stats.first_serve_total += 1;

            if point.is_ace {
                stats.aces += 1;
            }
            if point.is_double_fault {
                stats.double_faults += 1;
                stats.second_serve_total += 1;
            } else {
                stats.first_serve_in += 1;
            }

            if won {
                stats.service_points_won += 1;
                if !point.is_double_fault {
                    stats.first_serve_won += 1;
                }
            }
        } else {
            stats.receiving_points_total += 1;
            if won {
                stats.receiving_points_won += 1;
            }
            if point.is_break_point {
                stats.break_points_faced += 1;
                if won {
                    stats.break_points_converted += 1;
                }
            }
        }
    }

    for game in games {
        stats.games_total += 1;
        let won = game.winner == player;
        if won {
            stats.games_won += 1;
        }
        if game.server == player {
            stats.service_games_total += 1;
            if won {
                stats.service_games_won += 1;
            }
        }
        if game.is_tiebreak {
            stats.tiebreaks_played += 1;
            if won {
                stats.tiebreaks_won += 1;
            }
        }
    }

    stats.max_points_in_row = longest_win_streak(points.iter().map(|p| p.pt_winner == raw));
    stats.max_games_in_row = longest_win_streak(games.iter().map(|g| g.winner == player));

    stats
}
