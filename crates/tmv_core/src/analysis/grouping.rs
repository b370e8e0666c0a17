//! Run-length partitioning of the point log.
//!
//! ## Algorithm
//! 1. Scan the ordered point log left to right, comparing each point's
//!    structural `(set1, set2, gm1, gm2)` key to the previous one
//! 2. Close the current game and open a new one whenever the key changes
//! 3. Partition the resulting game sequence the same way on the set-score
//!    key alone
//!
//! Both passes are O(n) single scans with no lookahead. Games and sets
//! borrow contiguous sub-slices of the input; concatenating the games'
//! point slices reproduces the input exactly.

use crate::error::Result;
use crate::models::point::{PlayerId, Point, ScorePair};

/// A maximal contiguous run of points sharing one grouping key.
///
/// Derived per computation with no identity of its own; the server and
/// tiebreak flag come from the game's first point.
#[derive(Debug, Clone, Copy)]
pub struct Game<'a> {
    pub set_score: ScorePair,
    pub game_score: ScorePair,
    pub server: PlayerId,
    pub is_tiebreak: bool,
    /// Position of the game's first point in the match-wide point log.
    pub point_offset: usize,
    /// The game's points, never empty.
    pub points: &'a [Point],
}

/// A maximal contiguous run of games sharing one set-score key, recorded as
/// an inclusive range of global game indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRun {
    pub set_score: ScorePair,
    pub start_game_index: usize,
    pub end_game_index: usize,
}

impl SetRun {
    pub fn game_count(&self) -> usize {
        self.end_game_index - self.start_game_index + 1
    }
}

/// Partition the ordered point log into games.
///
/// Validates `svr` and `ptWinner` against {1, 2} on the same scan, so a
/// malformed point fails the computation here, naming its index, before any
/// output is assembled. An empty log yields an empty game sequence.
pub fn group_into_games(points: &[Point]) -> Result<Vec<Game<'_>>> {
    let mut games = Vec::new();
    let mut run_start = 0usize;

    for (index, point) in points.iter().enumerate() {
        PlayerId::from_raw(point.svr, "svr", index)?;
        PlayerId::from_raw(point.pt_winner, "ptWinner", index)?;

        if point.game_key() != points[run_start].game_key() {
            games.push(make_game(points, run_start, index)?);
            run_start = index;
        }
    }

    if !points.is_empty() {
        games.push(make_game(points, run_start, points.len())?);
    }

    Ok(games)
}

fn make_game(points: &[Point], start: usize, end: usize) -> Result<Game<'_>> {
    let first = &points[start];
    Ok(Game {
        set_score: ScorePair::new(first.set1, first.set2),
        game_score: ScorePair::new(first.gm1, first.gm2),
        server: PlayerId::from_raw(first.svr, "svr", start)?,
        is_tiebreak: first.is_tiebreak,
        point_offset: start,
        points: &points[start..end],
    })
}

/// Partition the ordered game sequence into sets.
///
/// Sets are contiguous runs on the set-score key; the recorded index ranges
/// let collaborators answer "which set owns global game #n" by containment
/// instead of re-derivation.
pub fn partition_sets(games: &[Game<'_>]) -> Vec<SetRun> {
    let mut sets = Vec::new();
    let mut run_start = 0usize;

    for (index, game) in games.iter().enumerate() {
        if game.set_score != games[run_start].set_score {
            sets.push(SetRun {
                set_score: games[run_start].set_score,
                start_game_index: run_start,
                end_game_index: index - 1,
            });
            run_start = index;
        }
    }

    if !games.is_empty() {
        sets.push(SetRun {
            set_score: games[run_start].set_score,
            start_game_index: run_start,
            end_game_index: games.len() - 1,
        });
    }

    sets
}

/// The contiguous slice of the match-wide point log covered by one set.
pub fn set_point_slice<'a>(points: &'a [Point], games: &[Game<'a>], run: &SetRun) -> &'a [Point] {
    let first = &games[run.start_game_index];
    let last = &games[run.end_game_index];
    &points[first.point_offset..last.point_offset + last.points.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_point(set: (u32, u32), game: (u32, u32), svr: u8, winner: u8) -> Point {
        Point {
            pt: 0,
            set1: set.0,
            set2: set.1,
            gm1: game.0,
            gm2: game.1,
            pts: String::new(),
            svr,
            pt_winner: winner,
            is_ace: false,
            is_unreturnable: false,
            is_rally_winner: false,
            is_forced_error: false,
            is_unforced_error: false,
            is_double_fault: false,
            rally_count: 0,
            is_server_winner: svr == winner,
            is_tiebreak: false,
            is_break_point: false,
        }
    }

    #[test]
    fn test_empty_log_yields_no_games() {
        let games = group_into_games(&[]).unwrap();
        assert!(games.is_empty());
        assert!(partition_sets(&games).is_empty());
    }

    #[test]
    fn test_single_game_grouping() {
        let points = vec![
            make_point((0, 0), (0, 0), 1, 1),
            make_point((0, 0), (0, 0), 1, 2),
            make_point((0, 0), (0, 0), 1, 1),
        ];
        let games = group_into_games(&points).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].points.len(), 3);
        assert_eq!(games[0].server, PlayerId::Player1);
        assert_eq!(games[0].point_offset, 0);
    }

    #[test]
    fn test_key_change_starts_new_game() {
        let points = vec![
            make_point((0, 0), (0, 0), 1, 1),
            make_point((0, 0), (0, 0), 1, 1),
            make_point((0, 0), (1, 0), 2, 2),
            make_point((0, 0), (1, 0), 2, 1),
            make_point((0, 0), (1, 1), 1, 1),
        ];
        let games = group_into_games(&points).unwrap();
        assert_eq!(games.len(), 3);
        assert_eq!(games[0].points.len(), 2);
        assert_eq!(games[1].points.len(), 2);
        assert_eq!(games[2].points.len(), 1);
        assert_eq!(games[1].server, PlayerId::Player2);
        assert_eq!(games[1].game_score, ScorePair::new(1, 0));
        assert_eq!(games[2].point_offset, 4);
    }

    #[test]
    fn test_grouping_round_trip() {
        let points = vec![
            make_point((0, 0), (0, 0), 1, 1),
            make_point((0, 0), (0, 0), 1, 2),
            make_point((0, 0), (1, 0), 2, 2),
            make_point((1, 0), (0, 0), 1, 1),
            make_point((1, 0), (0, 1), 2, 1),
        ];
        let games = group_into_games(&points).unwrap();
        let rebuilt: Vec<Point> =
            games.iter().flat_map(|g| g.points.iter().cloned()).collect();
        assert_eq!(rebuilt, points);
    }

    #[test]
    fn test_tiebreak_points_stay_one_game() {
        // Intra-tiebreak point-score changes never alter the game key.
        let mut points: Vec<Point> = (0..12)
            .map(|i| {
                let mut p = make_point((0, 0), (6, 6), 1, if i % 2 == 0 { 1 } else { 2 });
                p.is_tiebreak = true;
                p
            })
            .collect();
        points.push({
            let mut p = make_point((1, 0), (0, 0), 2, 2);
            p.is_tiebreak = false;
            p
        });
        let games = group_into_games(&points).unwrap();
        assert_eq!(games.len(), 2);
        assert!(games[0].is_tiebreak);
        assert_eq!(games[0].points.len(), 12);
        assert!(!games[1].is_tiebreak);
    }

    #[test]
    fn test_invalid_server_fails_with_index() {
        let mut points = vec![
            make_point((0, 0), (0, 0), 1, 1),
            make_point((0, 0), (0, 0), 1, 1),
        ];
        points[1].svr = 0;
        let err = group_into_games(&points).unwrap_err();
        match err {
            crate::error::MatchError::InvalidPlayer { index, field, value } => {
                assert_eq!(index, 1);
                assert_eq!(field, "svr");
                assert_eq!(value, 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_winner_fails_with_index() {
        let mut points = vec![make_point((0, 0), (0, 0), 1, 1)];
        points[0].pt_winner = 3;
        let err = group_into_games(&points).unwrap_err();
        assert!(err.to_string().contains("point 0"));
        assert!(err.to_string().contains("ptWinner"));
    }

    #[test]
    fn test_set_partition_ranges() {
        let points = vec![
            make_point((0, 0), (0, 0), 1, 1),
            make_point((0, 0), (1, 0), 2, 2),
            make_point((1, 0), (0, 0), 1, 1),
            make_point((1, 0), (0, 1), 2, 2),
            make_point((1, 1), (0, 0), 1, 1),
        ];
        let games = group_into_games(&points).unwrap();
        let sets = partition_sets(&games);
        assert_eq!(sets.len(), 3);
        assert_eq!(sets[0], SetRun {
            set_score: ScorePair::new(0, 0),
            start_game_index: 0,
            end_game_index: 1,
        });
        assert_eq!(sets[1].start_game_index, 2);
        assert_eq!(sets[1].end_game_index, 3);
        assert_eq!(sets[2].start_game_index, 4);
        assert_eq!(sets[2].end_game_index, 4);
        assert_eq!(sets[0].game_count(), 2);
        assert_eq!(sets[2].game_count(), 1);
    }

    #[test]
    fn test_set_point_slice_is_contiguous() {
        let points = vec![
            make_point((0, 0), (0, 0), 1, 1),
            make_point((0, 0), (0, 0), 1, 1),
            make_point((0, 0), (1, 0), 2, 2),
            make_point((1, 0), (0, 0), 1, 1),
        ];
        let games = group_into_games(&points).unwrap();
        let sets = partition_sets(&games);
        assert_eq!(sets.len(), 2);
        let first = set_point_slice(&points, &games, &sets[0]);
        assert_eq!(first.len(), 3);
        assert_eq!(first[0], points[0]);
        let second = set_point_slice(&points, &games, &sets[1]);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0], points[3]);
    }

    #[test]
    fn test_out_of_order_key_repeat_starts_new_game() {
        // A key seen earlier but not adjacent opens a fresh run instead of
        // merging into the distant game.
        let points = vec![
            make_point((0, 0), (0, 0), 1, 1),
            make_point((0, 0), (1, 0), 2, 2),
            make_point((0, 0), (0, 0), 1, 1),
        ];
        let games = group_into_games(&points).unwrap();
        assert_eq!(games.len(), 3);
        assert_eq!(games[0].game_score, games[2].game_score);
        assert_eq!(games[2].point_offset, 2);
    }
}
