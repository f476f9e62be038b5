//! Historical comparisons: similar-player lookup and per-position summaries.
//!
//! These operate on the raw record set (not the benchmark map) and exist for
//! display collaborators; nothing in the simulation loop depends on them.

use serde::Serialize;

use crate::models::{Position, StatRecord};

/// How many similar players a lookup returns at most.
const MAX_SIMILAR: usize = 10;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SimilarPlayer {
    pub player: String,
    pub age: u8,
    pub ppg: f32,
    pub rpg: f32,
    pub apg: f32,
    pub similarity: f32,
}

/// Find historical players at `position` whose stat line resembles the given
/// triple. Similarity is the mean of per-metric closeness scores
/// `1 - |value - target| / max(target, 1)`; players below `1 - tolerance`
/// are filtered out. Results are sorted best-first, capped at ten.
pub fn find_similar_players(
    records: &[StatRecord],
    position: Position,
    ppg: f32,
    rpg: f32,
    apg: f32,
    tolerance: f32,
) -> Vec<SimilarPlayer> {
    let mut matches: Vec<SimilarPlayer> = records
        .iter()
        .filter(|r| r.position == position)
        .map(|r| SimilarPlayer {
            player: r.player.clone(),
            age: r.age,
            ppg: r.ppg,
            rpg: r.rpg,
            apg: r.apg,
            similarity: similarity_score(r, ppg, rpg, apg),
        })
        .filter(|s| s.similarity >= 1.0 - tolerance)
        .collect();

    matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    matches.truncate(MAX_SIMILAR);
    matches
}

fn similarity_score(record: &StatRecord, ppg: f32, rpg: f32, apg: f32) -> f32 {
    let closeness = |value: f32, target: f32| 1.0 - (value - target).abs() / target.max(1.0);
    (closeness(record.ppg, ppg) + closeness(record.rpg, rpg) + closeness(record.apg, apg)) / 3.0
}

/// Aggregate view of one position's records for display collaborators.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PositionAnalysis {
    pub position: Position,
    pub total_players: usize,
    pub avg_age: f32,
    pub avg_ppg: f32,
    pub avg_rpg: f32,
    pub avg_apg: f32,
    pub avg_mpg: f32,
    /// Top scorers at the position, best-first.
    pub top_performers: Vec<SimilarPlayer>,
}

/// Summarize one position's records. Returns `None` when the position has no
/// records at all.
pub fn position_analysis(records: &[StatRecord], position: Position) -> Option<PositionAnalysis> {
    let group: Vec<&StatRecord> = records.iter().filter(|r| r.position == position).collect();
    if group.is_empty() {
        return None;
    }

    let n = group.len() as f32;
    let mut top: Vec<&StatRecord> = group.clone();
    top.sort_by(|a, b| b.ppg.total_cmp(&a.ppg));

    Some(PositionAnalysis {
        position,
        total_players: group.len(),
        avg_age: group.iter().map(|r| r.age as f32).sum::<f32>() / n,
        avg_ppg: group.iter().map(|r| r.ppg).sum::<f32>() / n,
        avg_rpg: group.iter().map(|r| r.rpg).sum::<f32>() / n,
        avg_apg: group.iter().map(|r| r.apg).sum::<f32>() / n,
        avg_mpg: group.iter().map(|r| r.mpg).sum::<f32>() / n,
        top_performers: top
            .iter()
            .take(5)
            .map(|r| SimilarPlayer {
                player: r.player.clone(),
                age: r.age,
                ppg: r.ppg,
                rpg: r.rpg,
                apg: r.apg,
                similarity: 1.0,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(player: &str, ppg: f32, rpg: f32, apg: f32) -> StatRecord {
        StatRecord {
            player: player.to_string(),
            position: Position::PG,
            age: 26,
            ppg,
            rpg,
            apg,
            mpg: 28.0,
            games: 65,
        }
    }

    #[test]
    fn exact_match_scores_one() {
        let records = vec![record("Twin", 15.0, 4.0, 6.0)];
        let similar = find_similar_players(&records, Position::PG, 15.0, 4.0, 6.0, 0.2);
        assert_eq!(similar.len(), 1);
        assert!((similar[0].similarity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn distant_lines_are_filtered() {
        let records = vec![record("Near", 15.0, 4.0, 6.0), record("Far", 2.0, 12.0, 0.5)];
        let similar = find_similar_players(&records, Position::PG, 15.0, 4.0, 6.0, 0.2);
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].player, "Near");
    }

    #[test]
    fn analysis_averages_and_top_performers() {
        let records = vec![record("A", 10.0, 4.0, 6.0), record("B", 20.0, 6.0, 8.0)];
        let analysis = position_analysis(&records, Position::PG).unwrap();
        assert_eq!(analysis.total_players, 2);
        assert!((analysis.avg_ppg - 15.0).abs() < 1e-6);
        assert_eq!(analysis.top_performers[0].player, "B");

        assert!(position_analysis(&records, Position::C).is_none());
    }
}
