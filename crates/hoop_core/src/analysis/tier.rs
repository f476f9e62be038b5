//! Performance tier classification against position benchmarks.

use crate::analysis::benchmarks::{BenchmarkMap, PositionBenchmark};
use crate::models::{Position, Tier};

/// Classify a stat triple against one position's benchmarks.
///
/// `elite_score` counts metrics at or above the elite threshold and
/// `starter_score` counts metrics at or above the starter threshold; the two
/// counts are independent (a metric that clears elite also clears starter).
pub fn classify(benchmark: &PositionBenchmark, ppg: f32, rpg: f32, apg: f32) -> Tier {
    let elite_score = threshold_count(benchmark, ppg, rpg, apg, |m| m.elite);
    let starter_score = threshold_count(benchmark, ppg, rpg, apg, |m| m.starter);

    if elite_score >= 2 || (elite_score == 1 && starter_score == 2) {
        Tier::ElitePlayer
    } else if starter_score >= 2 {
        Tier::Starter
    } else if starter_score >= 1 {
        Tier::RolePlayer
    } else {
        Tier::BenchPlayer
    }
}

/// Classify against the benchmark map, falling back to `RolePlayer` when the
/// position has no benchmark entry.
pub fn classify_position(
    benchmarks: &BenchmarkMap,
    position: Position,
    ppg: f32,
    rpg: f32,
    apg: f32,
) -> Tier {
    match benchmarks.get(&position) {
        Some(benchmark) => classify(benchmark, ppg, rpg, apg),
        None => Tier::RolePlayer,
    }
}

fn threshold_count(
    benchmark: &PositionBenchmark,
    ppg: f32,
    rpg: f32,
    apg: f32,
    threshold: impl Fn(crate::analysis::benchmarks::MetricBenchmark) -> f32,
) -> u8 {
    let mut count = 0;
    if ppg >= threshold(benchmark.ppg) {
        count += 1;
    }
    if rpg >= threshold(benchmark.rpg) {
        count += 1;
    }
    if apg >= threshold(benchmark.apg) {
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::benchmarks::MetricBenchmark;

    fn benchmark() -> PositionBenchmark {
        PositionBenchmark {
            ppg: MetricBenchmark { elite: 20.0, starter: 14.0, average: 10.0 },
            rpg: MetricBenchmark { elite: 8.0, starter: 6.0, average: 4.0 },
            apg: MetricBenchmark { elite: 7.0, starter: 5.0, average: 3.0 },
        }
    }

    #[test]
    fn two_elite_metrics_is_elite() {
        assert_eq!(classify(&benchmark(), 22.0, 9.0, 1.0), Tier::ElitePlayer);
    }

    #[test]
    fn one_elite_plus_one_other_starter_is_elite() {
        // ppg clears elite (and therefore starter); rpg clears starter only,
        // making starter_score exactly 2.
        assert_eq!(classify(&benchmark(), 21.0, 6.5, 1.0), Tier::ElitePlayer);
    }

    #[test]
    fn one_elite_with_two_other_starters_overshoots_to_starter() {
        // starter_score is 3 here, so the elite branch's exact-2 check fails.
        assert_eq!(classify(&benchmark(), 21.0, 6.5, 5.5), Tier::Starter);
    }

    #[test]
    fn one_elite_alone_is_not_elite() {
        // ppg elite also counts toward starter, so starter_score is 1 here.
        assert_eq!(classify(&benchmark(), 21.0, 1.0, 1.0), Tier::RolePlayer);
    }

    #[test]
    fn two_starter_metrics_is_starter() {
        assert_eq!(classify(&benchmark(), 15.0, 6.5, 1.0), Tier::Starter);
    }

    #[test]
    fn one_starter_metric_is_role_player() {
        assert_eq!(classify(&benchmark(), 15.0, 1.0, 1.0), Tier::RolePlayer);
    }

    #[test]
    fn nothing_cleared_is_bench_player() {
        assert_eq!(classify(&benchmark(), 5.0, 1.0, 1.0), Tier::BenchPlayer);
    }

    #[test]
    fn exact_threshold_counts() {
        // >= comparisons: sitting exactly on the starter lines still counts.
        assert_eq!(classify(&benchmark(), 14.0, 6.0, 0.0), Tier::Starter);
    }

    #[test]
    fn unbenchmarked_position_falls_back_to_role_player() {
        let benchmarks = BenchmarkMap::new();
        assert_eq!(
            classify_position(&benchmarks, Position::C, 30.0, 14.0, 10.0),
            Tier::RolePlayer
        );
    }
}
