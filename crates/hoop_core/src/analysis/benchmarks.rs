//! Position benchmark derivation from historical player-season records.
//!
//! For each position with at least two records, the 90th percentile ("elite"),
//! 70th percentile ("starter") and median ("average") are computed per metric
//! using linear interpolation between order statistics. Positions with fewer
//! records are omitted entirely rather than zero-filled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Position, StatRecord};

/// Minimum records a position needs before it is benchmarked at all.
pub const MIN_RECORDS_PER_POSITION: usize = 2;

/// Percentile thresholds for one metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricBenchmark {
    pub elite: f32,
    pub starter: f32,
    pub average: f32,
}

/// Benchmarks for one position across the three scoring metrics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PositionBenchmark {
    pub ppg: MetricBenchmark,
    pub rpg: MetricBenchmark,
    pub apg: MetricBenchmark,
}

/// Benchmark map keyed by position. BTreeMap keeps `Position::ALL` order,
/// which is also the deterministic fallback order for unbenchmarked positions.
pub type BenchmarkMap = BTreeMap<Position, PositionBenchmark>;

/// Compute per-position percentile benchmarks. Pure function of its input.
pub fn compute_benchmarks(records: &[StatRecord]) -> BenchmarkMap {
    let mut by_position: BTreeMap<Position, Vec<&StatRecord>> = BTreeMap::new();
    for record in records {
        by_position.entry(record.position).or_default().push(record);
    }

    let mut benchmarks = BenchmarkMap::new();
    for (position, group) in by_position {
        if group.len() < MIN_RECORDS_PER_POSITION {
            continue;
        }

        let ppg = metric_benchmark(group.iter().map(|r| r.ppg).collect());
        let rpg = metric_benchmark(group.iter().map(|r| r.rpg).collect());
        let apg = metric_benchmark(group.iter().map(|r| r.apg).collect());
        benchmarks.insert(position, PositionBenchmark { ppg, rpg, apg });
    }

    benchmarks
}

fn metric_benchmark(mut values: Vec<f32>) -> MetricBenchmark {
    values.sort_by(|a, b| a.total_cmp(b));
    MetricBenchmark {
        elite: percentile(&values, 0.9),
        starter: percentile(&values, 0.7),
        average: percentile(&values, 0.5),
    }
}

/// Percentile of a sorted slice with linear interpolation between order
/// statistics. `p` is a fraction in [0, 1]. The slice must be non-empty.
pub fn percentile(sorted: &[f32], p: f32) -> f32 {
    debug_assert!(!sorted.is_empty());
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f32;
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let fraction = rank - lower as f32;

    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
