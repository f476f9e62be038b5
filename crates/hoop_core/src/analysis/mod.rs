//! Statistical analysis over the historical record set: percentile
//! benchmarks, tier classification, and display-side comparisons.

pub mod benchmarks;
pub mod similarity;
pub mod tier;

pub use benchmarks::{
    compute_benchmarks, BenchmarkMap, MetricBenchmark, PositionBenchmark,
    MIN_RECORDS_PER_POSITION,
};
pub use similarity::{find_similar_players, position_analysis, PositionAnalysis, SimilarPlayer};
pub use tier::{classify, classify_position};
