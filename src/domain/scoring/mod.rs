//! Scoring module - factors, score sets, rankings, and the point fold.
//!
//! The scoring engine is a pure fold: an all-zero accumulator is threaded
//! through one `accumulate` call per ranked group and rounded exactly once
//! at finalization. No shared mutable state, no I/O.

mod engine;
mod factor;
mod ranking;
mod score_set;

pub use engine::accumulate;
pub use factor::{Factor, MotivatorFactor, StyleFactor};
pub use ranking::{Ranking, RankingError};
pub use score_set::{FinalScores, MotivatorScores, ScoreSet, StyleScores};
