//! Scoring module
//! The pure keyword-overlap heuristic behind the relevance score

pub mod engine;
pub mod keywords;

pub use engine::{KeywordAnalysis, KeywordScorer, ScoreBreakdown, ScoreProvider};
pub use keywords::extract_keywords;
