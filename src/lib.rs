//! Resume scorer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod resume;
pub mod scoring;
pub mod storage;

pub use config::Config;
pub use error::{Result, ResumeScorerError};
pub use resume::ResumeRecord;
pub use scoring::{KeywordScorer, ScoreBreakdown, ScoreProvider};
