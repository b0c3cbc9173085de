//! Platform independent part of the circle drawing game: stroke model,
//! scoring, color mapping and the small pieces of state the browser glue
//! drives.

pub mod color;
pub mod constants;
pub mod geometry;
pub mod high_score;
pub mod pointer;
pub mod scoring;
pub mod share;

pub use color::{Rgb, color_for};
pub use geometry::{Point, Stroke};
pub use high_score::{HighScoreStore, MemoryStore};
pub use pointer::Pointer;
pub use scoring::{ScoreError, ScoreResult, SubScores, score};
