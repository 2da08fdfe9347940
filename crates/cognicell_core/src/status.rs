//! Read-only status snapshot of a cell.

use serde::{Deserialize, Serialize};

/// A point-in-time view of a cell, for aggregation and debugging.
///
/// Produced by [`crate::Cell::snapshot`]; reading one never mutates the cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellStatus {
    /// Caller-supplied label, never used by the algorithm.
    pub identity: String,
    /// Most recent output, in [-1, 1].
    pub activation: f32,
    /// Accumulated fatigue, in [0, 1].
    pub fatigue: f32,
    /// Fixed personality trait.
    pub curiosity: f32,
    /// Total stimuli processed over the cell's lifetime.
    pub age: u64,
    /// Experiences currently retained (≤ 100).
    pub history_len: usize,
    /// Mean output over the last min(10, history_len) experiences.
    pub recent_average_output: f32,
}
