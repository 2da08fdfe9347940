//! Experience records and the bounded FIFO log that holds them.
//!
//! The log is the cell's entire memory: capacity 100, oldest-first,
//! one eviction per overflow. Eviction never touches the cell's age.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How many experiences a cell retains before forgetting the oldest.
pub const HISTORY_CAPACITY: usize = 100;

/// One retained moment: what came in, what went out, how tired the cell
/// was right after, and when it happened (fractional Unix seconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub input: f32,
    pub output: f32,
    pub fatigue: f32,
    pub timestamp: f64,
}

impl Experience {
    /// Capture an experience stamped with the current wall clock.
    pub(crate) fn captured(input: f32, output: f32, fatigue: f32) -> Self {
        Self {
            input,
            output,
            fatigue,
            timestamp: chrono::Utc::now().timestamp_micros() as f64 / 1e6,
        }
    }
}

/// Fixed-capacity, insertion-ordered experience log.
///
/// Backed by a `VecDeque` so overflow is an O(1) `pop_front` instead of
/// an O(n) shift. The front element is always the oldest survivor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceLog {
    entries: VecDeque<Experience>,
    capacity: usize,
}

impl ExperienceLog {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an experience, evicting the oldest entry once past capacity.
    /// Exactly one eviction can happen per call.
    pub fn record(&mut self, experience: Experience) {
        self.entries.push_back(experience);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The oldest surviving experience, if any.
    pub fn oldest(&self) -> Option<&Experience> {
        self.entries.front()
    }

    /// The most recent experience, if any.
    pub fn latest(&self) -> Option<&Experience> {
        self.entries.back()
    }

    /// Oldest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Experience> {
        self.entries.iter()
    }

    /// Arithmetic mean of the `output` field over the most recent
    /// `min(n, len)` entries. 0.0 when the log is empty.
    pub fn recent_mean_output(&self, n: usize) -> f32 {
        let count = n.min(self.entries.len());
        if count == 0 {
            return 0.0;
        }
        let sum: f32 = self
            .entries
            .iter()
            .rev()
            .take(count)
            .map(|e| e.output)
            .sum();
        sum / count as f32
    }
}

impl Default for ExperienceLog {
    fn default() -> Self {
        Self::new()
    }
}
