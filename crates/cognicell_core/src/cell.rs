//! The Cell state machine.
//!
//! A cell is driven entirely by its caller: each `process_stimulus` call is
//! one synchronous, non-atomic state update (read fatigue → compute → write
//! fatigue → append history). Callers sharing a cell across threads must
//! serialize writers themselves.

use crate::error::CellError;
use crate::experience::{Experience, ExperienceLog};
use crate::status::CellStatus;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Consecutive stimuli differing by more than this count as novel.
const NOVELTY_THRESHOLD: f32 = 0.3;
/// How strongly curiosity amplifies a novel stimulus.
const CURIOSITY_GAIN: f32 = 0.5;
/// Flat fatigue cost of processing one stimulus.
const FATIGUE_BASE_COST: f32 = 0.01;
/// Extra fatigue cost proportional to output magnitude.
const FATIGUE_ACTIVATION_COST: f32 = 0.005;
/// Passive fatigue recovery applied on every stimulus.
const PASSIVE_RECOVERY: f32 = 0.001;
/// Fatigue recovered by one explicit rest.
const REST_RECOVERY: f32 = 0.1;
/// How many recent outputs the snapshot averages over.
const SNAPSHOT_WINDOW: usize = 10;

/// Guard against NaN/Inf in a construction parameter.
#[inline]
fn sanitize_curiosity(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        tracing::warn!("non-finite curiosity {}, falling back to 0.6", v);
        0.6
    }
}

/// One cell: a persistent self that remembers, tires, and reacts to novelty.
///
/// `identity` is opaque bookkeeping; `curiosity` is fixed for life. Everything
/// else evolves only through [`Cell::process_stimulus`] and [`Cell::recover`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    identity: String,
    curiosity: f32,
    activation: f32,
    fatigue: f32,
    last_input: f32,
    age: u64,
    history: ExperienceLog,

    /// Peer identities. Declared for a future inter-cell pass; no algorithm
    /// here reads it.
    friends: Vec<String>,

    // Debug counters
    times_activated: u64,
    times_rested: u64,
}

impl Cell {
    /// Create a cell with an explicit curiosity.
    ///
    /// Finite curiosity is clamped to [0.0, 1.0]; NaN/Inf falls back to 0.6.
    pub fn new(identity: impl Into<String>, curiosity: f32) -> Self {
        let identity = identity.into();
        let curiosity = sanitize_curiosity(curiosity);
        tracing::debug!("cell {} born, curiosity {:.2}", identity, curiosity);

        Self {
            identity,
            curiosity,
            activation: 0.0,
            fatigue: 0.0,
            last_input: 0.0,
            age: 0,
            history: ExperienceLog::new(),
            friends: Vec::new(),
            times_activated: 0,
            times_rested: 0,
        }
    }

    /// Create a cell with a random personality drawn from [0.3, 0.9].
    ///
    /// The random source is caller-supplied so seeding (and therefore
    /// reproducibility) stays under caller control.
    pub fn with_random_curiosity<R: Rng + ?Sized>(identity: impl Into<String>, rng: &mut R) -> Self {
        let curiosity = rng.gen_range(0.3..=0.9);
        Self::new(identity, curiosity)
    }

    /// Feel one stimulus and respond. Returns the new activation in [-1, 1].
    ///
    /// The update, in order: age the cell, derive efficiency from fatigue,
    /// amplify the stimulus if it is novel, squash through `tanh`, pay the
    /// fatigue cost (then the small passive recovery), remember the moment.
    ///
    /// A non-finite stimulus is rejected before any state changes — `tanh`
    /// would otherwise carry the NaN forward forever.
    pub fn process_stimulus(&mut self, input: f32) -> Result<f32, CellError> {
        if !input.is_finite() {
            return Err(CellError::NonFiniteStimulus(input));
        }

        self.age += 1;
        self.times_activated += 1;

        // === Efficiency ===
        // fatigue 0 → full efficiency, fatigue 1 → none
        let efficiency = 1.0 - self.fatigue;

        // === Novelty ===
        // Binary: either the jump from the last stimulus crosses the
        // threshold and curiosity amplifies it, or the input passes through.
        let change = (input - self.last_input).abs();
        let effective_input = if change > NOVELTY_THRESHOLD {
            input * (1.0 + self.curiosity * CURIOSITY_GAIN)
        } else {
            input
        };

        // === Response ===
        // tanh is the sole bound on activation; arbitrarily large raw
        // values still land in [-1, 1].
        let raw = effective_input * efficiency;
        self.activation = raw.tanh();

        // === Fatigue ===
        // Stronger output costs more. Applied even when already exhausted,
        // followed by the fixed passive recovery. Clamps keep [0, 1].
        let gain = FATIGUE_BASE_COST + self.activation.abs() * FATIGUE_ACTIVATION_COST;
        self.fatigue = (self.fatigue + gain).min(1.0);
        self.fatigue = (self.fatigue - PASSIVE_RECOVERY).max(0.0);

        // === Memory ===
        self.history
            .record(Experience::captured(input, self.activation, self.fatigue));
        self.last_input = input;

        tracing::trace!(
            "cell {}: input={:.3} change={:.3} activation={:.3} fatigue={:.3}",
            self.identity,
            input,
            change,
            self.activation,
            self.fatigue
        );

        Ok(self.activation)
    }

    /// Take a rest: recover a fixed chunk of fatigue, never below zero.
    pub fn recover(&mut self) {
        self.fatigue = (self.fatigue - REST_RECOVERY).max(0.0);
        self.times_rested += 1;
    }

    /// Read-only status view. Mutates nothing, not even counters.
    pub fn snapshot(&self) -> CellStatus {
        CellStatus {
            identity: self.identity.clone(),
            activation: self.activation,
            fatigue: self.fatigue,
            curiosity: self.curiosity,
            age: self.age,
            history_len: self.history.len(),
            recent_average_output: self.history.recent_mean_output(SNAPSHOT_WINDOW),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn activation(&self) -> f32 {
        self.activation
    }

    pub fn fatigue(&self) -> f32 {
        self.fatigue
    }

    pub fn curiosity(&self) -> f32 {
        self.curiosity
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    /// The retained experience log, oldest-first.
    pub fn history(&self) -> &ExperienceLog {
        &self.history
    }

    pub fn times_activated(&self) -> u64 {
        self.times_activated
    }

    pub fn times_rested(&self) -> u64 {
        self.times_rested
    }

    /// Declare a peer. Inert for now — no algorithm consumes the list.
    pub fn add_friend(&mut self, identity: impl Into<String>) {
        self.friends.push(identity.into());
    }

    pub fn friends(&self) -> &[String] {
        &self.friends
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell {}: feeling={:.2}, tired={:.2}, age={}",
            self.identity, self.activation, self.fatigue, self.age
        )
    }
}
