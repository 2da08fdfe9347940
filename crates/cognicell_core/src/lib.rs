//! # Cognicell Core
//!
//! The smallest stateful unit of the system: one [`Cell`] that turns a scalar
//! stimulus into a bounded response while carrying a persistent self:
//!
//! - **Fatigue**: repeated work reduces efficiency; rest restores it
//! - **Novelty**: a big jump from the previous stimulus gets amplified,
//!   scaled by the cell's fixed curiosity trait
//! - **Memory**: a bounded FIFO log of the last 100 experiences
//!
//! ## Design
//!
//! A cell is a plain synchronous state machine. Callers drive it directly:
//! feed stimuli with [`Cell::process_stimulus`], rest it with
//! [`Cell::recover`], and read it back with [`Cell::snapshot`]. There is no
//! background task, no interior locking, and no hidden global randomness —
//! the one random draw (default curiosity) takes an explicit `Rng`.

mod cell;
mod error;
mod experience;
mod status;

pub use cell::Cell;
pub use error::CellError;
pub use experience::{Experience, ExperienceLog, HISTORY_CAPACITY};
pub use status::CellStatus;
