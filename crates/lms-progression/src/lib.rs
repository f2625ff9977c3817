//! Lock-state derivation and navigation gating for linear curricula
//!
//! Given the ordered unit snapshot a curriculum fetch returns, this crate
//! derives which units are locked, which is current, and whether moving
//! backward or forward is legal. It never mutates server state: marking a
//! unit complete belongs to the external progress API, and this engine
//! consumes the resulting snapshot on the next fetch. The UI reads lock
//! and navigation state from here and never computes it independently.
//!
//! # Example
//!
//! ```
//! use lms_progression::{LearningUnit, Progression};
//!
//! let units = vec![
//!     LearningUnit::new("intro", true, false),
//!     LearningUnit::new("basics", false, true),
//!     LearningUnit::new("advanced", false, false),
//! ];
//!
//! let progression = Progression::new(units);
//! let locks = progression.lock_state();
//! assert!(!locks[1].locked);
//! assert!(locks[2].locked);
//! assert!(progression.next().is_none()); // current unit incomplete
//! assert!(progression.previous().is_some());
//! ```

pub mod engine;
pub mod unit;

pub use engine::{Progression, SequenceAnomaly, compute_lock_state};
pub use unit::{LearningUnit, UnitId, UnitLock};
