//! Hash collections used throughout the engine.
//!
//! FxHash is not DoS-resistant; all keys here are internal identifiers,
//! never attacker-controlled input.

pub use rustc_hash::{FxHashMap, FxHashSet};
