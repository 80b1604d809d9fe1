//! Trait definitions for the collaborators of the settings resolver.
//!
//! The resolver only ever talks to a fast key-value cache and a durable
//! per-guild store through these traits, so backends can be swapped
//! (Redis or in-memory, Postgres or in-memory) without touching it.

#![warn(missing_docs)]

mod traits;

pub use traits::{GuildSettingStore, KeyValueCache};
