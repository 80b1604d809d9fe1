//! Guild identifiers.

use serde::{Deserialize, Serialize};

/// Discord guild (server) snowflake.
///
/// # Examples
///
/// ```
/// use obsidion_core::GuildId;
///
/// let guild = GuildId::from(42);
/// assert_eq!(guild.get(), 42);
/// assert_eq!(guild.to_string(), "42");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct GuildId(u64);

impl GuildId {
    /// Wrap a raw snowflake.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw snowflake value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Value as a signed BIGINT key, if it fits.
    pub fn as_i64(self) -> Option<i64> {
        i64::try_from(self.0).ok()
    }
}

impl std::str::FromStr for GuildId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
