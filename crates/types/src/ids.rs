//! Newtype wrappers for engine identifiers
//!
//! These types keep placeholder ids from being confused with plain counters
//! or byte offsets when they travel through fragments and tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier for one entry in a compilation run's placeholder table.
///
/// Ids are handed out in increasing order starting at zero and are only
/// meaningful together with the table that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlaceholderId(u32);

impl PlaceholderId {
    /// Creates a PlaceholderId from its sequence number
    pub const fn new(seq: u32) -> Self {
        Self(seq)
    }

    /// Returns the sequence number of this id
    pub const fn seq(self) -> u32 {
        self.0
    }

    /// Returns the id as an index into an arena-style table
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for PlaceholderId {
    fn from(seq: u32) -> Self {
        Self(seq)
    }
}

impl fmt::Display for PlaceholderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
