//! Strongly typed identifier wrappers.
//!
//! Station ids are small integers assigned by the network designer, so they
//! are wrapped as a `Copy` newtype over `u32` — cheap to pass around and to
//! use as a `HashMap`/`BTreeMap` key.  AGVs and payloads are identified by
//! human-assigned strings in the input data, so their ids wrap `String`
//! instead; they are still `Clone + Ord + Hash` so they sort and key
//! deterministically.

use std::fmt;

// ── StationId ─────────────────────────────────────────────────────────────────

/// A station's integer identity, as assigned in the network description.
///
/// This is *not* guaranteed to be a dense, zero-based array index — station
/// ids are user-facing (`id ∈ [1, N]`) and may be sparse. `Network`
/// maintains its own dense index internally and never exposes it; every
/// public API speaks `StationId`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationId(pub u32);

impl StationId {
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StationId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

// ── String-backed identifiers ─────────────────────────────────────────────────

/// Generate a `String`-backed identifier newtype.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id! {
    /// Unique identity of one AGV, e.g. `"agv_1"`.
    pub struct AgvId;
}

string_id! {
    /// Unique identity of one payload, e.g. `"p1"`.
    pub struct PayloadId;
}
