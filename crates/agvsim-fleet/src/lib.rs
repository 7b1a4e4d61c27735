//! `agvsim-fleet` — the AGV state machine and fleet roster.
//!
//! # Crate layout
//!
//! | Module    | Contents                                  |
//! |-----------|--------------------------------------------|
//! | [`agv`]   | `Agv`, `AgvMode`, the transition methods   |
//! | [`fleet`] | `Fleet` — registration-ordered AGV roster |
//! | [`error`] | `FleetError`, `FleetResult<T>`            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod agv;
pub mod error;
pub mod fleet;

#[cfg(test)]
mod tests;

pub use agv::{Agv, AgvMode};
pub use error::{FleetError, FleetResult};
pub use fleet::Fleet;
