//! `agvsim-network` — the weighted station graph and shortest-path routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|--------------------------------------------------------|
//! | [`network`] | `Station`, `Network`, `NetworkBuilder`                |
//! | [`router`]  | Dijkstra shortest-path search, recomputed per query   |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod error;
pub mod network;
pub mod router;


pub use error::{NetworkError, NetworkResult};
pub use network::{Network, NetworkBuilder, Station};
