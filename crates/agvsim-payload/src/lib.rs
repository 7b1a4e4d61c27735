//! `agvsim-payload` — payload descriptors, the registry, and CSV loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                         |
//! |--------------|----------------------------------------------------|
//! | [`payload`]  | `Payload`, `Priority`                            |
//! | [`registry`] | `PayloadRegistry`                                 |
//! | [`loader`]   | `load_payloads_csv`, `load_payloads_reader`       |
//! | [`error`]    | `PayloadError`, `PayloadResult<T>`                |

pub mod error;
pub mod loader;
pub mod payload;
pub mod registry;

#[cfg(test)]
mod tests;

pub use error::{PayloadError, PayloadResult};
pub use loader::{load_payloads_csv, load_payloads_reader};
pub use payload::{Payload, Priority};
pub use registry::PayloadRegistry;
