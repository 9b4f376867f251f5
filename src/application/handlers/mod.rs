//! Use-case handlers.
//!
//! One handler per command/query, each owning the ports it needs behind
//! `Arc<dyn ...>` so HTTP adapters and tests can wire them freely.

pub mod assessment;
pub mod profile;
