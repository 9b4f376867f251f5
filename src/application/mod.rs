//! Application layer - use-case handlers wiring ports to the domain.

pub mod handlers;
