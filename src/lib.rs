//! DNA Assessment - Guided Self-Assessment Service
//!
//! This crate administers two forced-ranking inventories (a behavioral
//! style inventory and a values motivator inventory), scores the rankings
//! into fixed-dimension profiles, persists results per user, and assembles
//! the report data the presentation layer renders.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
