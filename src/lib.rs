//! Haven - Risk-Adaptive Layout Decision Engine
//!
//! This crate decides which interface elements the Haven support surface
//! shows, how strongly each is emphasized, and which screen region each
//! occupies, as a pure function of the element set and the user's current
//! risk context.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
