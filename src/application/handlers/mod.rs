//! Use case handlers.

pub mod layout;
