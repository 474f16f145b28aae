//! Infrastructure adapters. Implement ports.
//!
//! Filesystem store, system clock, terminal UI. Map errors to DomainError.

pub mod clock;
pub mod persistence;
pub mod ui;
