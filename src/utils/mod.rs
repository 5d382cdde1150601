//! Shared helpers used by every machine component.

pub mod alphabet;
