//! Extending standard functions and structures.

pub mod fmt;
