//! Command implementations
//!
//! Every user-facing command lives under `porcelain` as an `impl Repository`
//! block. Commands print one-line reports to the repository writer and
//! return a typed outcome so callers can tell a no-op from real work.

pub mod porcelain;
