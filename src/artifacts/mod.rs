//! Value types and algorithms shared by the porcelain commands
//!
//! - `branch`: validated branch names
//! - `checkout`: file sets and the effective-history merge
//! - `commit`: commit ids and on-disk snapshots
//! - `core`: output helpers (pager wrapper)

pub mod branch;
pub mod checkout;
pub mod commit;
pub mod core;
