//! twig: a minimal local version-control engine
//!
//! A repository tracks one working directory across named branches. Files
//! are staged into `.twig/staging`, committed as timestamped snapshot
//! directories under `.twig/commits/<branch>`, and the working directory is
//! rebuilt from the staging area and the branch history on every checkout.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
