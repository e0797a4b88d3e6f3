//! Repository storage areas
//!
//! - `commits`: per-branch history of commit directories
//! - `head`: the branch pointer
//! - `locator`: finding the repository that encloses a directory
//! - `repository`: ties the areas together for the porcelain commands
//! - `staging`: files waiting for the next commit
//! - `workspace`: the working directory that checkout rebuilds

pub mod commits;
pub mod head;
pub mod locator;
pub mod repository;
pub mod staging;
pub mod workspace;
