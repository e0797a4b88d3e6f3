//! Checkout planning
//!
//! Switching branches rebuilds the working directory from two layers: the
//! files still sitting in the staging area, then the branch's effective file
//! set. Both layers are expressed as a [`file_set::FileSet`] so the merge
//! rules can be exercised without touching the file system.

pub mod file_set;
