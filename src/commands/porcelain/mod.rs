//! Porcelain commands
//!
//! - `init`: create the repository layout
//! - `add`: stage files for the next commit
//! - `commit`: snapshot the staging area onto the current branch
//! - `checkout`: switch branches and rebuild the working directory
//! - `log`: list commits across branches

pub mod add;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
