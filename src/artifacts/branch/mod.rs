//! Branch names
//!
//! Every branch owns one directory under `.twig/commits`, so a name has to be
//! a single, well-formed path component on top of git's ref-format rules.

pub mod branch_name;

/// Matches names git would refuse as refs, plus any `/` since branches are
/// stored flat.
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\.\.|/|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

pub const DEFAULT_BRANCH: &str = "master";
