//! Graph algorithms
mod sorted_dfs;
pub use self::sorted_dfs::*;
