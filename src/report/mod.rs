//! Table and JSON output of the `msq` commands.
//!
//! Each submodule computes its rollups from a loaded [`Project`] and prints
//! either an aligned table or pretty JSON.

mod diff;
mod evaluate;
mod status;
mod summary;
mod treemap;

pub use diff::run as diff;
pub use evaluate::run as evaluate;
pub use status::run as status;
pub use summary::run as summary;
pub use treemap::run as treemap;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
