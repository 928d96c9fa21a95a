//! # lst-core
//!
//! Shared core types for LanStat: the common error type and `Result` alias
//! used by every crate in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

pub use error::{Error, Result};
